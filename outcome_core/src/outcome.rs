//! The two-variant outcome of a single execution attempt.
//!
//! An `Outcome` is either `Success` carrying the callable's value or `Failure` carrying
//! what went wrong. [`Outcome::data`] and [`Outcome::err`] mirror a `{ data, err }`
//! object: exactly one of them is `Some`.
//!
//! Always discriminate on `err()`. A successful callable may well return an "empty"
//! value (`None`, `()`), so the data side alone says nothing about success.
use std::fmt::Display;

use serde::ser::{Serialize, SerializeStruct, Serializer};

use crate::error::Failure;
use crate::result::Result;

/// Result of running a callable through one of the `execute_*` entry points.
#[derive(Debug)]
#[must_use = "an outcome may be a failure, which should be handled"]
pub enum Outcome<T, E = Failure> {
    /// The callable completed and produced a value.
    Success(T),
    /// The callable raised (or returned) a failure.
    Failure(E),
}

impl<T, E> Outcome<T, E> {
    /// The produced value, `None` on failure.
    pub fn data(&self) -> Option<&T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// The failure, `None` on success.
    pub fn err(&self) -> Option<&E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    /// Returns `true` for `Success`.
    pub fn is_success(&self) -> bool {
        matches!(self, Outcome::Success(_))
    }

    /// Returns `true` for `Failure`.
    pub fn is_failure(&self) -> bool {
        matches!(self, Outcome::Failure(_))
    }

    /// Consumes the outcome, keeping only the value.
    pub fn into_data(self) -> Option<T> {
        match self {
            Outcome::Success(data) => Some(data),
            Outcome::Failure(_) => None,
        }
    }

    /// Consumes the outcome, keeping only the failure.
    pub fn into_err(self) -> Option<E> {
        match self {
            Outcome::Success(_) => None,
            Outcome::Failure(err) => Some(err),
        }
    }

    /// Positional `(data, err)` pair; exactly one side is `Some`.
    pub fn into_parts(self) -> (Option<T>, Option<E>) {
        match self {
            Outcome::Success(data) => (Some(data), None),
            Outcome::Failure(err) => (None, Some(err)),
        }
    }

    /// Converts into a standard `Result`.
    pub fn into_result(self) -> Result<T, E> {
        match self {
            Outcome::Success(data) => Ok(data),
            Outcome::Failure(err) => Err(err),
        }
    }

    /// Borrows both sides.
    pub fn as_ref(&self) -> Outcome<&T, &E> {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Maps the value, leaving a failure untouched.
    pub fn map<U, F>(self, f: F) -> Outcome<U, E>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Outcome::Success(data) => Outcome::Success(f(data)),
            Outcome::Failure(err) => Outcome::Failure(err),
        }
    }

    /// Maps the failure, leaving a value untouched.
    pub fn map_err<G, F>(self, f: F) -> Outcome<T, G>
    where
        F: FnOnce(E) -> G,
    {
        match self {
            Outcome::Success(data) => Outcome::Success(data),
            Outcome::Failure(err) => Outcome::Failure(f(err)),
        }
    }
}

impl<T, E> Outcome<T, E>
where
    E: Display,
{
    /// Returns the value, panicking with the failure's message otherwise.
    ///
    /// # Panics
    ///
    /// If the outcome is a `Failure`.
    #[track_caller]
    pub fn unwrap_data(self) -> T {
        match self {
            Outcome::Success(data) => data,
            Outcome::Failure(err) => panic!("called `Outcome::unwrap_data` on a failure: {err}"),
        }
    }
}

impl<T, E> From<Outcome<T, E>> for Result<T, E> {
    fn from(outcome: Outcome<T, E>) -> Self {
        outcome.into_result()
    }
}

impl<T, E> From<Result<T, E>> for Outcome<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(data) => Outcome::Success(data),
            Err(err) => Outcome::Failure(err),
        }
    }
}

/// Serializes as `{"data": <value or null>, "err": <message or null>}`.
impl<T, E> Serialize for Outcome<T, E>
where
    T: Serialize,
    E: Display,
{
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("Outcome", 2)?;
        state.serialize_field("data", &self.data())?;
        state.serialize_field("err", &self.err().map(ToString::to_string))?;
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn exactly_one_side_is_set() {
        let ok: Outcome<&str> = Outcome::Success("data");
        assert_eq!(ok.data(), Some(&"data"));
        assert!(ok.err().is_none());
        assert!(ok.is_success());

        let failed: Outcome<&str> = Outcome::Failure(Failure::coerced("error"));
        assert!(failed.data().is_none());
        assert_eq!(failed.err().map(Failure::message), Some(String::from("error")));
        assert!(failed.is_failure());
    }

    #[test]
    fn empty_data_is_still_a_success() {
        let ok: Outcome<Option<u8>> = Outcome::Success(None);
        assert!(ok.err().is_none());
        assert_eq!(ok.into_parts().0, Some(None));
    }

    #[test]
    fn converts_to_and_from_result() {
        let ok = Outcome::from(Ok::<u8, String>(1));
        assert_eq!(ok.into_result(), Ok(1));

        let failed = Result::<u8, String>::from(Outcome::Failure(String::from("no")));
        assert_eq!(failed, Err(String::from("no")));
    }

    #[test]
    fn map_touches_one_side_only() {
        let ok: Outcome<u8, String> = Outcome::Success(2);
        assert_eq!(ok.map(|v| v * 2).into_data(), Some(4));

        let failed: Outcome<u8, String> = Outcome::Failure(String::from("no"));
        let failed = failed.map(|v| v * 2).map_err(|e| e.len());
        assert_eq!(failed.into_err(), Some(2));
    }

    #[test]
    #[should_panic(expected = "called `Outcome::unwrap_data` on a failure: boom")]
    fn unwrap_data_panics_on_failure() {
        let failed: Outcome<u8> = Outcome::Failure(Failure::coerced("boom"));
        let _ = failed.unwrap_data();
    }

    #[test]
    fn serializes_with_named_fields() {
        let ok: Outcome<&str> = Outcome::Success("data");
        assert_eq!(
            serde_json::to_value(&ok).unwrap(),
            json!({ "data": "data", "err": null })
        );

        let failed: Outcome<&str> = Outcome::Failure(Failure::coerced("error"));
        assert_eq!(
            serde_json::to_value(&failed).unwrap(),
            json!({ "data": null, "err": "error" })
        );
    }
}
