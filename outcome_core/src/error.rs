//! The uniform failure record.
//!
//! Every failure captured by the `execute_*` entry points ends up as a `Failure`. A
//! value that already was an error is kept as-is inside `Failure::Raised` (same
//! allocation, never re-wrapped); anything else is turned into a message and stored in
//! `Failure::Coerced`.
//!
//! Narrowing to a concrete error type is always checked: use [`Failure::downcast_ref`]
//! or [`Failure::downcast`] instead of assuming what the callable raised.
use std::error::Error as StdError;

use thiserror::Error;

/// Boxed error type the `Raised` variant carries.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

/// Error-like record describing why a callable did not complete.
#[derive(Error, Debug)]
pub enum Failure {
    /// The callable raised or returned a value that already is an error.
    #[error(transparent)]
    Raised(BoxError),

    /// The callable raised something that is not an error; `message` is its string form.
    #[error("{message}")]
    Coerced {
        /// Stringified raised value.
        message: String,
    },
}

impl Failure {
    /// Wraps an error without changing it.
    ///
    /// Passing an already boxed error keeps that box; nothing is copied. A `Failure`
    /// is returned as-is rather than nested inside another one.
    pub fn raised<E>(err: E) -> Self
    where
        E: Into<BoxError>,
    {
        let boxed: BoxError = err.into();
        match boxed.downcast::<Failure>() {
            Ok(failure) => *failure,
            Err(err) => Failure::Raised(err),
        }
    }

    /// Builds a failure from the string form of a raised non-error value.
    pub fn coerced(message: impl Into<String>) -> Self {
        Failure::Coerced {
            message: message.into(),
        }
    }

    /// Human-readable message, the same text `Display` produces.
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns `true` if the raised error is of type `E`.
    pub fn is<E>(&self) -> bool
    where
        E: StdError + 'static,
    {
        self.downcast_ref::<E>().is_some()
    }

    /// Borrows the raised error as `E` if that is what it is.
    ///
    /// Always `None` for coerced failures.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        match self {
            Failure::Raised(err) => err.downcast_ref::<E>(),
            Failure::Coerced { .. } => None,
        }
    }

    /// Takes the raised error out as `E`, or gives the failure back untouched.
    pub fn downcast<E>(self) -> Result<Box<E>, Self>
    where
        E: StdError + 'static,
    {
        match self {
            Failure::Raised(err) => err.downcast::<E>().map_err(Failure::Raised),
            coerced @ Failure::Coerced { .. } => Err(coerced),
        }
    }

    /// The boxed error when the failure was raised as one.
    pub fn as_raised(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        match self {
            Failure::Raised(err) => Some(&**err),
            Failure::Coerced { .. } => None,
        }
    }

    /// Returns `true` if the failure was built from a non-error value.
    pub fn is_coerced(&self) -> bool {
        matches!(self, Failure::Coerced { .. })
    }
}
