//! Turning an unwind payload into a `Failure`.
//!
//! An unwinding callable hands the wrapper a `Box<dyn Any + Send>`. What it contains
//! depends on how the failure was raised:
//!
//! - `raise(err)` — a `Failure::Raised`; passed through unchanged.
//! - `panic_any(boxed_error)` with a `BoxError` — wrapped without copying the box.
//! - `panic!("...")` — a `&'static str` or `String`; becomes the message.
//! - `raise_value(v)` / `panic_any(v)` with a primitive — its `Display` form.
//! - `()` — the text `()`.
//! - anything else — the text `Box<dyn Any>`, the same placeholder std prints.
//!
//! Falsy values (`""`, `0`, `false`) are not special: something was raised, so it is a
//! failure.
//!
//! All of this relies on unwinding; a crate built with `panic = "abort"` never gets here.
use std::any::Any;
use std::panic;

use log::trace;

use crate::error::{BoxError, Failure};

/// Placeholder message for payloads that have no string form.
pub const OPAQUE_PAYLOAD: &str = "Box<dyn Any>";

/// Converts a captured unwind payload into a `Failure`.
pub fn normalize(payload: Box<dyn Any + Send>) -> Failure {
    let payload = match payload.downcast::<Failure>() {
        Ok(failure) => {
            trace!("payload already is a failure: {}", failure);
            return *failure;
        }
        Err(other) => other,
    };

    let payload = match payload.downcast::<BoxError>() {
        Ok(err) => {
            trace!("payload is a boxed error: {}", err);
            return Failure::raised(*err);
        }
        Err(other) => other,
    };

    let message = describe(payload.as_ref());
    trace!("coercing non-error payload into failure: {}", message);
    Failure::coerced(message)
}

/// String form of a payload that is not an error.
fn describe(payload: &(dyn Any + Send)) -> String {
    if let Some(text) = payload.downcast_ref::<&'static str>() {
        return (*text).to_string();
    }
    if let Some(text) = payload.downcast_ref::<String>() {
        return text.clone();
    }

    macro_rules! display_as {
        ($($ty:ty),* $(,)?) => {
            $(
                if let Some(value) = payload.downcast_ref::<$ty>() {
                    return value.to_string();
                }
            )*
        };
    }

    display_as!(
        i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64, bool, char,
    );

    if payload.is::<()>() {
        return String::from("()");
    }

    String::from(OPAQUE_PAYLOAD)
}

/// Raises an error so that the wrapper receives it with its identity intact.
///
/// An already boxed error keeps its allocation. Outside of an `execute_*` call this is
/// an ordinary panic.
pub fn raise<E>(err: E) -> !
where
    E: Into<BoxError>,
{
    panic::panic_any(Failure::raised(err))
}

/// Raises an arbitrary value; the wrapper turns it into a coerced failure.
pub fn raise_value<V>(value: V) -> !
where
    V: Any + Send + 'static,
{
    panic::panic_any(value)
}
