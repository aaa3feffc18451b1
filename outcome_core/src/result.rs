//! `Result` alias for values that failed the way the wrapper reports failures.
//!
//! [`Outcome::into_result`](crate::Outcome::into_result) hands back this type, so a
//! captured outcome can continue through `?` in code that expects `Result`.
use crate::error::Failure;

/// `Result` whose error side defaults to `Failure`.
pub type Result<T, E = Failure> = std::result::Result<T, E>;
