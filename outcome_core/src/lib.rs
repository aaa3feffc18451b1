//! Value-based outcomes for synchronous and asynchronous callables.
//!
//! Instead of guarding every call site against unwinding, hand the computation to one of
//! the `execute_*` entry points and branch on the returned [`Outcome`].
//!
//! This crate aggregates:
//! - `outcome` — the two-variant `Outcome<T, E>` type with its `data`/`err` accessors.
//! - `error` — the uniform `Failure` record every captured failure becomes.
//! - `result` — handy `Result<T, Failure>` alias.
//! - `normalize` — turning an arbitrary unwind payload into a `Failure`, and `raise` helpers.
//! - `execute` — the sync and async entry points.
//! - `hook` — an opt-in panic hook that keeps raised errors off stderr.
//!
//! ```
//! use outcome_core::{execute_sync, raise_value};
//!
//! let ok = execute_sync(|| "data");
//! assert_eq!(ok.data(), Some(&"data"));
//! assert!(ok.err().is_none());
//!
//! let failed = execute_sync(|| -> u32 { raise_value(0) });
//! assert_eq!(failed.err().map(|e| e.message()), Some(String::from("0")));
//! ```
#![warn(missing_docs)]
pub mod error;
pub mod execute;
pub mod hook;
pub mod normalize;
pub mod outcome;
pub mod result;

pub use error::Failure;
pub use execute::{execute_async, execute_sync, try_execute_async, try_execute_sync};
pub use normalize::{normalize, raise, raise_value};
pub use outcome::Outcome;
pub use result::Result;
