//! Canned callables the probe can run.
//!
//! Each `Scenario` describes one way a callable can settle. The same scenario can be
//! driven through either entry point, so both paths can be compared side by side.
use clap::ValueEnum;
use outcome_core::{Outcome, raise, raise_value, try_execute_async, try_execute_sync};
use serde_json::Value;
use strum_macros::{Display, EnumString};
use thiserror::Error;

/// Error-like value with its own type, raised by `Scenario::ExtendedError`.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct ExtendedError {
    /// Error text.
    pub message: String,
}

/// Set of runnable scenarios.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Display, EnumString)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Scenario {
    /// Returns the string `"data"`.
    ReturnData,
    /// Returns nothing; still a success.
    ReturnNull,
    /// Raises an error with message `"error"`.
    RaiseError,
    /// Raises the bare string `"error"`.
    RaiseString,
    /// Raises an `ExtendedError` with message `"message"`.
    ExtendedError,
    /// Raises the number `0`.
    RaiseZero,
    /// Returns `Err("error")` instead of raising.
    ReturnErr,
}

impl Scenario {
    /// Settles the scenario's callable: returns, raises, or returns an error.
    fn settle(self) -> Result<Value, String> {
        match self {
            Scenario::ReturnData => Ok(Value::from("data")),
            Scenario::ReturnNull => Ok(Value::Null),
            Scenario::RaiseError => raise(std::io::Error::other("error")),
            Scenario::RaiseString => raise_value("error"),
            Scenario::ExtendedError => raise(ExtendedError {
                message: String::from("message"),
            }),
            Scenario::RaiseZero => raise_value(0),
            Scenario::ReturnErr => Err(String::from("error")),
        }
    }

    /// Runs the scenario through the synchronous entry point.
    pub fn run_sync(self) -> Outcome<Value> {
        try_execute_sync(move || self.settle())
    }

    /// Runs the scenario through the async entry point; the callable yields once before
    /// settling.
    pub async fn run_async(self) -> Outcome<Value> {
        try_execute_async(move || async move {
            yield_now().await;
            self.settle()
        })
        .await
    }
}

/// Future that is pending exactly once.
async fn yield_now() {
    let mut yielded = false;
    futures::future::poll_fn(|cx| {
        if yielded {
            std::task::Poll::Ready(())
        } else {
            yielded = true;
            cx.waker().wake_by_ref();
            std::task::Poll::Pending
        }
    })
    .await
}
