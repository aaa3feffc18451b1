//! Sync and async entry points.
//!
//! Each entry point invokes its callable exactly once and reports what happened as an
//! [`Outcome`]. An unwind never escapes; it is normalized into a [`Failure`].
//!
//! - `execute_sync` / `execute_async` — for callables that return a plain value.
//! - `try_execute_sync` / `try_execute_async` — for callables that return `Result`;
//!   an `Err` lands in the same `Failure` an unwind would.
//!
//! There is no shared state between calls, so concurrent invocations never interact.
//! No retries, no timeouts: a callable that never settles keeps the wrapper waiting.
//!
//! Unwind safety is asserted on the caller's behalf. If the callable leaves captured
//! state half-updated when it fails, dealing with that is up to the caller.
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};
use std::pin::pin;

use futures::FutureExt;
use futures::future::poll_fn;
use log::debug;

use crate::error::{BoxError, Failure};
use crate::hook::CaptureGuard;
use crate::normalize::normalize;
use crate::outcome::Outcome;

/// Runs `callable` once and captures its value or failure.
pub fn execute_sync<T, F>(callable: F) -> Outcome<T>
where
    F: FnOnce() -> T,
{
    let caught = {
        let _guard = CaptureGuard::enter();
        panic::catch_unwind(AssertUnwindSafe(callable))
    };
    match caught {
        Ok(data) => Outcome::Success(data),
        Err(payload) => captured(normalize(payload)),
    }
}

/// Runs `callable` once, awaits the future it returns and captures the value or failure.
///
/// A failure while building the future is captured the same way as one raised while
/// polling it. The only suspension points are the future's own.
pub async fn execute_async<T, F, Fut>(callable: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = T>,
{
    let built = {
        let _guard = CaptureGuard::enter();
        panic::catch_unwind(AssertUnwindSafe(callable))
    };
    let future = match built {
        Ok(future) => future,
        Err(payload) => return captured(normalize(payload)),
    };

    // Each poll may run on a different thread, so the guard is taken per poll.
    let mut caught = pin!(AssertUnwindSafe(future).catch_unwind());
    let settled = poll_fn(|cx| {
        let _guard = CaptureGuard::enter();
        caught.as_mut().poll(cx)
    })
    .await;

    match settled {
        Ok(data) => Outcome::Success(data),
        Err(payload) => captured(normalize(payload)),
    }
}

/// Like [`execute_sync`] for callables that return `Result`.
pub fn try_execute_sync<T, E, F>(callable: F) -> Outcome<T>
where
    F: FnOnce() -> Result<T, E>,
    E: Into<BoxError>,
{
    flatten(execute_sync(callable))
}

/// Like [`execute_async`] for callables whose future resolves to `Result`.
pub async fn try_execute_async<T, E, F, Fut>(callable: F) -> Outcome<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Into<BoxError>,
{
    flatten(execute_async(callable).await)
}

fn flatten<T, E>(outcome: Outcome<Result<T, E>>) -> Outcome<T>
where
    E: Into<BoxError>,
{
    match outcome {
        Outcome::Success(Ok(data)) => Outcome::Success(data),
        Outcome::Success(Err(err)) => {
            let failure = Failure::raised(err);
            debug!("callable returned an error: {}", failure);
            Outcome::Failure(failure)
        }
        Outcome::Failure(failure) => Outcome::Failure(failure),
    }
}

fn captured<T>(failure: Failure) -> Outcome<T> {
    debug!("callable raised: {}", failure);
    Outcome::Failure(failure)
}
