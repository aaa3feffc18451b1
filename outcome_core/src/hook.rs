//! Opt-in panic hook for `raise`.
//!
//! The default panic hook prints every panic to stderr, including the ones raised on
//! purpose with [`raise`](crate::raise) and captured a moment later. `install_quiet`
//! chains a hook in front of the current one that drops output for those payloads and
//! forwards everything else unchanged.
//!
//! Output is only dropped while an `execute_*` call on the same thread is running its
//! callable. A `raise` that escapes to the top of a thread is reported like any other
//! panic.
//!
//! The hook is process-wide, so installing it is left to the application.
use std::cell::Cell;
use std::panic;
use std::sync::Once;

use log::trace;

use crate::error::Failure;

static INSTALL: Once = Once::new();

thread_local! {
    /// Number of `execute_*` callables currently running on this thread.
    static CAPTURE_DEPTH: Cell<usize> = const { Cell::new(0) };
}

/// Marks the current thread as running a captured callable until dropped.
pub(crate) struct CaptureGuard(());

impl CaptureGuard {
    pub(crate) fn enter() -> Self {
        CAPTURE_DEPTH.with(|depth| depth.set(depth.get() + 1));
        CaptureGuard(())
    }
}

impl Drop for CaptureGuard {
    fn drop(&mut self) {
        CAPTURE_DEPTH.with(|depth| depth.set(depth.get().saturating_sub(1)));
    }
}

/// Returns `true` while an `execute_*` call on this thread runs its callable.
pub(crate) fn is_capturing() -> bool {
    CAPTURE_DEPTH
        .try_with(|depth| depth.get() > 0)
        .unwrap_or(false)
}

/// Installs the quiet hook. Calling it again does nothing.
pub fn install_quiet() {
    INSTALL.call_once(|| {
        let previous = panic::take_hook();
        panic::set_hook(Box::new(move |info| {
            if is_capturing() {
                if let Some(failure) = info.payload().downcast_ref::<Failure>() {
                    trace!("raised failure kept off stderr: {}", failure);
                    return;
                }
            }
            previous(info);
        }));
    });
}

/// Returns `true` once [`install_quiet`] has run.
pub fn is_installed() -> bool {
    INSTALL.is_completed()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::execute::{execute_async, execute_sync};
    use crate::normalize::raise;
    use futures::executor::block_on;
    use std::io;

    #[test]
    fn install_is_idempotent_and_keeps_capturing() {
        install_quiet();
        install_quiet();
        assert!(is_installed());

        let outcome = execute_sync(|| -> u8 { raise(io::Error::other("quiet")) });
        assert_eq!(outcome.err().map(Failure::message), Some(String::from("quiet")));

        let outcome = execute_sync(|| -> u8 { panic!("loud") });
        assert_eq!(outcome.err().map(Failure::message), Some(String::from("loud")));
    }

    #[test]
    fn guards_nest_and_unwind() {
        assert!(!is_capturing());
        {
            let _outer = CaptureGuard::enter();
            let _inner = CaptureGuard::enter();
            assert!(is_capturing());
        }
        assert!(!is_capturing());
    }

    #[test]
    fn depth_is_set_only_while_the_callable_runs() {
        let inside = execute_sync(is_capturing);
        assert_eq!(inside.into_data(), Some(true));

        let _ = execute_sync(|| -> u8 { raise(io::Error::other("gone")) });
        assert!(!is_capturing());

        let inside = block_on(execute_async(|| async { is_capturing() }));
        assert_eq!(inside.into_data(), Some(true));
        assert!(!is_capturing());
    }
}
