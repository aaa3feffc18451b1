//! The panic hook is process-wide, so these checks live in their own test binary.
use std::io;
use std::panic;
use std::sync::Mutex;
use std::thread;

use futures::executor::block_on;
use outcome_core::{Failure, execute_async, execute_sync, hook, raise};

static REPORTED: Mutex<Vec<String>> = Mutex::new(Vec::new());

async fn raise_later(message: &str) -> u8 {
    raise(io::Error::other(message.to_string()))
}

fn reported() -> Vec<String> {
    REPORTED.lock().unwrap().clone()
}

#[test]
fn quiet_hook_only_silences_captured_raises() {
    panic::set_hook(Box::new(|info| {
        let message = match info.payload().downcast_ref::<Failure>() {
            Some(failure) => failure.message(),
            None => String::from("other"),
        };
        REPORTED.lock().unwrap().push(message);
    }));
    hook::install_quiet();

    let outcome = execute_sync(|| -> u8 { raise(io::Error::other("captured sync")) });
    assert_eq!(
        outcome.err().map(Failure::message),
        Some(String::from("captured sync"))
    );

    let outcome = block_on(execute_async(|| raise_later("captured async")));
    assert_eq!(
        outcome.err().map(Failure::message),
        Some(String::from("captured async"))
    );
    assert!(reported().is_empty(), "captured raises were reported: {:?}", reported());

    let escaped = thread::spawn(|| -> u8 { raise(io::Error::other("escaped")) }).join();
    assert!(escaped.is_err());
    assert_eq!(reported(), vec![String::from("escaped")]);
}
