//! Top-level boundaries for panics and unrecoverable errors.
//!
//! Everything below these boundaries propagates errors with `Result`; the
//! two helpers here exist so binaries do not re-implement the same
//! catch-all at the top of every `main`.
//!
//! ```no_run
//! use std::process::ExitCode;
//!
//! fn run() -> clikit::error::Result<()> {
//!     let value = clikit::env::var("MYTOOL_TOKEN");
//!     clikit::termination::fatal_if(value.as_ref().err());
//!     Ok(())
//! }
//!
//! fn main() -> ExitCode {
//!     clikit::logging::init();
//!     match clikit::termination::recover(run) {
//!         Some(Ok(())) => ExitCode::SUCCESS,
//!         Some(Err(_)) | None => ExitCode::FAILURE,
//!     }
//! }
//! ```

use std::any::Any;
use std::fmt::Display;
use std::panic::{self, UnwindSafe};
use std::process::{self, ExitCode};

use log::error;

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "panic with a non-string payload".to_string()
    }
}

/// Runs `entry_point` as the outermost call of a program, absorbing panics.
///
/// If the closure panics, the payload is logged at error level and `None`
/// is returned, letting the process continue into a normal shutdown path
/// rather than aborting with a raw panic trace. When no panic occurs the
/// closure's value is returned and nothing is logged.
pub fn recover<T, F>(entry_point: F) -> Option<T>
where
    F: FnOnce() -> T + UnwindSafe,
{
    // Silence the default hook while the panic is ours to absorb; it would
    // otherwise dump the raw trace to stderr before we get the payload.
    let previous_hook = panic::take_hook();
    panic::set_hook(Box::new(|_| {}));
    let outcome = panic::catch_unwind(entry_point);
    panic::set_hook(previous_hook);

    match outcome {
        Ok(value) => Some(value),
        Err(payload) => {
            error!("{}", panic_message(payload.as_ref()));
            None
        }
    }
}

/// Logs `error` at the severity reserved for unrecoverable failures and
/// reports the exit status the process should terminate with.
///
/// This is the decision layer behind [`fatal_if`]: it never exits the
/// process itself, so it stays testable. With no error present it logs
/// nothing and returns `None`.
pub fn fatal_code<E: Display>(error: Option<&E>) -> Option<ExitCode> {
    let error = error?;
    error!("{error}");
    Some(ExitCode::FAILURE)
}

/// Logs and terminates the process with a non-zero status when `error` is
/// present; does nothing otherwise.
///
/// Termination is immediate and non-resumable. Use with [`recover`] at the
/// top of `main` for inline handling of fallible calls.
pub fn fatal_if<E: Display>(error: Option<&E>) {
    if fatal_code(error).is_some() {
        process::exit(1);
    }
}
