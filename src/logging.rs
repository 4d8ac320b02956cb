//! Logger initialization for binaries built on this crate.
//!
//! Library code only ever logs through the `log` facade macros; this module
//! is the single point where a backend gets installed. Call [`init`] once at
//! the top of `main`.

use env_logger::{Builder, Env, Target};

/// Filter applied when `RUST_LOG` is not set.
const DEFAULT_FILTER: &str = "info";

/// Installs the process-wide logger.
///
/// Output is plain text on standard output with no timestamp and full level
/// names. The level filter defaults to `info` and can be overridden through
/// the `RUST_LOG` environment variable.
///
/// The first call wins; later calls (including from other crates that raced
/// to install a logger) are no-ops.
pub fn init() {
    let env = Env::default().default_filter_or(DEFAULT_FILTER);

    let _ = Builder::from_env(env)
        .target(Target::Stdout)
        .format_timestamp(None)
        .try_init();
}
