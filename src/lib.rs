//! Clikit
//!
//! This crate provides small helpers for command-line tool authors, cutting
//! down the boilerplate that accumulates at the top of every binary: parsing
//! flags into a caller-defined struct, reading environment variables with
//! required or fallback semantics, reading files whose paths contain
//! shell-style variable references, and a panic-recovery plus fatal-error
//! pair for top-level error handling.
//!
//! # Key Features
//!
//! - **Flag Parsing**: Thin wrapper over `clap` that returns the populated
//!   argument struct together with the trailing positional arguments, and
//!   prints usage when an unknown flag is given
//! - **Environment Access**: Required lookups that fail with the variable
//!   name, and defaulted lookups that never fail
//! - **File Reading**: Shell-style variable expansion and field splitting
//!   applied to the path before the file is read
//! - **Top-Level Boundaries**: A panic-absorbing entry-point wrapper and a
//!   log-then-exit helper for unrecoverable errors
//! - **Error Handling**: One error type covering all failure modes, returned
//!   to the caller everywhere except the two boundary helpers
//!
//! # Examples
//!
//! Reading a file at a path that references the environment:
//!
//! ```no_run
//! use clikit::file_handling::read;
//!
//! let contents = read("$HOME/.config/mytool/settings.toml")?;
//! println!("{contents}");
//! # Ok::<(), clikit::error::Error>(())
//! ```

pub mod env;
pub mod error;
pub mod file_handling;
pub mod flags;
pub mod logging;
pub mod termination;
