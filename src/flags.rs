//! Flag parsing built on `clap`.
//!
//! Callers define their options as a `clap` derive struct and get back the
//! populated struct plus the trailing positional arguments. The help flag is
//! available through clap's derive defaults, and a literal `--` terminates
//! option parsing with the remainder treated as positionals.

use std::ffi::OsString;
use std::io::{self, Write};

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser};

use crate::error::{Error, Result};

/// Implemented by argument structs that collect trailing non-flag arguments.
///
/// The collecting field is usually declared as
/// `#[arg(trailing_var_arg = true)] Vec<String>`.
pub trait Positional {
    fn positional(&self) -> &[String];
}

/// Parses the process command line into `A`.
///
/// See [`parse_from`] for the behavior on failure.
///
/// # Errors
///
/// Returns any parse failure from the underlying engine, including the
/// help-requested case.
pub fn parse<A>() -> Result<(A, Vec<String>)>
where
    A: Parser + Positional,
{
    parse_from(std::env::args_os())
}

/// Parses an explicit argument sequence into `A`, returning the populated
/// struct together with the ordered positional arguments.
///
/// When parsing fails because of an unknown flag, the full usage text is
/// written to standard output before the error is returned. Every other
/// failure is returned as-is; in particular a `--help` request surfaces as a
/// parse error that the caller must handle itself. The process is never
/// terminated from here.
///
/// # Errors
///
/// Returns [`Error::FlagParse`] wrapping the engine's error unchanged.
pub fn parse_from<A, I, T>(argv: I) -> Result<(A, Vec<String>)>
where
    A: Parser + Positional,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match A::try_parse_from(argv) {
        Ok(args) => {
            let positional = args.positional().to_vec();
            Ok((args, positional))
        }
        Err(error) => {
            if error.kind() == ErrorKind::UnknownArgument {
                print!("{}", usage::<A>());
                let _ = io::stdout().flush();
            }
            Err(Error::FlagParse(error))
        }
    }
}

/// Renders the full usage/help text for `A`.
pub fn usage<A: CommandFactory>() -> String {
    A::command().render_help().to_string()
}
