//! Reading files whose paths contain shell-style expansion.
//!
//! Paths are resolved the way a POSIX shell would interpret them, without
//! invoking a shell process: variable references and `~` are substituted
//! from the process environment, the result is split into fields, and the
//! fields are concatenated into the final path.

use std::fs;

use crate::error::{Error, Result};

/// Expands and field-splits a path string into the path to actually open.
fn resolve(path: &str) -> Result<String> {
    let expanded = match shellexpand::full(path) {
        Ok(expanded) => expanded,
        Err(e) => return Err(Error::expansion_error(path.to_string(), e)),
    };

    let fields = match shell_words::split(&expanded) {
        Ok(fields) => fields,
        Err(e) => return Err(Error::field_split_error(path.to_string(), e)),
    };

    // Fields are concatenated without a separator, so quoting in the input
    // decides where whitespace survives.
    Ok(fields.concat())
}

/// Reads a file and returns its contents, expanding any variables in the
/// path first.
///
/// Only the process environment is consulted during expansion; no extra
/// variable bindings are supported.
///
/// # Errors
///
/// Returns an error if:
/// - The path contains a reference to an unset variable
/// - The path cannot be split into shell fields (e.g. an unclosed quote)
/// - The resolved file cannot be opened or read
pub fn read(path: &str) -> Result<String> {
    let resolved = resolve(path)?;

    match fs::read_to_string(&resolved) {
        Ok(contents) => Ok(contents),
        Err(e) => Err(Error::io_error("input".to_string(), resolved, e)),
    }
}
