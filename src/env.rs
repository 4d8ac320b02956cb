//! Environment variable accessors with required and defaulted semantics.

use std::env;

use crate::error::{Error, Result};

/// Gets an environment variable, failing if it is not set.
///
/// The variable is looked up fresh on every call; nothing is cached.
///
/// # Errors
///
/// Returns [`Error::MissingVariable`] when the variable is unset. The error
/// displays as exactly the variable name.
pub fn var(key: &str) -> Result<String> {
    env::var(key).map_err(|_| Error::missing_variable(key))
}

/// Gets an environment variable, returning `default` if it is not set.
pub fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}
