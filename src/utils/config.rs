//! Environment variable helpers

use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::error;

/// Reads and parses an environment variable
///
/// # Returns
/// `None` when the variable is unset or its value fails to parse; a
/// set-but-unparsable value is logged before falling back.
pub fn get_env_or_none<T>(env_var: &str) -> Option<T>
where
    T: FromStr,
    T::Err: Debug,
{
    let raw = env::var(env_var).ok()?;
    match raw.parse::<T>() {
        Ok(value) => Some(value),
        Err(e) => {
            error!("Failed to parse {}={}: {:?}", env_var, raw, e);
            None
        }
    }
}

/// Reads and parses an environment variable, falling back to `default`
/// when the variable is unset or fails to parse
pub fn get_env_or_default<T>(env_var: &str, default: T) -> T
where
    T: FromStr,
    T::Err: Debug,
{
    get_env_or_none(env_var).unwrap_or(default)
}
