//! Boolean flags read from environment variables.

use crate::error::ParseBoolError;
use crate::literal::parse_str;

/// Read `name` as a boolean literal. Unset, non-unicode and empty values
/// are all reported as `Ok(None)`.
pub fn env_flag(name: &str) -> Result<Option<bool>, ParseBoolError> {
    match std::env::var(name) {
        Ok(v) => parse_str(&v),
        Err(_) => Ok(None),
    }
}

pub fn env_flag_or(name: &str, default: bool) -> Result<bool, ParseBoolError> {
    Ok(env_flag(name)?.unwrap_or(default))
}
