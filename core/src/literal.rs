//! Boolean literal parsing.
//!
//! Tokens are compared case-insensitively and by exact equality against two
//! fixed tables. Empty or absent input yields `None` ("no value") rather than
//! an error, so callers can tell an unset flag apart from an explicit `false`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ParseBoolError};

/// Literals that map to `true`. The first entry is the canonical spelling.
pub static TRUE_LITERALS: [&str; 5] = ["true", "t", "yes", "y", "1"];

/// Literals that map to `false`. The first entry is the canonical spelling.
pub static FALSE_LITERALS: [&str; 5] = ["false", "f", "no", "n", "0"];

pub fn is_truthy_literal(input: &str) -> bool {
    in_table(&TRUE_LITERALS, &input.to_lowercase())
}

pub fn is_falsy_literal(input: &str) -> bool {
    in_table(&FALSE_LITERALS, &input.to_lowercase())
}

/// Whole-token equality against an already lower-cased input.
fn in_table(table: &[&str], lowered: &str) -> bool {
    table.iter().any(|lit| *lit == lowered)
}

/// Canonical spelling of `value` (`"true"` or `"false"`).
pub fn literal_for(value: bool) -> &'static str {
    if value {
        TRUE_LITERALS[0]
    } else {
        FALSE_LITERALS[0]
    }
}

/// Convert a string token into a boolean.
///
/// | input                          | result                         |
/// |--------------------------------|--------------------------------|
/// | `true`, `t`, `yes`, `y`, `1`   | `Ok(Some(true))`               |
/// | `false`, `f`, `no`, `n`, `0`   | `Ok(Some(false))`              |
/// | `None` or `""`                 | `Ok(None)`                     |
/// | anything else                  | `Err(InvalidBooleanLiteral)`   |
///
/// Matching ignores case but not surrounding whitespace: `" true"` is
/// rejected. Partial tokens such as `"tru"` never match.
pub fn parse(input: Option<&str>) -> Result<Option<bool>, ParseBoolError> {
    match input {
        None => Ok(None),
        Some(s) => parse_str(s),
    }
}

pub fn parse_str(input: &str) -> Result<Option<bool>, ParseBoolError> {
    if input.is_empty() {
        return Ok(None);
    }

    let lowered = input.to_lowercase();
    if in_table(&TRUE_LITERALS, &lowered) {
        return Ok(Some(true));
    }
    if in_table(&FALSE_LITERALS, &lowered) {
        return Ok(Some(false));
    }

    tracing::debug!(input, "rejected boolean literal");
    Err(ParseBoolError::invalid(input))
}

/// Like [`parse`], but an unrecognized literal is logged and mapped to `None`.
pub fn parse_lenient(input: Option<&str>) -> Option<bool> {
    match parse(input) {
        Ok(v) => v,
        Err(e) => {
            tracing::warn!(input = e.input(), "{e}; treating as unset");
            None
        }
    }
}

/// How unrecognized literals are reported to the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParsePolicy {
    /// Propagate `InvalidBooleanLiteral`.
    #[default]
    Strict,
    /// Log the failure and return no value.
    Lenient,
}

impl ParsePolicy {
    pub fn apply(self, input: Option<&str>) -> Result<Option<bool>, ParseBoolError> {
        match self {
            Self::Strict => parse(input),
            Self::Lenient => Ok(parse_lenient(input)),
        }
    }
}

impl FromStr for ParsePolicy {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Self::Strict),
            "lenient" => Ok(Self::Lenient),
            _ => Err(ConfigError::InvalidPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for ParsePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Strict => f.write_str("strict"),
            Self::Lenient => f.write_str("lenient"),
        }
    }
}
