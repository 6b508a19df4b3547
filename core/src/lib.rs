//! Strict conversion of string tokens into booleans.
//!
//! ```
//! use strbool_core::api::{parse_str, ParseBoolError};
//!
//! assert_eq!(parse_str("Yes"), Ok(Some(true)));
//! assert_eq!(parse_str("0"), Ok(Some(false)));
//! assert_eq!(parse_str(""), Ok(None));
//! assert_eq!(parse_str("Tru"), Err(ParseBoolError::invalid("Tru")));
//! ```

pub mod api;
pub mod config;
pub mod env;
pub mod error;
pub mod literal;
