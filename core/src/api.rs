//! Stable re-exports for consumers (`cli` and external crates).
//!
//! Prefer importing from `strbool_core::api` instead of reaching into internal modules.

pub use crate::config::{load_default, AppConfig, LoggingConfig};
pub use crate::env::{env_flag, env_flag_or};
pub use crate::error::{ConfigError, ParseBoolError};
pub use crate::literal::{
    is_falsy_literal, is_truthy_literal, literal_for, parse, parse_lenient, parse_str,
    ParsePolicy, FALSE_LITERALS, TRUE_LITERALS,
};
