//! strbool-cli library, exposes modules for unit testing.

pub mod commands;
pub mod error;
pub mod logging;
pub mod utils;
