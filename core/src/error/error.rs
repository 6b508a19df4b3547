use std::path::PathBuf;

use thiserror::Error;

/// Failure to map a token onto a boolean.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseBoolError {
    #[error("invalid boolean literal: '{input}'")]
    InvalidBooleanLiteral { input: String },
}

impl ParseBoolError {
    pub fn invalid(input: impl Into<String>) -> Self {
        Self::InvalidBooleanLiteral {
            input: input.into(),
        }
    }

    /// The offending input, exactly as the caller passed it.
    pub fn input(&self) -> &str {
        match self {
            Self::InvalidBooleanLiteral { input } => input,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config io error: {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("invalid policy: {0} (expected 'strict' or 'lenient')")]
    InvalidPolicy(String),
    #[error("invalid flag {name}: {source}")]
    InvalidFlag {
        name: String,
        source: ParseBoolError,
    },
}
