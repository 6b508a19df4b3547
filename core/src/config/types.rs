use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::literal::ParsePolicy;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Applied by the CLI when a token is not a recognized literal.
    #[serde(default)]
    pub policy: ParsePolicy,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_logging_enabled")]
    pub enabled: bool,

    /// If true, log to stderr.
    #[serde(default = "default_logging_console")]
    pub console: bool,

    /// If true, log to a file under `directory` (or OS temp dir if unset).
    #[serde(default)]
    pub file: bool,

    /// EnvFilter string, e.g. "warn" or "strbool_core=debug".
    #[serde(default = "default_logging_level")]
    pub level: String,

    /// Optional directory for log files. If empty or unset, uses OS temp dir.
    #[serde(default)]
    pub directory: Option<String>,

    /// Log file name prefix; files are named `<prefix>.<pid>.log`.
    #[serde(default = "default_logging_file_prefix")]
    pub file_prefix: String,
}

fn default_logging_enabled() -> bool {
    true
}

fn default_logging_console() -> bool {
    true
}

fn default_logging_level() -> String {
    "warn".to_string()
}

fn default_logging_file_prefix() -> String {
    "strbool".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            enabled: default_logging_enabled(),
            console: default_logging_console(),
            file: false,
            level: default_logging_level(),
            directory: None,
            file_prefix: default_logging_file_prefix(),
        }
    }
}

impl LoggingConfig {
    /// Directory log files go to: `directory` if set, else `<tmp>/<file_prefix>`.
    pub fn log_dir(&self) -> PathBuf {
        match self
            .directory
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            Some(d) => PathBuf::from(d),
            None => std::env::temp_dir().join(&self.file_prefix),
        }
    }

    pub fn log_file_name(&self, pid: u32) -> String {
        format!("{}.{pid}.log", self.file_prefix)
    }

    /// Same settings with stderr output switched off. Logging is disabled
    /// entirely when no file sink remains.
    pub fn without_console(&self) -> Self {
        Self {
            enabled: self.enabled && self.file,
            console: false,
            ..self.clone()
        }
    }
}
