use std::path::{Path, PathBuf};

use super::types::AppConfig;
use crate::env::env_flag;
use crate::error::ConfigError;

/// Explicit config file path.
pub const CONFIG_ENV: &str = "STRBOOL_CONFIG";
/// Overrides `policy`.
pub const POLICY_ENV: &str = "STRBOOL_POLICY";
/// Overrides `logging.file`; accepts any boolean literal.
pub const LOG_FILE_ENV: &str = "STRBOOL_LOG_FILE";

const LOCAL_CONFIG: &str = "strbool.toml";

pub fn load_default() -> Result<AppConfig, ConfigError> {
    // Priority 1: $STRBOOL_CONFIG
    let explicit = std::env::var(CONFIG_ENV)
        .ok()
        .filter(|v| !v.trim().is_empty())
        .map(PathBuf::from);

    // Priority 2: ./strbool.toml (current directory)
    let local_config = Path::new(LOCAL_CONFIG);

    let mut cfg = match explicit {
        Some(path) => load_from_path(&path)?,
        None if local_config.exists() => load_from_path(local_config)?,
        None => AppConfig::default(),
    };

    // Environment variable overrides (Priority 0: highest)
    apply_env_overrides(&mut cfg)?;

    Ok(cfg)
}

pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_from_str(&s)
}

pub fn load_from_str(s: &str) -> Result<AppConfig, ConfigError> {
    Ok(toml::from_str::<AppConfig>(s)?)
}

pub fn apply_env_overrides(cfg: &mut AppConfig) -> Result<(), ConfigError> {
    if let Ok(v) = std::env::var(POLICY_ENV) {
        if !v.trim().is_empty() {
            cfg.policy = v.parse()?;
        }
    }

    let log_file = env_flag(LOG_FILE_ENV).map_err(|source| ConfigError::InvalidFlag {
        name: LOG_FILE_ENV.to_string(),
        source,
    })?;
    if let Some(file) = log_file {
        cfg.logging.file = file;
    }

    Ok(())
}
