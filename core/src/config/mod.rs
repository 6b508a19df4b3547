mod load;
mod types;

pub use load::{
    apply_env_overrides, load_default, load_from_path, load_from_str, CONFIG_ENV, LOG_FILE_ENV,
    POLICY_ENV,
};
pub use types::{AppConfig, LoggingConfig};
