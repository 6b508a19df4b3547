use std::io::Write;

use pretty_assertions::assert_eq;
use strbool_core::api::{AppConfig, ConfigError, LoggingConfig, ParsePolicy};
use strbool_core::config::{
    apply_env_overrides, load_from_path, load_from_str, LOG_FILE_ENV, POLICY_ENV,
};

#[test]
fn empty_document_yields_defaults() {
    let cfg = load_from_str("").unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.policy, ParsePolicy::Strict);
    assert_eq!(
        cfg.logging,
        LoggingConfig {
            enabled: true,
            console: true,
            file: false,
            level: "warn".to_string(),
            directory: None,
            file_prefix: "strbool".to_string(),
        }
    );
}

#[test]
fn log_paths_derive_from_prefix() {
    let cfg = load_from_str(
        r#"
[logging]
file_prefix = "flags"
directory = "  "
"#,
    )
    .unwrap();

    assert_eq!(cfg.logging.log_dir(), std::env::temp_dir().join("flags"));
    assert_eq!(cfg.logging.log_file_name(42), "flags.42.log");

    let explicit = LoggingConfig {
        directory: Some("/var/log/strbool".to_string()),
        ..LoggingConfig::default()
    };
    assert_eq!(
        explicit.log_dir(),
        std::path::PathBuf::from("/var/log/strbool")
    );
}

#[test]
fn without_console_keeps_file_sink_only() {
    let console_only = LoggingConfig::default().without_console();
    assert!(!console_only.console);
    assert!(!console_only.enabled);

    let with_file = LoggingConfig {
        file: true,
        ..LoggingConfig::default()
    }
    .without_console();
    assert!(!with_file.console);
    assert!(with_file.enabled);
    assert!(with_file.file);
}

#[test]
fn full_document_is_read() {
    let cfg = load_from_str(
        r#"
policy = "lenient"

[logging]
enabled = true
console = false
file = true
level = "strbool_core=debug"
directory = "/tmp/strbool-logs"
"#,
    )
    .unwrap();

    assert_eq!(cfg.policy, ParsePolicy::Lenient);
    assert!(!cfg.logging.console);
    assert!(cfg.logging.file);
    assert_eq!(cfg.logging.level, "strbool_core=debug");
    assert_eq!(cfg.logging.directory.as_deref(), Some("/tmp/strbool-logs"));
}

#[test]
fn unknown_policy_is_a_toml_error() {
    let err = load_from_str(r#"policy = "loose""#).unwrap_err();
    assert!(matches!(err, ConfigError::Toml(_)), "{err:?}");
}

#[test]
fn load_from_path_reads_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "policy = \"lenient\"").unwrap();

    let cfg = load_from_path(file.path()).unwrap();
    assert_eq!(cfg.policy, ParsePolicy::Lenient);
}

#[test]
fn load_from_missing_path_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.toml");

    match load_from_path(&missing) {
        Err(ConfigError::Io { path, .. }) => assert_eq!(path, missing),
        other => panic!("expected Io error, got {other:?}"),
    }
}

// Only test in this binary that touches these variables.
#[test]
fn env_overrides_apply_and_validate() {
    let mut cfg = AppConfig::default();

    std::env::set_var(POLICY_ENV, "Lenient");
    std::env::set_var(LOG_FILE_ENV, "Y");
    apply_env_overrides(&mut cfg).unwrap();
    assert_eq!(cfg.policy, ParsePolicy::Lenient);
    assert!(cfg.logging.file);

    std::env::set_var(LOG_FILE_ENV, "sometimes");
    match apply_env_overrides(&mut cfg) {
        Err(ConfigError::InvalidFlag { name, source }) => {
            assert_eq!(name, LOG_FILE_ENV);
            assert_eq!(source.input(), "sometimes");
        }
        other => panic!("expected InvalidFlag, got {other:?}"),
    }

    std::env::set_var(LOG_FILE_ENV, "");
    std::env::set_var(POLICY_ENV, "chaotic");
    assert!(matches!(
        apply_env_overrides(&mut cfg),
        Err(ConfigError::InvalidPolicy(_))
    ));

    std::env::remove_var(POLICY_ENV);
    std::env::remove_var(LOG_FILE_ENV);
}
