use std::io::Write;

use strbool_core::api::{ConfigError, ParseBoolError};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Parse(#[from] ParseBoolError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("logging setup failed: {0}")]
    Logging(String),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

pub fn exit_code_for_error(e: &CliError) -> i32 {
    // 0: success
    // 2: invalid boolean literal
    // 11: config error
    // 20: IO / logging setup error
    match e {
        CliError::Parse(_) => 2,
        CliError::Config(_) => 11,
        CliError::Logging(_) => 20,
        CliError::Io(_) => 20,
    }
}

/// Write `e` to `err` unless `quiet`, and return the process exit code.
pub fn report_error(e: &CliError, quiet: bool, err: &mut impl Write) -> i32 {
    if !quiet {
        let _ = writeln!(err, "{e}");
    }
    exit_code_for_error(e)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(exit_code_for_error(&ParseBoolError::invalid("x").into()), 2);
        assert_eq!(
            exit_code_for_error(&ConfigError::InvalidPolicy("x".into()).into()),
            11
        );
        assert_eq!(exit_code_for_error(&CliError::Logging("x".into())), 20);
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert_eq!(exit_code_for_error(&io.into()), 20);
    }

    #[test]
    fn test_report_error_respects_quiet() {
        let e: CliError = ParseBoolError::invalid("maybe").into();

        let mut buf = Vec::new();
        assert_eq!(report_error(&e, true, &mut buf), 2);
        assert!(buf.is_empty());

        assert_eq!(report_error(&e, false, &mut buf), 2);
        assert_eq!(String::from_utf8(buf).unwrap(), "invalid boolean literal: 'maybe'\n");
    }

    #[test]
    fn test_parse_error_message_is_unwrapped() {
        let e: CliError = ParseBoolError::invalid("Tru").into();
        assert_eq!(e.to_string(), "invalid boolean literal: 'Tru'");
    }
}
