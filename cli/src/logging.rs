use std::sync::OnceLock;

use strbool_core::api::LoggingConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

/// Install the global subscriber described by `logging`.
///
/// `RUST_LOG` takes precedence over `logging.level`. The file sink writes
/// `<file_prefix>.<pid>.log` under [`LoggingConfig::log_dir`].
pub fn init_tracing(logging: &LoggingConfig) -> Result<(), String> {
    if !logging.enabled {
        return Ok(());
    }
    if !logging.console && !logging.file {
        return Err("logging disabled for both console and file".to_string());
    }

    let filter = build_filter(logging)?;
    let maybe_writer = logging.file.then(|| file_writer(logging)).transpose()?;

    let console_layer = logging.console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_ansi(atty::is(atty::Stream::Stderr))
    });
    let file_layer = maybe_writer.map(|w| {
        tracing_subscriber::fmt::layer()
            .with_writer(w)
            .with_ansi(false)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| e.to_string())
}

fn build_filter(logging: &LoggingConfig) -> Result<EnvFilter, String> {
    match std::env::var("RUST_LOG") {
        Ok(v) if !v.trim().is_empty() => Ok(EnvFilter::from_default_env()),
        _ => EnvFilter::try_new(&logging.level).map_err(|e| format!("invalid log level: {e}")),
    }
}

fn file_writer(logging: &LoggingConfig) -> Result<NonBlocking, String> {
    let dir = logging.log_dir();
    std::fs::create_dir_all(&dir).map_err(|e| format!("create log dir failed: {e}"))?;

    let appender =
        tracing_appender::rolling::never(dir, logging.log_file_name(std::process::id()));
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let _ = LOG_GUARD.set(guard);
    Ok(writer)
}
