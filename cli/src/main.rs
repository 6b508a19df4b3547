use clap::Parser;
use strbool_cli::commands::{self, cli};
use strbool_cli::error::{report_error, CliError};
use strbool_cli::logging::init_tracing;
use strbool_core::api::ParsePolicy;

fn main() {
    let args = cli::Args::parse();
    let quiet = args.is_quiet();

    let exit = match real_main(args) {
        Ok(code) => code,
        Err(e) => report_error(&e, quiet, &mut std::io::stderr()),
    };

    std::process::exit(exit);
}

fn real_main(args: cli::Args) -> Result<i32, CliError> {
    let quiet = args.is_quiet();
    let mut cfg = strbool_core::config::load_default()?;
    if args.lenient {
        cfg.policy = ParsePolicy::Lenient;
    }
    if quiet {
        cfg.logging = cfg.logging.without_console();
    }
    init_tracing(&cfg.logging).map_err(CliError::Logging)?;
    tracing::debug!(policy = %cfg.policy, quiet, "config loaded");

    let cmd = args.command.unwrap_or(cli::Commands::Demo);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    commands::dispatch(cmd, &cfg, &mut out)
}
