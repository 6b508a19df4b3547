pub mod cli;
pub mod demo;
pub mod literals;
pub mod parse;

use std::io::Write;

use strbool_core::api::AppConfig;

use crate::error::CliError;
use cli::Commands;

pub fn dispatch(cmd: Commands, cfg: &AppConfig, out: &mut impl Write) -> Result<i32, CliError> {
    tracing::debug!(?cmd, policy = %cfg.policy, "dispatch");
    match cmd {
        Commands::Demo => demo::run_demo(cfg.policy, out),
        Commands::Parse(args) => parse::run_parse(&args, cfg.policy, out),
        Commands::Literals => literals::run_literals(out),
    }
}
