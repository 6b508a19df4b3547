use std::io::Write;

use strbool_core::api::ParsePolicy;

use super::cli::ParseArgs;
use crate::error::CliError;
use crate::utils::format_outcome;

/// Convert every value in order. In strict mode the first invalid literal
/// aborts the run; values before it have already been printed.
pub fn run_parse(
    args: &ParseArgs,
    policy: ParsePolicy,
    out: &mut impl Write,
) -> Result<i32, CliError> {
    for value in &args.values {
        let outcome = policy.apply(Some(value.as_str()))?;
        if !args.quiet {
            writeln!(out, "{value} => {}", format_outcome(outcome))?;
        }
    }
    Ok(0)
}
