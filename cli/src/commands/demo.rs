use std::io::Write;

use strbool_core::api::ParsePolicy;

use crate::error::CliError;
use crate::utils::format_outcome;

/// Inputs shown by `strbool demo`: five valid literals, then two rejected ones.
pub const DEMO_INPUTS: [&str; 7] = ["True", "False", "1", "0", "t", "Tru", "asdf"];

pub fn run_demo(policy: ParsePolicy, out: &mut impl Write) -> Result<i32, CliError> {
    for (i, input) in DEMO_INPUTS.iter().enumerate() {
        let line = match policy.apply(Some(*input)) {
            Ok(value) => format!("input='{input}', result={}", format_outcome(value)),
            Err(e) => format!("input='{input}', error={e}"),
        };
        writeln!(out, "{}. {line}", i + 1)?;
    }
    Ok(0)
}
