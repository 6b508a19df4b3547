use std::io::Write;

use strbool_core::api::{FALSE_LITERALS, TRUE_LITERALS};

use crate::error::CliError;

pub fn run_literals(out: &mut impl Write) -> Result<i32, CliError> {
    writeln!(out, "true:  {}", TRUE_LITERALS.join(", "))?;
    writeln!(out, "false: {}", FALSE_LITERALS.join(", "))?;
    writeln!(out, "(case-insensitive, exact match)")?;
    Ok(0)
}
