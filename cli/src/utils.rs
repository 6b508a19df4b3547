use strbool_core::api::literal_for;

/// Render a parse outcome for terminal output.
pub fn format_outcome(value: Option<bool>) -> &'static str {
    match value {
        Some(b) => literal_for(b),
        None => "none",
    }
}
