pub mod check;
pub mod compile;
pub mod completions;

use console::style;

pub const EXIT_SUCCESS: u8 = 0;
pub const EXIT_FAILURE: u8 = 1;
/// At least one document failed while the batch continued.
pub const EXIT_DOCUMENT_ERROR: u8 = 2;

pub fn json_pretty(value: &impl serde::Serialize) -> Result<String, String> {
    serde_json::to_string_pretty(value).map_err(|e| format!("JSON serialization failed: {e}"))
}

pub fn status_ok(msg: &str) {
    println!("{} {msg}", style("✓").green());
}

pub fn status_fail(msg: &str) {
    println!("{} {msg}", style("✗").red());
}

pub fn status_warn(msg: &str) {
    println!("{} {msg}", style("!").yellow());
}
