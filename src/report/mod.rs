//! Validator response types and console formatting.
//!
//! The service's JSON is decoded only as far as the `messages` array; every
//! other field is ignored and messages themselves are never mutated, only
//! filtered and printed.

mod filter;

pub use filter::{MessageFilter, DEFAULT_SUPPRESS_PREFIXES};

use serde::Deserialize;

/// One reported issue: severity type, source line, human-readable text.
#[derive(Debug, Clone, Deserialize)]
pub struct ValidationMessage {
    /// Severity type, e.g. "error" or "info".
    #[serde(rename = "type")]
    pub kind: String,
    /// Line number; the service omits it for some messages, reported as 0.
    #[serde(rename = "lastLine", default)]
    pub last_line: u64,
    /// Human-readable description.
    pub message: String,
}

/// The service's full JSON response; only `messages` is consumed.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ValidationResult {
    #[serde(default)]
    pub messages: Vec<ValidationMessage>,
}

/// Formats one diagnostic line, exactly as printed to the console.
pub fn format_message(m: &ValidationMessage) -> String {
    format!(
        "Type: {}, Line: {}, Description: {}",
        m.kind, m.last_line, m.message
    )
}

/// Formatted lines for every message the filter does not suppress, in
/// service order.
pub fn surviving_lines(result: &ValidationResult, filter: &MessageFilter) -> Vec<String> {
    result
        .messages
        .iter()
        .filter(|m| !filter.suppresses(m))
        .map(format_message)
        .collect()
}
