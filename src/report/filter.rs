//! Suppression of known-noisy validator messages by prefix match.

use crate::config::NucheckConfig;

use super::ValidationMessage;

/// Built-in suppression list: the accessibility alt-attribute notice and the
/// obsolete name-attribute notice. Prefixes are byte-for-byte, curly quotes
/// included, as the Nu validator emits them.
pub const DEFAULT_SUPPRESS_PREFIXES: [&str; 2] = [
    "An \u{201c}img\u{201d} element must have an \u{201c}alt\u{201d} attribute",
    "The \u{201c}name\u{201d} attribute is obsolete",
];

/// Decides which diagnostic messages are suppressed from output.
#[derive(Debug, Clone)]
pub struct MessageFilter {
    prefixes: Vec<String>,
}

impl Default for MessageFilter {
    fn default() -> Self {
        Self::new(DEFAULT_SUPPRESS_PREFIXES.iter().map(|s| s.to_string()))
    }
}

impl MessageFilter {
    pub fn new(prefixes: impl IntoIterator<Item = String>) -> Self {
        Self {
            prefixes: prefixes.into_iter().collect(),
        }
    }

    /// A filter that suppresses nothing (`--no-filter`).
    pub fn none() -> Self {
        Self { prefixes: Vec::new() }
    }

    /// Built-in list, unless the config overrides it.
    pub fn from_config(cfg: &NucheckConfig) -> Self {
        match &cfg.suppress_prefixes {
            Some(prefixes) => Self::new(prefixes.iter().cloned()),
            None => Self::default(),
        }
    }

    /// True if this message should not be printed.
    pub fn suppresses(&self, m: &ValidationMessage) -> bool {
        self.prefixes.iter().any(|p| m.message.starts_with(p.as_str()))
    }
}
