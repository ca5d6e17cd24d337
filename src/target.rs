//! Validation targets: a local file path or an absolute HTTP(S) URL.

use std::path::PathBuf;

/// What the validator client is asked to check.
///
/// A string is a remote target iff it begins with `http://` or `https://`;
/// everything else is treated as a local path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    Local(PathBuf),
    Remote(String),
}

impl Target {
    /// Classifies a raw target string as local or remote.
    pub fn classify(raw: &str) -> Target {
        if raw.starts_with("http://") || raw.starts_with("https://") {
            Target::Remote(raw.to_string())
        } else {
            Target::Local(PathBuf::from(raw))
        }
    }

    /// Human-readable name, also used as the upload filename in the
    /// multipart form.
    pub fn name(&self) -> String {
        match self {
            Target::Local(path) => path.display().to_string(),
            Target::Remote(url) => url.clone(),
        }
    }
}
