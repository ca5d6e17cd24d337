//! Filename selection for a batch run.

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Literal prefixes a candidate filename must start with.
const NAME_PREFIXES: [&str; 3] = ["3-5", "4t", "5t"];

/// True for names the batch validates: `.html` suffix and one of the
/// literal prefixes. The two-character prefixes match regardless of the
/// third character ("4ty.html" and "4tz.html" both qualify).
pub(crate) fn matches_name(name: &str) -> bool {
    name.ends_with(".html") && NAME_PREFIXES.iter().any(|p| name.starts_with(p))
}

/// Immediate entries of `dir` whose names match, in enumeration order
/// (platform-defined, not sorted).
pub fn select_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let entries = fs::read_dir(dir)
        .with_context(|| format!("cannot read directory {}", dir.display()))?;

    let mut selected = Vec::new();
    for entry in entries {
        let entry = entry?;
        if let Some(name) = entry.file_name().to_str() {
            if matches_name(name) {
                selected.push(entry.path());
            }
        }
    }
    Ok(selected)
}
