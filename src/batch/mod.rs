//! Batch driver: scan a directory, validate each matching file, print the
//! surviving diagnostics.
//!
//! Fully sequential; each file's network round-trip completes before the
//! next begins. A failing file aborts the whole batch -- there is no
//! per-file isolation or retry.

mod select;

pub use select::select_files;

use anyhow::Result;
use std::path::Path;

use crate::client::ValidatorClient;
use crate::report::{self, MessageFilter};
use crate::target::Target;

/// Validates every matching file under `dir`, printing a progress line per
/// file and one formatted line per unsuppressed diagnostic.
pub fn run(dir: &Path, client: &ValidatorClient, filter: &MessageFilter) -> Result<()> {
    for path in select_files(dir)? {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        println!("Processing {}", name);

        let result = client.validate(&Target::Local(path))?;
        for line in report::surviving_lines(&result, filter) {
            println!("{}", line);
        }
    }
    Ok(())
}
