//! CLI command handlers, one per file.

mod batch;
mod check;

pub use batch::run_batch;
pub use check::run_check;
