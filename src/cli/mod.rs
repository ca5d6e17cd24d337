//! CLI for the nucheck markup validator.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config;

use commands::{run_batch, run_check};

/// Top-level CLI for the nucheck markup validator.
#[derive(Debug, Parser)]
#[command(name = "nucheck")]
#[command(about = "Batch HTML validation against the W3C Nu markup validator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Validate matching .html files in a directory.
    Batch {
        /// Directory to scan (defaults to the current working directory).
        dir: Option<PathBuf>,

        /// Disable TLS certificate verification for this invocation.
        #[arg(long)]
        insecure: bool,

        /// Print every message, including the normally suppressed ones.
        #[arg(long)]
        no_filter: bool,
    },

    /// Validate a single local file or remote HTTP(S) URL.
    Check {
        /// Local path, or absolute http:// / https:// URL.
        target: String,

        /// Disable TLS certificate verification for this invocation.
        #[arg(long)]
        insecure: bool,

        /// Print every message, including the normally suppressed ones.
        #[arg(long)]
        no_filter: bool,
    },
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_init()?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Batch {
                dir,
                insecure,
                no_filter,
            } => {
                let dir = match dir {
                    Some(d) => d,
                    None => std::env::current_dir()?,
                };
                run_batch(&cfg, &dir, insecure, no_filter)?;
            }
            CliCommand::Check {
                target,
                insecure,
                no_filter,
            } => run_check(&cfg, &target, insecure, no_filter)?,
        }

        Ok(())
    }
}
