//! `nucheck batch [DIR]` -- validate matching .html files in a directory.

use anyhow::Result;
use std::path::Path;

use crate::batch;
use crate::client::ValidatorClient;
use crate::config::NucheckConfig;
use crate::report::MessageFilter;

pub fn run_batch(cfg: &NucheckConfig, dir: &Path, insecure: bool, no_filter: bool) -> Result<()> {
    let client = ValidatorClient::from_config(cfg, insecure);
    let filter = if no_filter {
        MessageFilter::none()
    } else {
        MessageFilter::from_config(cfg)
    };
    batch::run(dir, &client, &filter)
}
