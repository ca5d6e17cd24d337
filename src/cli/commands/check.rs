//! `nucheck check <TARGET>` -- validate a single local file or remote URL.

use anyhow::Result;

use crate::client::ValidatorClient;
use crate::config::NucheckConfig;
use crate::report::{self, MessageFilter};
use crate::target::Target;

pub fn run_check(cfg: &NucheckConfig, target: &str, insecure: bool, no_filter: bool) -> Result<()> {
    let client = ValidatorClient::from_config(cfg, insecure);
    let filter = if no_filter {
        MessageFilter::none()
    } else {
        MessageFilter::from_config(cfg)
    };

    let target = Target::classify(target);
    println!("Processing {}", target.name());
    let result = client.validate(&target)?;
    for line in report::surviving_lines(&result, &filter) {
        println!("{}", line);
    }
    Ok(())
}
