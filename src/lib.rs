pub mod config;
pub mod logging;

pub mod batch;
pub mod cli;
pub mod client;
pub mod report;
pub mod target;
