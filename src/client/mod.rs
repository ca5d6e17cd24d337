//! Validator client: obtain a target's bytes and submit them to the Nu
//! validator as a multipart upload.
//!
//! Uses the curl crate (libcurl). One GET per remote target plus exactly one
//! POST per validation; no retries -- network, HTTP-status, and JSON-decode
//! failures propagate to the caller.

mod fetch;
mod submit;

use anyhow::{Context, Result};
use std::fs;

use crate::config::NucheckConfig;
use crate::report::ValidationResult;
use crate::target::Target;

/// Client for a single validator endpoint.
#[derive(Debug, Clone)]
pub struct ValidatorClient {
    endpoint: String,
    insecure_tls: bool,
}

impl ValidatorClient {
    pub fn new(endpoint: impl Into<String>, insecure_tls: bool) -> Self {
        if insecure_tls {
            tracing::warn!("TLS certificate verification is DISABLED for all HTTP calls");
        }
        Self {
            endpoint: endpoint.into(),
            insecure_tls,
        }
    }

    /// Builds a client from config; `insecure_cli` is the per-invocation
    /// `--insecure` flag and ORs with the config setting.
    pub fn from_config(cfg: &NucheckConfig, insecure_cli: bool) -> Self {
        Self::new(cfg.validator_url.clone(), cfg.insecure_tls || insecure_cli)
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Validates one target and returns the service's parsed JSON response.
    ///
    /// Remote targets are fetched with a GET first and the response body is
    /// re-uploaded; local targets are read from disk. Either way the exact
    /// bytes obtained are what gets POSTed.
    pub fn validate(&self, target: &Target) -> Result<ValidationResult> {
        let bytes = match target {
            Target::Remote(url) => fetch::fetch_remote(url, self.insecure_tls)?,
            Target::Local(path) => fs::read(path)
                .with_context(|| format!("cannot read {}", path.display()))?,
        };

        tracing::debug!(name = %target.name(), bytes = bytes.len(), "submitting to validator");
        let body = submit::submit(&self.endpoint, &target.name(), &bytes, self.insecure_tls)?;

        // The service may answer with an HTML error page on bad input; that
        // is a decode fault, not an empty result.
        let result: ValidationResult = serde_json::from_slice(&body)
            .context("validator returned a non-JSON response")?;
        Ok(result)
    }
}
