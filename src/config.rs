use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Default Nu validator endpoint. The query string requests JSON output;
/// the same preference is repeated as a form field on submission.
pub const DEFAULT_VALIDATOR_URL: &str = "http://validator.w3.org/nu/?out=json";

/// Global configuration loaded from `~/.config/nucheck/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NucheckConfig {
    /// Validator endpoint the markup is POSTed to.
    pub validator_url: String,
    /// Disable TLS certificate verification on all HTTP calls.
    /// Off by default; enabling it is logged loudly at startup.
    #[serde(default)]
    pub insecure_tls: bool,
    /// Optional replacement for the built-in message suppression list.
    /// Each entry is matched as a prefix of the diagnostic text.
    #[serde(default)]
    pub suppress_prefixes: Option<Vec<String>>,
}

impl Default for NucheckConfig {
    fn default() -> Self {
        Self {
            validator_url: DEFAULT_VALIDATOR_URL.to_string(),
            insecure_tls: false,
            suppress_prefixes: None,
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("nucheck")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<NucheckConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = NucheckConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: NucheckConfig = toml::from_str(&data)?;
    Ok(cfg)
}
