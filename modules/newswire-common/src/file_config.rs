use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_QUERY: &str = "maritime OR shipping OR tanker OR LNG";
pub const DEFAULT_MAX_RESULTS: u32 = 50;
pub const DEFAULT_X_API_BASE: &str = "https://api.twitter.com";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_STORE_PATH: &str = "data/documents.jsonl";

/// TOML-backed configuration loaded from disk.
/// Secrets (the bearer token) stay as env vars.
///
/// Every section is optional; an absent file yields the built-in defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileConfig {
    #[serde(default)]
    pub ingest: IngestSection,
    #[serde(default)]
    pub x: XSection,
    #[serde(default)]
    pub store: StoreSection,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IngestSection {
    /// Topic query, in the platform's search syntax.
    #[serde(default = "default_query")]
    pub query: String,
    /// Result-size budget per connector.
    #[serde(default = "default_max_results")]
    pub max_results: u32,
    /// Deadline for the whole ingest step. Unset means no deadline beyond
    /// the per-request timeout.
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Default for IngestSection {
    fn default() -> Self {
        Self {
            query: default_query(),
            max_results: default_max_results(),
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct XSection {
    #[serde(default = "default_x_api_base")]
    pub api_base: String,
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for XSection {
    fn default() -> Self {
        Self {
            api_base: default_x_api_base(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct StoreSection {
    #[serde(default = "default_store_path")]
    pub path: PathBuf,
}

impl Default for StoreSection {
    fn default() -> Self {
        Self {
            path: default_store_path(),
        }
    }
}

fn default_query() -> String {
    DEFAULT_QUERY.to_string()
}

fn default_max_results() -> u32 {
    DEFAULT_MAX_RESULTS
}

fn default_x_api_base() -> String {
    DEFAULT_X_API_BASE.to_string()
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT_SECS
}

fn default_store_path() -> PathBuf {
    PathBuf::from(DEFAULT_STORE_PATH)
}

/// Load and parse a TOML config file.
pub fn load_config(path: &Path) -> Result<FileConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    parse_config(&content)
        .with_context(|| format!("Failed to parse config file: {}", path.display()))
}

pub fn parse_config(content: &str) -> Result<FileConfig> {
    Ok(toml::from_str(content)?)
}

impl FileConfig {
    /// Load from `path` when given; otherwise fall back to the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let config = load_config(path)?;
                tracing::info!(path = %path.display(), "Loaded file config");
                Ok(config)
            }
            None => {
                tracing::info!("No config file given, using defaults");
                Ok(Self::default())
            }
        }
    }
}
