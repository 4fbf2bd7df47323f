use crate::error::{IngestError, IngestResult};

pub const TWITTER_BEARER_TOKEN: &str = "TWITTER_BEARER_TOKEN";

/// Secrets loaded from the environment. Everything non-secret (query,
/// budgets, endpoints, output paths) lives in the TOML FileConfig.
#[derive(Clone)]
pub struct AppConfig {
    pub twitter_bearer_token: String,
}

impl std::fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppConfig")
            .field("twitter_bearer_token", &preview(&self.twitter_bearer_token))
            .finish()
    }
}

impl AppConfig {
    /// Load from the process environment, after merging a `.env` file if present.
    pub fn from_env() -> IngestResult<Self> {
        dotenvy::dotenv().ok();
        let config = Self::from_lookup(|key| std::env::var(key).ok())?;
        config.log_keys();
        Ok(config)
    }

    /// Build from an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> IngestResult<Self> {
        let twitter_bearer_token = lookup(TWITTER_BEARER_TOKEN)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .ok_or_else(|| {
                IngestError::Configuration(format!("{TWITTER_BEARER_TOKEN} is not set"))
            })?;

        Ok(Self {
            twitter_bearer_token,
        })
    }

    fn log_keys(&self) {
        tracing::info!("Config loaded:");
        tracing::info!(
            "  {}: {}",
            TWITTER_BEARER_TOKEN,
            preview(&self.twitter_bearer_token)
        );
    }
}

fn preview(val: &str) -> String {
    let n = val.char_indices().nth(5).map(|(i, _)| i).unwrap_or(val.len());
    format!("{}...({} chars)", &val[..n], val.chars().count())
}
