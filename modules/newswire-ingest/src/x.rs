// X (Twitter) connector: recent search via API v2.
// Wraps XClient, returns normalized documents.

use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, info};
use x_client::{RecentSearchParams, Tweet, XClient, XError, MAX_RESULTS_CEILING, MAX_RESULTS_FLOOR};

use newswire_common::{
    AppConfig, Engagement, IngestError, IngestResult, NormalizedDocument, Platform, XSection,
};

use crate::connector::Connector;
use crate::window::RecencyWindow;

const PLATFORM: Platform = Platform::X;

#[derive(Clone)]
pub struct XConnector {
    client: XClient,
}

impl XConnector {
    pub fn new(client: XClient) -> Self {
        Self { client }
    }

    /// Build from the loaded config. The credential is captured here, once.
    pub fn from_config(app: &AppConfig, x: &XSection) -> Self {
        let client = XClient::new(app.twitter_bearer_token.clone())
            .with_api_base(x.api_base.clone())
            .with_request_timeout(Duration::from_secs(x.request_timeout_secs));
        Self::new(client)
    }

    fn map_error(&self, err: XError) -> IngestError {
        match err {
            XError::MissingToken => {
                IngestError::Configuration("X bearer token is not configured".to_string())
            }
            XError::Api { status, message } => IngestError::Fetch {
                platform: PLATFORM,
                endpoint: self.client.search_endpoint(),
                status,
                message,
            },
            XError::Network(err) => IngestError::Transport {
                platform: PLATFORM,
                message: err.to_string(),
            },
            XError::Parse(err) => IngestError::Decode {
                platform: PLATFORM,
                message: err.to_string(),
            },
        }
    }
}

/// Count sent upstream for a caller's `max_results`: clamped into the range
/// the endpoint accepts.
pub fn requested_count(max_results: u32) -> u32 {
    max_results.clamp(MAX_RESULTS_FLOOR, MAX_RESULTS_CEILING)
}

#[async_trait]
impl Connector for XConnector {
    async fn fetch(&self, query: &str, max_results: u32) -> IngestResult<Vec<NormalizedDocument>> {
        if query.trim().is_empty() {
            return Err(IngestError::InvalidQuery);
        }
        if max_results == 0 {
            return Ok(Vec::new());
        }

        let window = RecencyWindow::ending_at(Utc::now());
        let params = RecentSearchParams::new(query, requested_count(max_results))
            .with_window(window.start, window.end);

        info!(
            query,
            max_results,
            requested = params.max_results,
            "x: searching recent posts"
        );

        let resp = self
            .client
            .search_recent(&params)
            .await
            .map_err(|e| self.map_error(e))?;

        let mut documents = normalize_tweets(resp.into_tweets())?;
        documents.truncate(max_results.min(MAX_RESULTS_CEILING) as usize);

        info!(count = documents.len(), "x: fetched posts");
        Ok(documents)
    }

    fn platform(&self) -> Platform {
        PLATFORM
    }

    fn name(&self) -> &str {
        "x-recent-search"
    }
}

/// Normalize a whole response. The batch is atomic: the first malformed
/// record fails the call and nothing is returned.
pub fn normalize_tweets(tweets: Vec<Tweet>) -> IngestResult<Vec<NormalizedDocument>> {
    let mut seen = HashSet::with_capacity(tweets.len());
    let mut documents = Vec::with_capacity(tweets.len());

    for (index, tweet) in tweets.into_iter().enumerate() {
        let doc = normalize_tweet(index, tweet)?;
        if !seen.insert(doc.id().to_string()) {
            return Err(IngestError::MalformedRecord {
                platform: PLATFORM,
                index,
                field: "id",
                reason: format!("duplicates an earlier record ({})", doc.id()),
            });
        }
        documents.push(doc);
    }

    Ok(documents)
}

fn normalize_tweet(index: usize, tweet: Tweet) -> IngestResult<NormalizedDocument> {
    let id = required_str(index, "id", tweet.id)?;
    let text = required_str(index, "text", tweet.text)?;
    let author = required_str(index, "author_id", tweet.author_id)?;
    let timestamp = required_str(index, "created_at", tweet.created_at)?;
    let engagement = tweet
        .public_metrics
        .map(|metrics| engagement_from_metrics(&id, metrics))
        .unwrap_or_default();

    Ok(NormalizedDocument::new(PLATFORM, id, text, author, timestamp, engagement))
}

/// A field every document needs. `null` counts as missing.
fn required_str(
    index: usize,
    field: &'static str,
    value: Option<serde_json::Value>,
) -> IngestResult<String> {
    match value {
        Some(serde_json::Value::String(s)) => Ok(s),
        None | Some(serde_json::Value::Null) => {
            Err(IngestError::missing_field(PLATFORM, index, field))
        }
        Some(other) => Err(IngestError::MalformedRecord {
            platform: PLATFORM,
            index,
            field,
            reason: format!("is not a string ({other})"),
        }),
    }
}

fn engagement_from_metrics(
    id: &str,
    metrics: serde_json::Map<String, serde_json::Value>,
) -> Engagement {
    metrics
        .into_iter()
        .filter_map(|(name, value)| match value.as_i64() {
            Some(count) => Some((name, count)),
            None => {
                debug!(id, metric = %name, %value, "x: dropping non-integer metric");
                None
            }
        })
        .collect()
}
