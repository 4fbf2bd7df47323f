pub mod error;
pub mod types;

pub use error::{Result, XError};
pub use types::{
    format_timestamp, RecentSearchParams, SearchMeta, SearchResponse, Tweet, DEFAULT_TWEET_FIELDS,
    MAX_RESULTS_CEILING, MAX_RESULTS_FLOOR,
};

use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.twitter.com";

const RECENT_SEARCH_PATH: &str = "/2/tweets/search/recent";

const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Clone)]
pub struct XClient {
    client: reqwest::Client,
    token: String,
    api_base: String,
    request_timeout: Duration,
}

impl XClient {
    pub fn new(token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            token,
            api_base: DEFAULT_API_BASE.to_string(),
            request_timeout: DEFAULT_REQUEST_TIMEOUT,
        }
    }

    /// Point the client at another host (a proxy, or a local fake in tests).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    /// Full URL of the recent-search endpoint.
    pub fn search_endpoint(&self) -> String {
        format!("{}{}", self.api_base, RECENT_SEARCH_PATH)
    }

    /// Run one recent-search request. No pagination, no retry.
    pub async fn search_recent(&self, params: &RecentSearchParams) -> Result<SearchResponse> {
        if self.token.trim().is_empty() {
            return Err(XError::MissingToken);
        }

        let url = self.search_endpoint();
        tracing::debug!(
            url = %url,
            query = %params.query,
            max_results = params.max_results,
            "x: recent search request"
        );

        let resp = self
            .client
            .get(&url)
            .bearer_auth(&self.token)
            .query(&params.to_query_pairs())
            .timeout(self.request_timeout)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(XError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = resp.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        if let Some(meta) = &parsed.meta {
            tracing::debug!(
                result_count = ?meta.result_count,
                next_token = ?meta.next_token,
                "x: recent search response"
            );
        }
        if let Some(errors) = &parsed.errors {
            tracing::warn!(count = errors.len(), "x: search returned partial errors");
        }

        Ok(parsed)
    }
}
