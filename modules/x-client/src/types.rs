use chrono::{DateTime, SecondsFormat, Utc};
use serde::Deserialize;

/// Largest `max_results` the recent-search endpoint accepts per request.
pub const MAX_RESULTS_CEILING: u32 = 100;

/// Smallest `max_results` the recent-search endpoint accepts per request.
pub const MAX_RESULTS_FLOOR: u32 = 10;

/// Tweet fields requested on every search: enough to build a full document.
pub const DEFAULT_TWEET_FIELDS: &[&str] =
    &["id", "text", "author_id", "created_at", "public_metrics"];

// --- Request types ---

/// Query parameters for `GET /2/tweets/search/recent`.
///
/// Values are sent as given; range checks against the platform limits are
/// the caller's job.
#[derive(Debug, Clone)]
pub struct RecentSearchParams {
    pub query: String,
    pub max_results: u32,
    pub tweet_fields: Vec<String>,
    pub start_time: Option<DateTime<Utc>>,
    pub end_time: Option<DateTime<Utc>>,
}

impl RecentSearchParams {
    pub fn new(query: impl Into<String>, max_results: u32) -> Self {
        Self {
            query: query.into(),
            max_results,
            tweet_fields: DEFAULT_TWEET_FIELDS.iter().map(|f| f.to_string()).collect(),
            start_time: None,
            end_time: None,
        }
    }

    pub fn with_window(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_time = Some(start);
        self.end_time = Some(end);
        self
    }

    /// Render as URL query pairs in the order the API documents them.
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        let mut pairs = vec![
            ("query", self.query.clone()),
            ("max_results", self.max_results.to_string()),
        ];
        if !self.tweet_fields.is_empty() {
            pairs.push(("tweet.fields", self.tweet_fields.join(",")));
        }
        if let Some(start) = self.start_time {
            pairs.push(("start_time", format_timestamp(start)));
        }
        if let Some(end) = self.end_time {
            pairs.push(("end_time", format_timestamp(end)));
        }
        pairs
    }
}

/// RFC 3339, second precision, `Z` suffix (e.g. `2026-10-09T12:00:00Z`).
pub fn format_timestamp(ts: DateTime<Utc>) -> String {
    ts.to_rfc3339_opts(SecondsFormat::Secs, true)
}

// --- Response types ---

/// Body of a recent-search response. Every key is optional: a query with no
/// matches comes back without `data`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    pub data: Option<Vec<Tweet>>,
    pub meta: Option<SearchMeta>,
    /// Partial errors reported alongside a 200.
    pub errors: Option<Vec<serde_json::Value>>,
}

impl SearchResponse {
    /// Records in the order the API returned them. Missing `data` is empty.
    pub fn into_tweets(self) -> Vec<Tweet> {
        self.data.unwrap_or_default()
    }
}

/// Pagination metadata. Only logged; this client issues one request per search.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchMeta {
    pub result_count: Option<u32>,
    pub newest_id: Option<String>,
    pub oldest_id: Option<String>,
    pub next_token: Option<String>,
}

/// A single tweet as served by API v2. Fields are optional because the
/// payload only carries what `tweet.fields` asked for, and kept as raw JSON
/// so a wrongly typed field fails that record rather than the whole body.
#[derive(Debug, Clone, Deserialize)]
pub struct Tweet {
    pub id: Option<serde_json::Value>,
    pub text: Option<serde_json::Value>,
    pub author_id: Option<serde_json::Value>,
    pub created_at: Option<serde_json::Value>,
    /// `retweet_count`, `reply_count`, `like_count`, `quote_count`, ...
    /// The metric set varies by API version, so it stays an open map.
    pub public_metrics: Option<serde_json::Map<String, serde_json::Value>>,
}
