//! Typed errors for connector and ingestion operations.

use std::time::Duration;

use thiserror::Error;

use crate::types::Platform;

/// Errors surfaced by connectors and the ingestion coordinator.
///
/// None of these are recovered inside the ingestion layer; they reach the
/// caller unchanged.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Required credential missing or empty
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Search expression was empty
    #[error("query must not be empty")]
    InvalidQuery,

    /// Platform answered with a non-success status
    #[error("{platform} fetch from {endpoint} failed with status {status}: {message}")]
    Fetch {
        platform: Platform,
        endpoint: String,
        status: u16,
        message: String,
    },

    /// Request never produced a status (connect failure, per-request timeout)
    #[error("{platform} transport error: {message}")]
    Transport { platform: Platform, message: String },

    /// Response body was not the expected JSON shape
    #[error("{platform} response could not be decoded: {message}")]
    Decode { platform: Platform, message: String },

    /// A raw record could not be normalized; the whole batch is rejected
    #[error("{platform} record {index} is malformed: {field} {reason}")]
    MalformedRecord {
        platform: Platform,
        index: usize,
        field: &'static str,
        reason: String,
    },

    /// Whole-ingest deadline exceeded
    #[error("ingest timed out after {after:?}")]
    Timeout { after: Duration },
}

impl IngestError {
    pub fn missing_field(platform: Platform, index: usize, field: &'static str) -> Self {
        IngestError::MalformedRecord {
            platform,
            index,
            field,
            reason: "is missing".to_string(),
        }
    }

    /// HTTP status for `Fetch` errors.
    pub fn status(&self) -> Option<u16> {
        match self {
            IngestError::Fetch { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Result type alias for ingestion operations.
pub type IngestResult<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fetch_error_names_platform_endpoint_and_status() {
        let err = IngestError::Fetch {
            platform: Platform::X,
            endpoint: "https://api.twitter.com/2/tweets/search/recent".into(),
            status: 429,
            message: "Too Many Requests".into(),
        };
        let msg = err.to_string();
        assert!(msg.starts_with("X fetch from https://api.twitter.com/2/tweets/search/recent"));
        assert!(msg.contains("429"));
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn missing_field_message() {
        let err = IngestError::missing_field(Platform::X, 3, "author_id");
        assert_eq!(err.to_string(), "X record 3 is malformed: author_id is missing");
        assert_eq!(err.status(), None);
    }
}
