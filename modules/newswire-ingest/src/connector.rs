use async_trait::async_trait;

use newswire_common::{IngestResult, NormalizedDocument, Platform};

/// Fetches posts from one source platform and normalizes them.
///
/// Implementations hold only immutable configuration, so one instance can be
/// shared across tasks. A zero-match search is `Ok(vec![])`, never an error.
#[async_trait]
pub trait Connector: Send + Sync {
    /// Search for posts matching `query` (platform syntax, passed through
    /// verbatim). `max_results` is an upper bound; values above the
    /// platform's per-request ceiling are clamped, not rejected.
    async fn fetch(&self, query: &str, max_results: u32) -> IngestResult<Vec<NormalizedDocument>>;

    /// Platform stamped on every document this connector produces.
    fn platform(&self) -> Platform;

    /// Connector name (for logging/debugging).
    fn name(&self) -> &str {
        "unknown"
    }
}
