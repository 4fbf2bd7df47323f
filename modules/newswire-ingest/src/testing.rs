// Test mocks for the ingestion layer.
//
// MockConnector (Connector): scripted responses, records every call.
// Plus helpers for constructing NormalizedDocument fixtures.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::time::Duration;

use async_trait::async_trait;

use newswire_common::{Engagement, IngestError, IngestResult, NormalizedDocument, Platform};

use crate::connector::Connector;

// ---------------------------------------------------------------------------
// MockConnector
// ---------------------------------------------------------------------------

/// Returns scripted results in order, then empty batches once the script runs
/// out. Builder pattern: `.returning()`, `.failing()`, `.delayed()`.
pub struct MockConnector {
    name: String,
    platform: Platform,
    script: Mutex<VecDeque<IngestResult<Vec<NormalizedDocument>>>>,
    delay: Option<Duration>,
    calls: Mutex<Vec<(String, u32)>>,
}

impl MockConnector {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            platform: Platform::X,
            script: Mutex::new(VecDeque::new()),
            delay: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn returning(self, docs: Vec<NormalizedDocument>) -> Self {
        self.script.lock().unwrap().push_back(Ok(docs));
        self
    }

    pub fn failing(self, err: IngestError) -> Self {
        self.script.lock().unwrap().push_back(Err(err));
        self
    }

    /// Sleep before answering each call.
    pub fn delayed(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    /// Every `(query, max_results)` this connector was called with.
    pub fn calls(&self) -> Vec<(String, u32)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl Connector for MockConnector {
    async fn fetch(&self, query: &str, max_results: u32) -> IngestResult<Vec<NormalizedDocument>> {
        self.calls
            .lock()
            .unwrap()
            .push((query.to_string(), max_results));
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        self.script
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    fn platform(&self) -> Platform {
        self.platform
    }

    fn name(&self) -> &str {
        &self.name
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Minimal X document with the given id and text.
pub fn doc(id: &str, text: &str) -> NormalizedDocument {
    NormalizedDocument::new(
        Platform::X,
        id,
        text,
        "2244994945",
        "2026-10-15T08:00:00.000Z",
        Engagement::new(),
    )
}

/// X document carrying the given engagement metrics.
pub fn doc_with_engagement(id: &str, metrics: &[(&str, i64)]) -> NormalizedDocument {
    let engagement = metrics
        .iter()
        .map(|(name, count)| (name.to_string(), *count))
        .collect();
    NormalizedDocument::new(
        Platform::X,
        id,
        format!("post {id}"),
        "2244994945",
        "2026-10-15T08:00:00.000Z",
        engagement,
    )
}
