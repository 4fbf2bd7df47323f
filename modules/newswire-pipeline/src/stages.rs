// Trait seams for the post-ingest stages.
//
// Preprocessing, classification and ranking are owned by other teams; the
// pipeline only sees these traits. The impls below are the defaults the
// binary runs with until real stages are plugged in.

use std::cmp::Reverse;

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

use newswire_common::NormalizedDocument;

#[async_trait]
pub trait Preprocessor: Send + Sync {
    async fn preprocess(&self, docs: Vec<NormalizedDocument>) -> Result<Vec<NormalizedDocument>>;
}

#[async_trait]
pub trait Classifier: Send + Sync {
    async fn classify(&self, docs: Vec<NormalizedDocument>) -> Result<Vec<NormalizedDocument>>;
}

#[async_trait]
pub trait Ranker: Send + Sync {
    async fn rank(&self, docs: Vec<NormalizedDocument>) -> Result<Vec<NormalizedDocument>>;
}

// ---------------------------------------------------------------------------
// Defaults
// ---------------------------------------------------------------------------

/// Trims text and collapses whitespace runs. Documents left with no text
/// are dropped.
pub struct TextNormalizer;

#[async_trait]
impl Preprocessor for TextNormalizer {
    async fn preprocess(&self, docs: Vec<NormalizedDocument>) -> Result<Vec<NormalizedDocument>> {
        let before = docs.len();
        let kept: Vec<NormalizedDocument> = docs
            .into_iter()
            .filter_map(|doc| {
                let text = collapse_whitespace(doc.text());
                if text.is_empty() {
                    None
                } else {
                    Some(doc.with_text(text))
                }
            })
            .collect();

        if kept.len() < before {
            info!(dropped = before - kept.len(), "Dropped documents with empty text");
        }
        Ok(kept)
    }
}

fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub struct PassthroughClassifier;

#[async_trait]
impl Classifier for PassthroughClassifier {
    async fn classify(&self, docs: Vec<NormalizedDocument>) -> Result<Vec<NormalizedDocument>> {
        Ok(docs)
    }
}

/// Orders by summed engagement, highest first. Ties keep their input order.
pub struct EngagementRanker;

#[async_trait]
impl Ranker for EngagementRanker {
    async fn rank(&self, mut docs: Vec<NormalizedDocument>) -> Result<Vec<NormalizedDocument>> {
        docs.sort_by_key(|doc| Reverse(doc.engagement_total()));
        Ok(docs)
    }
}
