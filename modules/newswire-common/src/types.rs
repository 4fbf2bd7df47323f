use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// --- Platforms ---

/// Source platform of a document. One fixed value per connector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    #[serde(rename = "X")]
    X,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::X => "X",
        }
    }
}

impl std::fmt::Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// --- Normalized documents ---

/// Metric name → count (`like_count`, `reply_count`, ...). Open-ended because
/// the metric set depends on the platform and its API version.
pub type Engagement = BTreeMap<String, i64>;

/// A platform-agnostic post, the unit handed between pipeline stages.
///
/// Built once per raw platform record and never mutated afterwards: fields are
/// read through accessors, and stages that rewrite a document consume it and
/// return a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedDocument {
    id: String,
    text: String,
    author: String,
    platform: Platform,
    /// ISO-8601, exactly as the platform served it.
    timestamp: String,
    #[serde(default)]
    engagement: Engagement,
}

impl NormalizedDocument {
    pub fn new(
        platform: Platform,
        id: impl Into<String>,
        text: impl Into<String>,
        author: impl Into<String>,
        timestamp: impl Into<String>,
        engagement: Engagement,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            author: author.into(),
            platform,
            timestamp: timestamp.into(),
            engagement,
        }
    }

    /// Platform-scoped identifier. Opaque; never parse it as a number.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Platform-scoped account identifier, not a display name.
    pub fn author(&self) -> &str {
        &self.author
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    pub fn engagement(&self) -> &Engagement {
        &self.engagement
    }

    /// Sum of every engagement metric; 0 when the platform reported none.
    pub fn engagement_total(&self) -> i64 {
        self.engagement
            .values()
            .fold(0i64, |total, count| total.saturating_add(*count))
    }

    /// Same document with different text.
    pub fn with_text(self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(engagement: Engagement) -> NormalizedDocument {
        NormalizedDocument::new(
            Platform::X,
            "1846",
            "LNG carrier diverted",
            "77",
            "2026-10-15T08:00:00.000Z",
            engagement,
        )
    }

    #[test]
    fn platform_serializes_as_x() {
        assert_eq!(serde_json::to_string(&Platform::X).unwrap(), "\"X\"");
        assert_eq!(Platform::X.to_string(), "X");
    }

    #[test]
    fn empty_engagement_is_serialized_not_omitted() {
        let json = serde_json::to_value(doc(Engagement::new())).unwrap();
        assert_eq!(json["engagement"], serde_json::json!({}));
        assert_eq!(json["platform"], "X");
    }

    #[test]
    fn engagement_defaults_to_empty_when_deserializing() {
        let parsed: NormalizedDocument = serde_json::from_str(
            r#"{"id":"1","text":"t","author":"a","platform":"X","timestamp":"2026-10-15T08:00:00Z"}"#,
        )
        .unwrap();
        assert!(parsed.engagement().is_empty());
    }

    #[test]
    fn engagement_total_sums_metrics() {
        let mut metrics = Engagement::new();
        metrics.insert("like_count".into(), 12);
        metrics.insert("retweet_count".into(), 3);
        assert_eq!(doc(metrics).engagement_total(), 15);
        assert_eq!(doc(Engagement::new()).engagement_total(), 0);
    }

    #[test]
    fn engagement_total_saturates_instead_of_overflowing() {
        let mut metrics = Engagement::new();
        metrics.insert("like_count".into(), i64::MAX);
        metrics.insert("retweet_count".into(), 1);
        assert_eq!(doc(metrics).engagement_total(), i64::MAX);
    }

    #[test]
    fn with_text_keeps_identity() {
        let rewritten = doc(Engagement::new()).with_text("lng carrier diverted");
        assert_eq!(rewritten.id(), "1846");
        assert_eq!(rewritten.author(), "77");
        assert_eq!(rewritten.text(), "lng carrier diverted");
    }
}
