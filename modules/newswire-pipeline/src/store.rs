use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tokio::io::AsyncWriteExt;

use newswire_common::NormalizedDocument;

/// Final pipeline stage. Returns how many documents were persisted.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn store(&self, docs: Vec<NormalizedDocument>) -> Result<usize>;
}

/// Appends one JSON object per document to a file, creating it (and its
/// parent directory) on first write.
pub struct JsonLinesStore {
    path: PathBuf,
}

impl JsonLinesStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl DocumentStore for JsonLinesStore {
    async fn store(&self, docs: Vec<NormalizedDocument>) -> Result<usize> {
        if docs.is_empty() {
            return Ok(0);
        }

        let mut buf = String::new();
        for doc in &docs {
            buf.push_str(&serde_json::to_string(doc)?);
            buf.push('\n');
        }

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await
            .with_context(|| format!("Failed to open {}", self.path.display()))?;
        file.write_all(buf.as_bytes())
            .await
            .with_context(|| format!("Failed to write {}", self.path.display()))?;
        file.flush().await?;

        tracing::info!(path = %self.path.display(), count = docs.len(), "Stored documents");
        Ok(docs.len())
    }
}
