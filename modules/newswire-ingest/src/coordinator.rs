use std::sync::Arc;
use std::time::Duration;

use tracing::info;

use newswire_common::{
    AppConfig, FileConfig, IngestError, IngestResult, IngestSection, NormalizedDocument,
};

use crate::connector::Connector;
use crate::x::XConnector;

/// Drives connectors with a fixed topic query and result budget.
///
/// Connector failures are not caught: the first error ends the run and is
/// returned as-is. There is no retry at this layer.
pub struct IngestionCoordinator {
    query: String,
    max_results: u32,
    timeout: Option<Duration>,
    connectors: Vec<Arc<dyn Connector>>,
}

impl IngestionCoordinator {
    pub fn new(query: impl Into<String>, max_results: u32, connector: Arc<dyn Connector>) -> Self {
        Self {
            query: query.into(),
            max_results,
            timeout: None,
            connectors: vec![connector],
        }
    }

    /// Query, budget and deadline from the `[ingest]` section.
    pub fn from_section(section: &IngestSection, connector: Arc<dyn Connector>) -> Self {
        let coordinator = Self::new(section.query.clone(), section.max_results, connector);
        match section.timeout_secs {
            Some(secs) => coordinator.with_timeout(Duration::from_secs(secs)),
            None => coordinator,
        }
    }

    /// The production wiring: one X connector.
    pub fn for_x(app: &AppConfig, config: &FileConfig) -> Self {
        let connector = XConnector::from_config(app, &config.x);
        Self::from_section(&config.ingest, Arc::new(connector))
    }

    /// Add another connector. Connectors run in the order they were added.
    pub fn with_connector(mut self, connector: Arc<dyn Connector>) -> Self {
        self.connectors.push(connector);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn max_results(&self) -> u32 {
        self.max_results
    }

    /// Fetch from every connector and return the concatenated documents,
    /// each connector's output in the order it returned it.
    pub async fn ingest(&self) -> IngestResult<Vec<NormalizedDocument>> {
        match self.timeout {
            Some(after) => tokio::time::timeout(after, self.run_connectors())
                .await
                .map_err(|_| IngestError::Timeout { after })?,
            None => self.run_connectors().await,
        }
    }

    async fn run_connectors(&self) -> IngestResult<Vec<NormalizedDocument>> {
        let mut documents = Vec::new();
        for connector in &self.connectors {
            let batch = connector.fetch(&self.query, self.max_results).await?;
            info!(
                connector = connector.name(),
                platform = %connector.platform(),
                count = batch.len(),
                "Connector fetch complete"
            );
            documents.extend(batch);
        }
        Ok(documents)
    }
}
