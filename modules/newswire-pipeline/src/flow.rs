use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::{info, info_span, Instrument};
use typed_builder::TypedBuilder;

use newswire_common::{AppConfig, FileConfig};
use newswire_ingest::IngestionCoordinator;

use crate::stages::{
    Classifier, EngagementRanker, PassthroughClassifier, Preprocessor, Ranker, TextNormalizer,
};
use crate::store::{DocumentStore, JsonLinesStore};

pub const FLOW_NAME: &str = "Maritime News Pipeline";

/// Counts from one pipeline run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ingested: usize,
    pub stored: usize,
}

/// ingest → preprocess → classify → rank → store, once per `run()`.
///
/// Documents move by value from step to step. The first failing step aborts
/// the run; nothing is retried here.
#[derive(TypedBuilder)]
pub struct NewsPipeline {
    coordinator: IngestionCoordinator,
    #[builder(default = default_preprocessor())]
    preprocessor: Arc<dyn Preprocessor>,
    #[builder(default = default_classifier())]
    classifier: Arc<dyn Classifier>,
    #[builder(default = default_ranker())]
    ranker: Arc<dyn Ranker>,
    store: Arc<dyn DocumentStore>,
}

fn default_preprocessor() -> Arc<dyn Preprocessor> {
    Arc::new(TextNormalizer)
}

fn default_classifier() -> Arc<dyn Classifier> {
    Arc::new(PassthroughClassifier)
}

fn default_ranker() -> Arc<dyn Ranker> {
    Arc::new(EngagementRanker)
}

impl NewsPipeline {
    pub async fn run(&self) -> Result<RunSummary> {
        async {
            info!(
                query = self.coordinator.query(),
                max_results = self.coordinator.max_results(),
                "Pipeline run starting"
            );

            let docs = self
                .coordinator
                .ingest()
                .instrument(info_span!("ingest"))
                .await
                .context("ingest step failed")?;
            let ingested = docs.len();
            info!(ingested, "Ingest complete");

            let docs = self
                .preprocessor
                .preprocess(docs)
                .instrument(info_span!("preprocess"))
                .await
                .context("preprocess step failed")?;

            let docs = self
                .classifier
                .classify(docs)
                .instrument(info_span!("classify"))
                .await
                .context("classify step failed")?;

            let docs = self
                .ranker
                .rank(docs)
                .instrument(info_span!("rank"))
                .await
                .context("rank step failed")?;

            let stored = self
                .store
                .store(docs)
                .instrument(info_span!("store"))
                .await
                .context("store step failed")?;

            info!(ingested, stored, "Pipeline run complete");
            Ok::<_, anyhow::Error>(RunSummary { ingested, stored })
        }
        .instrument(info_span!("flow", flow = FLOW_NAME))
        .await
    }
}

/// Production wiring: env secrets + optional TOML file → one run.
pub async fn run_once(config_path: Option<&Path>) -> Result<RunSummary> {
    let app = AppConfig::from_env()?;
    let file_config = FileConfig::load_or_default(config_path)?;
    run_with(&app, &file_config).await
}

/// One run with already-loaded configuration: the X connector and the
/// JSON Lines store, default stages in between.
pub async fn run_with(app: &AppConfig, file_config: &FileConfig) -> Result<RunSummary> {
    let pipeline = NewsPipeline::builder()
        .coordinator(IngestionCoordinator::for_x(app, file_config))
        .store(Arc::new(JsonLinesStore::new(file_config.store.path.clone())))
        .build();

    pipeline.run().await
}
