pub mod flow;
pub mod stages;
pub mod store;

pub use flow::{run_once, run_with, NewsPipeline, RunSummary, FLOW_NAME};
pub use stages::{
    Classifier, EngagementRanker, PassthroughClassifier, Preprocessor, Ranker, TextNormalizer,
};
pub use store::{DocumentStore, JsonLinesStore};
