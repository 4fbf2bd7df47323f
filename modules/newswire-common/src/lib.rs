pub mod config;
pub mod error;
pub mod file_config;
pub mod types;

pub use config::AppConfig;
pub use error::{IngestError, IngestResult};
pub use file_config::{FileConfig, IngestSection, StoreSection, XSection};
pub use types::*;
