pub mod config;
pub mod error;
pub mod models;
pub mod taxonomy;
pub mod extraction;
pub mod analysis;
pub mod server;

pub use config::{Config, PipelineConfig};
pub use error::{Error, Result};
pub use analysis::{run_pipeline, ScanPipeline};
pub use models::{Document, ScanReport, SkillMatch};
pub use taxonomy::SkillVocabulary;
