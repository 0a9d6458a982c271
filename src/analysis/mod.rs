pub mod experience;
pub mod pipeline;
pub mod resume_parser;
pub mod scoring;
pub mod similarity;
pub mod skill_matcher;

pub use experience::{ExperienceExtractor, YearsPatternExtractor};
pub use pipeline::{run_pipeline, ScanPipeline};
pub use resume_parser::ResumeParser;
pub use scoring::{ScoreBreakdown, ScoringEngine};
pub use skill_matcher::SkillMatcher;
