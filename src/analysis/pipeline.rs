use once_cell::sync::Lazy;

use crate::analysis::resume_parser::ResumeParser;
use crate::analysis::scoring::ScoringEngine;
use crate::analysis::skill_matcher::SkillMatcher;
use crate::config::PipelineConfig;
use crate::error::Result;
use crate::extraction::extract_text;
use crate::models::{Document, ScanReport};
use crate::taxonomy::SkillVocabulary;

static DEFAULT_PIPELINE: Lazy<ScanPipeline> = Lazy::new(ScanPipeline::default);

/// Runs extraction, parsing, matching and scoring for one resume.
///
/// Holds no per-request state, so one instance can serve concurrent scans.
pub struct ScanPipeline {
    parser: ResumeParser,
    matcher: SkillMatcher,
    scoring_engine: ScoringEngine,
}

impl ScanPipeline {
    pub fn new(config: &PipelineConfig) -> Result<Self> {
        let vocabulary = match &config.vocabulary_path {
            Some(path) => SkillVocabulary::from_json_file(path)?,
            None => SkillVocabulary::global().clone(),
        };

        Ok(Self::from_parts(
            ResumeParser::with_vocabulary(vocabulary),
            SkillMatcher::with_threshold(config.match_threshold),
            ScoringEngine::new(),
        ))
    }

    pub fn from_parts(parser: ResumeParser, matcher: SkillMatcher, scoring_engine: ScoringEngine) -> Self {
        Self {
            parser,
            matcher,
            scoring_engine,
        }
    }

    pub fn run(&self, document: &Document, job_description: &str) -> Result<ScanReport> {
        // Step 1: Extract plain text
        tracing::info!("Scanning {} ({})", document.name, document.format);
        let text = extract_text(document)?;

        Ok(self.analyze_text(&text, job_description))
    }

    pub fn analyze_text(&self, text: &str, job_description: &str) -> ScanReport {
        // Step 2: Parse skills and experience
        let profile = self.parser.parse(text);

        // Step 3: Match skills against the job description
        let matches = self.matcher.match_skills(&profile.skills, job_description);

        // Step 4: Score
        let breakdown = self.scoring_engine.breakdown(&profile, &matches, job_description);
        tracing::debug!(
            "Score breakdown: skills {:.1}, experience {:.1}, weighted {:.1}, rescaled {}",
            breakdown.skill_score,
            breakdown.experience_score,
            breakdown.weighted_score,
            breakdown.rescaled
        );

        tracing::info!(
            "Scored {:.1} with {} of {} skills matched",
            breakdown.final_score,
            matches.len(),
            profile.skills.len()
        );

        ScanReport {
            score: breakdown.final_score,
            skills: profile.skills,
            experience_years: profile.experience_years,
            matches,
        }
    }

    pub fn parser(&self) -> &ResumeParser {
        &self.parser
    }

    pub fn matcher(&self) -> &SkillMatcher {
        &self.matcher
    }
}

impl Default for ScanPipeline {
    fn default() -> Self {
        Self::from_parts(ResumeParser::new(), SkillMatcher::new(), ScoringEngine::new())
    }
}

/// Scores a resume given as raw bytes, with the format taken from `filename`.
pub fn run_pipeline(bytes: &[u8], filename: &str, job_description: &str) -> Result<ScanReport> {
    let document = Document::new(filename, bytes.to_vec());
    DEFAULT_PIPELINE.run(&document, job_description)
}
