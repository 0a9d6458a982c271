use crate::analysis::experience::{ExperienceExtractor, YearsPatternExtractor};
use crate::models::ResumeProfile;
use crate::taxonomy::SkillVocabulary;

pub struct ResumeParser {
    vocabulary: SkillVocabulary,
    experience: Box<dyn ExperienceExtractor>,
}

impl ResumeParser {
    pub fn new() -> Self {
        Self::with_vocabulary(SkillVocabulary::global().clone())
    }

    pub fn with_vocabulary(vocabulary: SkillVocabulary) -> Self {
        Self {
            vocabulary,
            experience: Box::new(YearsPatternExtractor),
        }
    }

    pub fn with_experience_extractor(mut self, extractor: impl ExperienceExtractor + 'static) -> Self {
        self.experience = Box::new(extractor);
        self
    }

    /// Never fails: text without any recognisable facts parses to an empty profile.
    pub fn parse(&self, text: &str) -> ResumeProfile {
        let skills = self.vocabulary.detect(text);
        let experience_years = self.experience.experience_years(text);

        tracing::debug!(
            "Parsed {} skills and {} years of experience ({})",
            skills.len(),
            experience_years,
            self.experience.name()
        );

        ResumeProfile {
            skills,
            experience_years,
        }
    }

    pub fn vocabulary(&self) -> &SkillVocabulary {
        &self.vocabulary
    }
}

impl Default for ResumeParser {
    fn default() -> Self {
        Self::new()
    }
}
