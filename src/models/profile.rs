use serde::{Deserialize, Serialize};

/// Structured facts parsed out of a resume's text.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeProfile {
    /// Vocabulary skill names found in the text, in vocabulary order.
    pub skills: Vec<String>,
    pub experience_years: u32,
}

impl ResumeProfile {
    pub fn has_skills(&self) -> bool {
        !self.skills.is_empty()
    }
}
