use serde::{Deserialize, Serialize};

/// A resume skill paired with its closest job description token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillMatch {
    pub skill: String,
    pub matched_token: String,
    pub similarity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScanReport {
    pub score: f64,
    pub skills: Vec<String>,
    pub experience_years: u32,
    pub matches: Vec<SkillMatch>,
}

impl ScanReport {
    pub fn average_similarity(&self) -> Option<f64> {
        if self.matches.is_empty() {
            return None;
        }
        Some(self.matches.iter().map(|m| m.similarity).sum::<f64>() / self.matches.len() as f64)
    }
}
