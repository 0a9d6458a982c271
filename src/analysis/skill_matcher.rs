use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::similarity::partial_ratio;
use crate::config::DEFAULT_MATCH_THRESHOLD;
use crate::models::SkillMatch;

static WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\w+").expect("word pattern is valid"));

pub struct SkillMatcher {
    threshold: f64,
}

impl SkillMatcher {
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_MATCH_THRESHOLD)
    }

    pub fn with_threshold(threshold: f64) -> Self {
        Self { threshold }
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Distinct lowercased word tokens of a job description, in sorted order.
    pub fn tokenize(job_description: &str) -> BTreeSet<String> {
        let lower = job_description.to_lowercase();
        WORD.find_iter(&lower).map(|m| m.as_str().to_string()).collect()
    }

    /// Pairs each skill with its most similar job description token.
    ///
    /// Skills whose best similarity does not exceed the threshold are left
    /// out. On equal scores the first token in sorted order wins.
    pub fn match_skills(&self, skills: &[String], job_description: &str) -> Vec<SkillMatch> {
        if job_description.is_empty() {
            return Vec::new();
        }

        let tokens = Self::tokenize(job_description);
        let mut matches = Vec::new();

        for skill in skills {
            let needle = skill.to_lowercase();
            let mut best_score = 0.0;
            let mut best_token: Option<&String> = None;

            for token in &tokens {
                let score = partial_ratio(&needle, token);
                if score > best_score {
                    best_score = score;
                    best_token = Some(token);
                }
            }

            match best_token {
                Some(token) if best_score > self.threshold => {
                    tracing::debug!("Matched skill {} to '{}' ({:.1})", skill, token, best_score);
                    matches.push(SkillMatch {
                        skill: skill.clone(),
                        matched_token: token.clone(),
                        similarity: best_score,
                    });
                }
                _ => {
                    tracing::debug!("No job description match for skill {} (best {:.1})", skill, best_score);
                }
            }
        }

        matches
    }
}

impl Default for SkillMatcher {
    fn default() -> Self {
        Self::new()
    }
}
