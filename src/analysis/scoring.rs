use serde::{Deserialize, Serialize};

use crate::models::{ResumeProfile, SkillMatch};

pub struct ScoringEngine {
    weights: ScoringWeights,
    policy: ScorePolicy,
}

#[derive(Debug, Clone)]
pub struct ScoringWeights {
    pub skill_weight: f64,
    pub experience_weight: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill_weight: 0.7,
            experience_weight: 0.3,
        }
    }
}

/// Fixed points of the scoring curve.
#[derive(Debug, Clone)]
pub struct ScorePolicy {
    /// Returned when there is no job description to compare against.
    pub neutral_score: f64,
    /// Experience points per year, capped at 100.
    pub points_per_year: u32,
    /// Lowest score a resume with at least one skill match can receive.
    ///
    /// NOTE: this floor inflates weak matches into the top band. It is kept
    /// as the product currently behaves, pending a product decision.
    pub match_floor: f64,
}

impl Default for ScorePolicy {
    fn default() -> Self {
        Self {
            neutral_score: 90.0,
            points_per_year: 10,
            match_floor: 85.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub skill_score: f64,
    pub experience_score: f64,
    pub weighted_score: f64,
    pub rescaled: bool,
    pub final_score: f64,
}

impl ScoringEngine {
    pub fn new() -> Self {
        Self {
            weights: ScoringWeights::default(),
            policy: ScorePolicy::default(),
        }
    }

    pub fn with_weights(weights: ScoringWeights, policy: ScorePolicy) -> Self {
        Self { weights, policy }
    }

    pub fn score(&self, profile: &ResumeProfile, matches: &[SkillMatch], job_description: &str) -> f64 {
        self.breakdown(profile, matches, job_description).final_score
    }

    pub fn breakdown(
        &self,
        profile: &ResumeProfile,
        matches: &[SkillMatch],
        job_description: &str,
    ) -> ScoreBreakdown {
        if job_description.is_empty() {
            return ScoreBreakdown {
                skill_score: 0.0,
                experience_score: 0.0,
                weighted_score: self.policy.neutral_score,
                rescaled: false,
                final_score: self.policy.neutral_score,
            };
        }

        let skill_score = if matches.is_empty() {
            0.0
        } else {
            matches.iter().map(|m| m.similarity).sum::<f64>() / matches.len() as f64
        };

        let experience_score = profile
            .experience_years
            .saturating_mul(self.policy.points_per_year)
            .min(100) as f64;

        let weighted_score =
            self.weights.skill_weight * skill_score + self.weights.experience_weight * experience_score;

        // Any qualifying match lifts the score into the band above the floor.
        let rescaled = !matches.is_empty() && weighted_score < self.policy.match_floor;
        let final_score = if rescaled {
            let band = 100.0 - self.policy.match_floor;
            self.policy.match_floor + (weighted_score / 100.0) * band
        } else {
            weighted_score
        };

        ScoreBreakdown {
            skill_score,
            experience_score,
            weighted_score,
            rescaled,
            final_score,
        }
    }
}

impl Default for ScoringEngine {
    fn default() -> Self {
        Self::new()
    }
}
