//! Compatibility score aggregation

use crate::config::ScoringConfig;
use crate::pipeline::matcher::MatchResult;
use serde::{Deserialize, Serialize};

/// Qualitative score band. Each band is inclusive on its lower bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchLabel {
    NeedsImprovement,
    Fair,
    Good,
    Excellent,
}

impl MatchLabel {
    pub fn from_score(score: u8) -> Self {
        match score {
            0..=39 => MatchLabel::NeedsImprovement,
            40..=59 => MatchLabel::Fair,
            60..=79 => MatchLabel::Good,
            _ => MatchLabel::Excellent,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MatchLabel::NeedsImprovement => "Needs Improvement",
            MatchLabel::Fair => "Fair Match",
            MatchLabel::Good => "Good Match",
            MatchLabel::Excellent => "Excellent Match",
        }
    }
}

/// Combines exact-match coverage and soft-match evidence into a bounded
/// score. Soft matches only ever add on top of the exact-match floor, and
/// the total is capped at 100, so an untrusted soft-match count cannot
/// drag the score down or push it out of range.
pub struct ScoreAggregator {
    config: ScoringConfig,
}

impl ScoreAggregator {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Score a match result against a job set of the given size.
    /// An empty job set scores 0 rather than dividing by zero.
    pub fn score(&self, result: &MatchResult, job_set_size: usize) -> u8 {
        if job_set_size == 0 {
            return 0;
        }

        let ratio = result.exact_matches.len() as f64 / job_set_size as f64;
        let base = (ratio * 100.0).round() as u32;

        let headroom = 100u32.saturating_sub(base);
        let bonus = (self.config.soft_match_bonus * result.soft_matches.len() as u32).min(headroom);

        (base + bonus).min(100) as u8
    }

    pub fn label(&self, score: u8) -> MatchLabel {
        MatchLabel::from_score(score)
    }
}
