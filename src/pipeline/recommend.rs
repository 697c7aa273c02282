//! Rule-based recommendations derived from match statistics

use crate::config::ScoringConfig;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Critical,
    Warning,
    Success,
    Info,
}

/// One human-readable recommendation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub severity: Severity,
    pub title: String,
    pub detail: String,
}

/// Turns match statistics into a prioritized finding list. The rules run
/// in a fixed order and all that apply are emitted, except the final
/// strong-match / optimization pair, which is a single either-or slot.
pub struct RecommendationGenerator {
    low_match_threshold: f64,
    strong_match_threshold: f64,
}

impl RecommendationGenerator {
    pub fn new(config: &ScoringConfig) -> Self {
        Self {
            low_match_threshold: config.low_match_threshold,
            strong_match_threshold: config.strong_match_threshold,
        }
    }

    pub fn recommend(
        &self,
        exact_match_count: usize,
        job_set_size: usize,
        missing_keywords: &[String],
    ) -> Vec<Finding> {
        // An empty job set gives no coverage signal; rules 1 and 3 read
        // the ratio as 0 and neither the critical nor the success branch
        // can fire.
        let coverage = if job_set_size == 0 {
            0.0
        } else {
            exact_match_count as f64 / job_set_size as f64
        };

        let mut findings = Vec::new();

        if job_set_size > 0 && coverage < self.low_match_threshold {
            findings.push(Finding {
                severity: Severity::Critical,
                title: "Low Keyword Match".to_string(),
                detail: "Consider adding more relevant keywords from the job description to your resume.".to_string(),
            });
        }

        if !missing_keywords.is_empty() {
            findings.push(Finding {
                severity: Severity::Warning,
                title: "Missing Key Skills".to_string(),
                detail: format!(
                    "{} important keywords are missing from your resume.",
                    missing_keywords.len()
                ),
            });
        }

        if job_set_size > 0 && coverage > self.strong_match_threshold {
            findings.push(Finding {
                severity: Severity::Success,
                title: "Strong Match".to_string(),
                detail: "Your resume shows excellent alignment with the job requirements.".to_string(),
            });
        } else {
            findings.push(Finding {
                severity: Severity::Info,
                title: "Optimization Opportunity".to_string(),
                detail: "Incorporate more industry-specific terms and technical skills.".to_string(),
            });
        }

        findings
    }
}
