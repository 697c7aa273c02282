//! Pipeline orchestration: extraction, matching, scoring, recommendations

use crate::config::ScoringConfig;
use crate::error::Result;
use crate::pipeline::keywords::KeywordSet;
use crate::pipeline::matcher::{MatchEngine, SoftMatch};
use crate::pipeline::normalizer;
use crate::pipeline::recommend::{Finding, RecommendationGenerator};
use crate::pipeline::scorer::{MatchLabel, ScoreAggregator};
use crate::service::SemanticService;
use chrono::{DateTime, Utc};
use log::info;
use serde::{Deserialize, Serialize};

/// Terminal artifact of one comparison run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Compatibility score, 0-100.
    pub score: u8,
    pub label: MatchLabel,
    pub findings: Vec<Finding>,
    /// Keywords found in both documents, resume order.
    pub exact_matches: Vec<String>,
    /// Highest-confidence soft matches, bounded by the configured cap.
    pub soft_matches: Vec<SoftMatch>,
    /// Job keywords the resume does not cover, job order.
    pub missing_keywords: Vec<String>,
    pub resume_keyword_count: usize,
    pub job_keyword_count: usize,
    pub generated_at: DateTime<Utc>,
}

/// Composition root for the keyword pipeline. Stateless across runs:
/// holds only the backend client and scoring policy, so concurrent runs
/// need no coordination.
pub struct MatchPipeline<S> {
    engine: MatchEngine<S>,
    scoring: ScoringConfig,
}

impl<S: SemanticService> MatchPipeline<S> {
    pub fn new(service: S, scoring: ScoringConfig) -> Self {
        Self {
            engine: MatchEngine::new(service),
            scoring,
        }
    }

    /// Extract the keyword set of one document. A backend transport
    /// failure here is fatal: without a response there is nothing to
    /// normalize. A malformed response is not; it degrades through the
    /// normalizer's fallback path.
    pub async fn extract_keywords(&self, text: &str) -> Result<KeywordSet> {
        let raw = self.engine.service().extract_keywords(text).await?;
        Ok(normalizer::normalize(&raw))
    }

    /// Run the full pipeline over two raw document texts.
    pub async fn run(&self, resume_text: &str, job_text: &str) -> Result<ScoreReport> {
        // The two extraction calls are independent; only the soft-match
        // call has to wait for both sets.
        let (resume_set, job_set) = tokio::join!(
            self.extract_keywords(resume_text),
            self.extract_keywords(job_text)
        );
        let resume_set = resume_set?;
        let job_set = job_set?;
        info!(
            "Extracted {} resume / {} job keywords",
            resume_set.len(),
            job_set.len()
        );

        let result = self.engine.compare(&resume_set, &job_set).await;
        let missing_keywords = result.missing_keywords(&job_set);

        let aggregator = ScoreAggregator::new(self.scoring.clone());
        let score = aggregator.score(&result, job_set.len());
        let label = aggregator.label(score);

        let findings = RecommendationGenerator::new(&self.scoring).recommend(
            result.exact_matches.len(),
            job_set.len(),
            &missing_keywords,
        );

        Ok(ScoreReport {
            score,
            label,
            findings,
            soft_matches: result.top_soft_matches(self.scoring.max_soft_matches),
            exact_matches: result.exact_matches,
            missing_keywords,
            resume_keyword_count: resume_set.len(),
            job_keyword_count: job_set.len(),
            generated_at: Utc::now(),
        })
    }
}
