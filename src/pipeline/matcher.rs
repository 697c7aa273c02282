//! Exact and soft keyword matching between a resume and a job description

use crate::pipeline::keywords::KeywordSet;
use crate::service::SemanticService;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

/// A semantically related keyword pair reported by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SoftMatch {
    /// Keyword from the resume set.
    pub resume_keyword: String,
    /// Keyword from the job set.
    pub job_keyword: String,
    /// Backend confidence, clamped to [0, 1].
    pub confidence: f64,
}

/// Wire shape of one soft-match entry. The backend is prompted for these
/// field names but gets the benefit of the doubt on confidence.
#[derive(Debug, Deserialize)]
struct RawSoftMatch {
    resume_keyword: String,
    job_keyword: String,
    #[serde(default)]
    confidence: Option<f64>,
}

/// Result of comparing one resume set against one job set. Keyword strings
/// are stored by value; the input sets are not referenced afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Keywords present in both sets, in resume order.
    pub exact_matches: Vec<String>,
    /// All validated soft matches, in backend response order.
    pub soft_matches: Vec<SoftMatch>,
}

impl MatchResult {
    /// The `n` highest-confidence soft matches, descending, ties broken by
    /// response order. Used where presentation wants a bounded list; the
    /// full set stays in `soft_matches`.
    pub fn top_soft_matches(&self, n: usize) -> Vec<SoftMatch> {
        let mut ranked = self.soft_matches.clone();
        ranked.sort_by(|a, b| {
            b.confidence
                .partial_cmp(&a.confidence)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        ranked.truncate(n);
        ranked
    }

    /// Job keywords not covered by an exact match, in job order.
    pub fn missing_keywords(&self, job: &KeywordSet) -> Vec<String> {
        job.iter()
            .filter(|keyword| !self.exact_matches.iter().any(|m| m == keyword))
            .map(str::to_string)
            .collect()
    }
}

/// Compares keyword sets: exact matching locally, soft matching through
/// the semantic backend.
pub struct MatchEngine<S> {
    service: S,
}

impl<S: SemanticService> MatchEngine<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    /// Compare two keyword sets. Never fails: a soft-match backend outage
    /// degrades to an empty soft-match list, with exact matches intact.
    pub async fn compare(&self, resume: &KeywordSet, job: &KeywordSet) -> MatchResult {
        let exact_matches = exact_matches(resume, job);

        if resume.is_empty() || job.is_empty() {
            return MatchResult {
                exact_matches,
                soft_matches: Vec::new(),
            };
        }

        let soft_matches = match self.service.find_soft_matches(resume, job).await {
            Ok(raw) => parse_soft_matches(&raw, resume, job),
            Err(err) => {
                warn!("Soft-match call failed, continuing without soft matches: {}", err);
                Vec::new()
            }
        };
        debug!(
            "Matched {} exact / {} soft keywords",
            exact_matches.len(),
            soft_matches.len()
        );

        MatchResult {
            exact_matches,
            soft_matches,
        }
    }
}

/// The subsequence of `resume` whose elements also occur in `job`, under
/// case-sensitive equality. Either side being empty yields an empty list.
pub fn exact_matches(resume: &KeywordSet, job: &KeywordSet) -> Vec<String> {
    resume
        .iter()
        .filter(|keyword| job.contains(keyword))
        .map(str::to_string)
        .collect()
}

/// Parse the backend's soft-match response defensively.
///
/// Entries referencing keywords outside the input sets are dropped (the
/// backend sometimes hallucinates or paraphrases), missing confidences
/// default to 0, and out-of-range confidences are clamped. A response
/// that is not the expected array parses to an empty list rather than an
/// error.
pub fn parse_soft_matches(raw: &str, resume: &KeywordSet, job: &KeywordSet) -> Vec<SoftMatch> {
    let candidate = crate::pipeline::normalizer::strip_code_fences(raw);
    let entries: Vec<RawSoftMatch> = match serde_json::from_str(candidate) {
        Ok(entries) => entries,
        Err(err) => {
            warn!("Unparseable soft-match response, treating as empty: {}", err);
            return Vec::new();
        }
    };

    entries
        .into_iter()
        .filter(|entry| {
            resume.contains(&entry.resume_keyword) && job.contains(&entry.job_keyword)
        })
        .map(|entry| SoftMatch {
            resume_keyword: entry.resume_keyword,
            job_keyword: entry.job_keyword,
            confidence: entry.confidence.unwrap_or(0.0).clamp(0.0, 1.0),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{AtsMatchError, Result};

    struct StubService {
        soft_response: Result<String>,
    }

    impl StubService {
        fn ok(raw: &str) -> Self {
            Self {
                soft_response: Ok(raw.to_string()),
            }
        }

        fn down() -> Self {
            Self {
                soft_response: Err(AtsMatchError::ServiceUnavailable(
                    "connection refused".to_string(),
                )),
            }
        }
    }

    impl SemanticService for StubService {
        async fn extract_keywords(&self, _text: &str) -> Result<String> {
            Ok("[]".to_string())
        }

        async fn find_soft_matches(
            &self,
            _resume: &KeywordSet,
            _job: &KeywordSet,
        ) -> Result<String> {
            match &self.soft_response {
                Ok(raw) => Ok(raw.clone()),
                Err(_) => Err(AtsMatchError::ServiceUnavailable(
                    "connection refused".to_string(),
                )),
            }
        }
    }

    fn resume_set() -> KeywordSet {
        KeywordSet::new(["React", "Node", "SQL"])
    }

    fn job_set() -> KeywordSet {
        KeywordSet::new(["React", "Go", "SQL", "Docker"])
    }

    #[test]
    fn test_exact_matches_follow_resume_order() {
        let matches = exact_matches(&resume_set(), &job_set());
        assert_eq!(matches, vec!["React", "SQL"]);
    }

    #[test]
    fn test_exact_matches_subset_and_reflexive() {
        let a = resume_set();
        let b = job_set();
        for keyword in exact_matches(&a, &b) {
            assert!(a.contains(&keyword));
            assert!(b.contains(&keyword));
        }
        assert_eq!(exact_matches(&a, &a), a.to_vec());
    }

    #[test]
    fn test_exact_matches_empty_side() {
        assert!(exact_matches(&KeywordSet::empty(), &job_set()).is_empty());
        assert!(exact_matches(&resume_set(), &KeywordSet::empty()).is_empty());
    }

    #[test]
    fn test_missing_keywords_follow_job_order() {
        let result = MatchResult {
            exact_matches: vec!["React".to_string(), "SQL".to_string()],
            soft_matches: Vec::new(),
        };
        assert_eq!(result.missing_keywords(&job_set()), vec!["Go", "Docker"]);
    }

    #[test]
    fn test_parse_soft_matches_filters_unknown_keywords() {
        let raw = r#"[
            {"resume_keyword": "Node", "job_keyword": "Go", "confidence": 0.8},
            {"resume_keyword": "Elixir", "job_keyword": "Go", "confidence": 0.9},
            {"resume_keyword": "Node", "job_keyword": "Erlang", "confidence": 0.9}
        ]"#;
        let matches = parse_soft_matches(raw, &resume_set(), &job_set());
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].resume_keyword, "Node");
        assert_eq!(matches[0].job_keyword, "Go");
    }

    #[test]
    fn test_parse_soft_matches_defaults_and_clamps_confidence() {
        let raw = r#"[
            {"resume_keyword": "Node", "job_keyword": "Go"},
            {"resume_keyword": "React", "job_keyword": "Docker", "confidence": 3.5},
            {"resume_keyword": "SQL", "job_keyword": "Docker", "confidence": -0.2}
        ]"#;
        let matches = parse_soft_matches(raw, &resume_set(), &job_set());
        assert_eq!(matches[0].confidence, 0.0);
        assert_eq!(matches[1].confidence, 1.0);
        assert_eq!(matches[2].confidence, 0.0);
    }

    #[test]
    fn test_parse_soft_matches_malformed_response_is_empty() {
        assert!(parse_soft_matches("not json", &resume_set(), &job_set()).is_empty());
        assert!(parse_soft_matches("{}", &resume_set(), &job_set()).is_empty());
        assert!(parse_soft_matches("", &resume_set(), &job_set()).is_empty());
    }

    #[test]
    fn test_top_soft_matches_ranked_and_capped() {
        let result = MatchResult {
            exact_matches: Vec::new(),
            soft_matches: vec![
                SoftMatch {
                    resume_keyword: "a".into(),
                    job_keyword: "b".into(),
                    confidence: 0.5,
                },
                SoftMatch {
                    resume_keyword: "c".into(),
                    job_keyword: "d".into(),
                    confidence: 0.9,
                },
                SoftMatch {
                    resume_keyword: "e".into(),
                    job_keyword: "f".into(),
                    confidence: 0.5,
                },
            ],
        };
        let top = result.top_soft_matches(2);
        assert_eq!(top.len(), 2);
        assert_eq!(top[0].confidence, 0.9);
        // Tie at 0.5: response order wins.
        assert_eq!(top[1].resume_keyword, "a");
    }

    #[tokio::test]
    async fn test_compare_with_working_backend() {
        let engine = MatchEngine::new(StubService::ok(
            r#"[{"resume_keyword": "Node", "job_keyword": "Go", "confidence": 0.7}]"#,
        ));
        let result = engine.compare(&resume_set(), &job_set()).await;
        assert_eq!(result.exact_matches, vec!["React", "SQL"]);
        assert_eq!(result.soft_matches.len(), 1);
    }

    #[tokio::test]
    async fn test_compare_degrades_when_backend_unreachable() {
        let engine = MatchEngine::new(StubService::down());
        let result = engine.compare(&resume_set(), &job_set()).await;
        assert_eq!(result.exact_matches, vec!["React", "SQL"]);
        assert!(result.soft_matches.is_empty());
    }
}
