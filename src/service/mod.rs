//! The opaque text-understanding backend

pub mod gemini;
pub mod prompts;

pub use gemini::GeminiClient;

use crate::error::Result;
use crate::pipeline::keywords::KeywordSet;

/// Boundary to the semantic backend. Both calls return the backend's raw
/// textual response; interpreting it is the pipeline's job, not the
/// client's.
pub trait SemanticService {
    /// Ask the backend for the keywords of a document.
    fn extract_keywords(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<String>> + Send;

    /// Ask the backend which keyword pairs across the two sets are
    /// semantically related.
    fn find_soft_matches(
        &self,
        resume: &KeywordSet,
        job: &KeywordSet,
    ) -> impl std::future::Future<Output = Result<String>> + Send;
}
