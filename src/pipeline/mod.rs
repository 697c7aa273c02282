//! The keyword extraction and matching pipeline

pub mod analyzer;
pub mod keywords;
pub mod matcher;
pub mod normalizer;
pub mod recommend;
pub mod scorer;

pub use analyzer::{MatchPipeline, ScoreReport};
pub use keywords::KeywordSet;
pub use matcher::{MatchResult, SoftMatch};
pub use recommend::{Finding, Severity};
pub use scorer::MatchLabel;
