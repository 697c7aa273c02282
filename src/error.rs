//! Error handling for the ATS matcher

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AtsMatchError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Text extraction error: {0}")]
    Extraction(String),

    #[error("File format not supported: {0}")]
    UnsupportedFormat(String),

    #[error("Service unavailable: {0}")]
    ServiceUnavailable(String),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Output formatting error: {0}")]
    OutputFormatting(String),
}

pub type Result<T> = std::result::Result<T, AtsMatchError>;

/// Transport failures from the Gemini backend all surface as the service
/// being unavailable; whether that is fatal depends on the call site.
impl From<reqwest::Error> for AtsMatchError {
    fn from(err: reqwest::Error) -> Self {
        AtsMatchError::ServiceUnavailable(err.to_string())
    }
}
