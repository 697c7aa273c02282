//! Input manager routing documents to the right extractor

use crate::error::{AtsMatchError, Result};
use crate::input::file_detector::FileType;
use crate::input::text_extractor::{
    MarkdownExtractor, PdfExtractor, PlainTextExtractor, TextExtractor,
};
use log::info;
use std::path::Path;

pub struct InputManager;

impl InputManager {
    pub fn new() -> Self {
        Self
    }

    /// Extract raw text from an in-memory document, routed by MIME type.
    /// Fails when the container is unsupported or yields no text.
    pub fn extract_raw_text(&self, bytes: &[u8], mime_type: &str) -> Result<String> {
        let file_type = FileType::from_mime_type(mime_type);
        self.extract(bytes, file_type, mime_type)
    }

    /// Extract raw text from a file on disk, routed by extension.
    pub async fn extract_from_path(&self, path: &Path) -> Result<String> {
        if !path.exists() {
            return Err(AtsMatchError::InvalidInput(format!(
                "File does not exist: {}",
                path.display()
            )));
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .ok_or_else(|| {
                AtsMatchError::InvalidInput(format!("File has no extension: {}", path.display()))
            })?;

        let bytes = tokio::fs::read(path).await?;
        self.extract(&bytes, FileType::from_extension(extension), &path.display().to_string())
    }

    fn extract(&self, bytes: &[u8], file_type: FileType, source: &str) -> Result<String> {
        let text = match file_type {
            FileType::Pdf => {
                info!("Extracting text from PDF: {}", source);
                PdfExtractor.extract(bytes)?
            }
            FileType::Text => {
                info!("Reading plain text document: {}", source);
                PlainTextExtractor.extract(bytes)?
            }
            FileType::Markdown => {
                info!("Processing markdown document: {}", source);
                MarkdownExtractor.extract(bytes)?
            }
            FileType::Unknown => {
                return Err(AtsMatchError::UnsupportedFormat(format!(
                    "Unsupported document type: {}",
                    source
                )));
            }
        };

        if text.trim().is_empty() {
            return Err(AtsMatchError::Extraction(format!(
                "No text extracted from {}",
                source
            )));
        }

        Ok(text)
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_raw_text_plain() {
        let manager = InputManager::new();
        let text = manager
            .extract_raw_text(b"Senior Rust engineer", "text/plain")
            .unwrap();
        assert_eq!(text, "Senior Rust engineer");
    }

    #[test]
    fn test_unsupported_mime_type() {
        let manager = InputManager::new();
        let result = manager.extract_raw_text(b"...", "application/zip");
        assert!(matches!(result, Err(AtsMatchError::UnsupportedFormat(_))));
    }

    #[test]
    fn test_empty_document_is_an_extraction_failure() {
        let manager = InputManager::new();
        let result = manager.extract_raw_text(b"   \n  ", "text/plain");
        assert!(matches!(result, Err(AtsMatchError::Extraction(_))));
    }
}
