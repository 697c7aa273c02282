//! File type detection

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileType {
    Pdf,
    Text,
    Markdown,
    Unknown,
}

impl FileType {
    pub fn from_extension(ext: &str) -> Self {
        match ext.to_lowercase().as_str() {
            "pdf" => FileType::Pdf,
            "txt" => FileType::Text,
            "md" | "markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }

    pub fn from_mime_type(mime: &str) -> Self {
        match mime {
            "application/pdf" => FileType::Pdf,
            "text/plain" => FileType::Text,
            "text/markdown" => FileType::Markdown,
            _ => FileType::Unknown,
        }
    }
}
