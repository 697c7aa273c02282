//! Document ingestion: container detection and raw-text extraction

pub mod file_detector;
pub mod manager;
pub mod text_extractor;

pub use file_detector::FileType;
pub use manager::InputManager;
