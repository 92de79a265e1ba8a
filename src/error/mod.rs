//! Error handling for the study pipeline.

use std::path::PathBuf;

/// Specialized error type for the study pipeline
#[derive(Debug, thiserror::Error)]
pub enum StudyError {
    /// Error opening or reading a file
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error parsing or writing tabular data
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error serializing the run summary
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A required input file or directory is missing
    #[error("input not found: {}", .0.display())]
    MissingInput(PathBuf),

    /// A record failed validation
    #[error("invalid record: {0}")]
    InvalidRecord(String),
}

/// Result type for study pipeline operations
pub type Result<T> = std::result::Result<T, StudyError>;
