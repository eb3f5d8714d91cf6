//! Error types for the lifexp library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for pipeline operations.
#[derive(Debug, Error)]
pub enum LifexpError {
    /// Error reading or writing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Error from the CSV library.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The source artifact matches no supported encoding.
    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    /// Requested region code is not in the catalog.
    #[error("Invalid region: {0}")]
    InvalidRegion(String),

    /// Structurally malformed data.
    #[error("Parse error in column '{column}': {message}")]
    Parse { column: String, message: String },

    /// Empty file or no data to process.
    #[error("Empty data: {0}")]
    EmptyData(String),
}

/// Result type alias for pipeline operations.
pub type Result<T> = std::result::Result<T, LifexpError>;
