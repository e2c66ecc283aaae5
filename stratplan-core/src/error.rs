//! Error types for stratplan

use thiserror::Error;

/// Result type alias for stratplan operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for stratplan operations
#[derive(Error, Debug)]
pub enum Error {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Source document could not be parsed as a PDF
    #[error("PDF error: {0}")]
    Pdf(String),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Binary serialization/deserialization error
    #[error("Binary encoding error: {0}")]
    Binary(#[from] bincode::Error),

    /// Section pattern failed to compile
    #[error("Pattern error: {0}")]
    Pattern(#[from] regex::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
