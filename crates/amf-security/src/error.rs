//! Error types for loading AMF documents

use thiserror::Error;

/// Result type alias for document operations
pub type DocumentResult<T> = std::result::Result<T, DocumentError>;

/// Document loading errors
///
/// Projection never fails; only getting a model into memory can.
#[derive(Error, Debug)]
pub enum DocumentError {
    #[error("Failed to fetch AMF model: {0}")]
    FetchError(String),

    #[error("Invalid AMF model: {0}")]
    InvalidFormat(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("YAML parse error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    HttpError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}
