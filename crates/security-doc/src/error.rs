//! Error types for the command line front end

use amf_security::DocumentError;
use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Error, Debug)]
pub enum CliError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error("Security scheme not found: {0}")]
    SchemeNotFound(String),

    #[error("No security requirements for {method} {path}")]
    OperationNotFound { path: String, method: String },

    #[error("Scheme {scheme} has no flow with grant {grant}")]
    FlowNotFound { scheme: String, grant: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
