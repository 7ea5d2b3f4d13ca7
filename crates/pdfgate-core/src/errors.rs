use thiserror::Error;

/// Core domain errors - no I/O dependencies
#[derive(Error, Debug)]
pub enum PdfGateError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Validation failed: {0}")]
    ValidationFailed(String),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PdfGateError>;
