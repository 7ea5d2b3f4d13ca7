use thiserror::Error;

/// API-specific errors for pdfgate-api
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Core domain error: {0}")]
    Core(#[from] pdfgate_core::PdfGateError),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[derive(Error, Debug)]
pub enum HttpError {
    #[error("Authentication failed")]
    AuthenticationFailed,

    #[error("Invalid API key")]
    InvalidApiKey,

    #[error("Rate limited")]
    RateLimited,

    #[error("Service unavailable")]
    ServiceUnavailable,

    #[error("Request timeout")]
    Timeout,

    #[error("PDFGate API request failed with status {status}: {message}")]
    Status {
        status: u16,
        message: String,
        body: String,
    },

    #[error("Failed to decode response body: {0}")]
    Decode(#[source] reqwest::Error),

    #[error("Request error: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl HttpError {
    /// Builds the non-2xx error for a response, pulling a human-readable
    /// message out of a JSON error body when one is present.
    pub fn from_status(status: u16, body: String) -> Self {
        let message = parse_error_message(&body).unwrap_or_else(|| body.clone());
        Self::Status {
            status,
            message,
            body,
        }
    }
}

/// Extracts the `message` field from a JSON error payload, if any.
fn parse_error_message(body: &str) -> Option<String> {
    if body.is_empty() {
        return None;
    }
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    match value.get("message")? {
        serde_json::Value::String(message) => Some(message.clone()),
        serde_json::Value::Null => None,
        other => Some(other.to_string()),
    }
}

pub type Result<T> = std::result::Result<T, ApiError>;
