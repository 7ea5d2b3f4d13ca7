use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Guesses a MIME type from a file name extension.
///
/// Covers the formats the API accepts for uploads and watermark images.
/// Everything else falls back to `application/octet-stream`.
pub fn guess_content_type(name: &str) -> &'static str {
    let extension = name.rsplit('.').next().unwrap_or_default().to_lowercase();
    match extension.as_str() {
        "pdf" => "application/pdf",
        "png" => "image/png",
        "jpg" | "jpeg" => "image/jpeg",
        "gif" => "image/gif",
        "webp" => "image/webp",
        "svg" => "image/svg+xml",
        "html" | "htm" => "text/html",
        "json" => "application/json",
        _ => "application/octet-stream",
    }
}

/// Processing status reported by the API for a document.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    /// The document is finished and available.
    Completed,
    /// The document is still processing.
    Processing,
    /// The document has expired and is no longer available.
    Expired,
    /// The document failed to process.
    Failed,
}

/// How a document was produced.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DocumentType {
    /// Generated from HTML or a URL.
    FromHtml,
    /// Created by flattening a PDF.
    Flattened,
    /// Created by applying a watermark.
    Watermarked,
    /// Created by encryption.
    Encrypted,
    /// Created by compression.
    Compressed,
    /// Created by signing.
    Signed,
}

/// Document metadata returned by JSON responses from the PDFGate API.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Document {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub status: Option<DocumentStatus>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub expires_at: Option<DateTime<Utc>>,
    #[serde(rename = "type", default)]
    pub doc_type: Option<DocumentType>,
    /// Temporary pre-signed download URL, when requested.
    #[serde(default)]
    pub file_url: Option<String>,
    /// File size in bytes.
    #[serde(default)]
    pub size: Option<i64>,
    /// Caller-supplied metadata echoed back by the API.
    #[serde(default)]
    pub metadata: Option<serde_json::Value>,
    /// Source document ID when this document was derived from another.
    #[serde(default)]
    pub derived_from: Option<String>,
}

/// Binary file payload for multipart PDF uploads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileParam {
    name: String,
    data: Vec<u8>,
    content_type: Option<String>,
}

impl FileParam {
    /// Creates a file payload; the content type is inferred from the name.
    pub fn new(name: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            data,
            content_type: None,
        }
    }

    /// Creates a file payload with an explicit content type.
    pub fn with_content_type(
        name: impl Into<String>,
        data: Vec<u8>,
        content_type: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            data,
            content_type: Some(content_type.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the explicit content type, or one guessed from the file name.
    pub fn content_type(&self) -> String {
        match &self.content_type {
            Some(content_type) if !content_type.is_empty() => content_type.clone(),
            _ => guess_content_type(&self.name).to_string(),
        }
    }

    /// True when the payload has a name and at least one byte of data.
    pub fn is_complete(&self) -> bool {
        !self.name.is_empty() && !self.data.is_empty()
    }
}
