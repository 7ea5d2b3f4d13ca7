//! Request parameter types for PDFGate operations.
//!
//! Each params struct is plain data with a `validate` method enforcing the
//! API's business rules before any request is built. Operations that accept
//! either an uploaded file or an existing document use [`DocumentSource`],
//! which makes the one-of-two requirement unrepresentable to get wrong.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::{PdfGateError, Result};
use crate::models::FileParam;

/// Source PDF for operations that transform an existing document.
#[derive(Debug, Clone, PartialEq)]
pub enum DocumentSource {
    /// Upload the PDF bytes with the request.
    File(FileParam),
    /// Reference a document already stored by the API.
    DocumentId(String),
}

impl DocumentSource {
    fn validate(&self) -> Result<()> {
        match self {
            DocumentSource::File(file) => {
                if file.name().is_empty() {
                    return Err(PdfGateError::ValidationFailed(
                        "file name must be provided".to_string(),
                    ));
                }
                if file.data().is_empty() {
                    return Err(PdfGateError::ValidationFailed(
                        "file data must be provided".to_string(),
                    ));
                }
                Ok(())
            }
            DocumentSource::DocumentId(id) => {
                if id.trim().is_empty() {
                    return Err(PdfGateError::ValidationFailed(
                        "documentId must be provided".to_string(),
                    ));
                }
                Ok(())
            }
        }
    }
}

/// Page size presets supported by the render engine.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
    Ledger,
    Tabloid,
    Legal,
    Letter,
}

/// Page orientation for generated PDFs.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// CSS media type emulated during rendering.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EmulateMediaType {
    Screen,
    Print,
}

/// Margins applied to each rendered page. Values are CSS lengths.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PageMargin {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bottom: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub left: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub right: Option<String>,
}

/// Viewport dimensions in pixels used while rendering.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

/// Basic-auth credentials for rendering protected pages.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct Authentication {
    pub username: String,
    pub password: String,
}

/// Selectors clicked in order before rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct ClickSelectorChain {
    pub selectors: Vec<String>,
}

/// Configuration for running click selector chains before rendering.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClickSelectorChainSetup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignore_failing_chains: Option<bool>,
    pub chains: Vec<ClickSelectorChain>,
}

/// Parameters for generating a PDF from raw HTML or a public URL.
///
/// Either `html` or `url` must be set. All other fields are optional render
/// controls serialized as camelCase JSON in the request body.
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct GeneratePdfParams {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pre_signed_url_expires_in: Option<i64>,
    #[serde(rename = "pageSizeType", skip_serializing_if = "Option::is_none")]
    pub page_size: Option<PageSize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    /// Header HTML applied to every page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header: Option<String>,
    /// Footer HTML applied to every page.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub footer: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<PageMargin>,
    /// Render timeout in milliseconds, enforced server-side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u32>,
    /// JavaScript executed before rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub javascript: Option<String>,
    /// Extra CSS injected before rendering.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub css: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emulate_media_type: Option<EmulateMediaType>,
    /// Headers sent when loading the target URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub http_headers: Option<HashMap<String, String>>,
    /// Metadata stored alongside the generated document.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_selector: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub click_selector_chain_setup: Option<ClickSelectorChainSetup>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wait_for_network_idle: Option<bool>,
    /// Keep interactive form fields in the output instead of rasterizing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enable_form_fields: Option<bool>,
    /// Delay in milliseconds before rendering starts.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub load_images: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale: Option<f64>,
    /// Page ranges to include, e.g. "1-5" or "1,3,5".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_ranges: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub print_background: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication: Option<Authentication>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub viewport: Option<Viewport>,
}

impl GeneratePdfParams {
    /// Renders raw HTML content.
    pub fn from_html(html: impl Into<String>) -> Self {
        Self {
            html: Some(html.into()),
            ..Default::default()
        }
    }

    /// Renders a publicly reachable URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        let has_html = self.html.as_deref().is_some_and(|s| !s.trim().is_empty());
        let has_url = self.url.as_deref().is_some_and(|s| !s.trim().is_empty());
        if !has_html && !has_url {
            return Err(PdfGateError::ValidationFailed(
                "either 'html' or 'url' must be provided to generate a PDF".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for flattening a PDF's interactive fields into static content.
#[derive(Debug, Clone, PartialEq)]
pub struct FlattenPdfParams {
    pub source: DocumentSource,
    pub pre_signed_url_expires_in: Option<i64>,
    pub metadata: Option<serde_json::Value>,
}

impl FlattenPdfParams {
    pub fn new(source: DocumentSource) -> Self {
        Self {
            source,
            pre_signed_url_expires_in: None,
            metadata: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }
}

/// Watermark kind: rendered text or an uploaded image.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum WatermarkType {
    Text,
    Image,
}

impl WatermarkType {
    /// Wire value used in multipart form fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            WatermarkType::Text => "text",
            WatermarkType::Image => "image",
        }
    }
}

/// Parameters for stamping a text or image watermark onto a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct WatermarkPdfParams {
    pub source: DocumentSource,
    pub watermark_type: WatermarkType,
    /// Watermark text; required when `watermark_type` is text.
    pub text: Option<String>,
    /// Watermark image; required when `watermark_type` is image.
    pub watermark: Option<FileParam>,
    pub font: Option<String>,
    pub font_size: Option<u32>,
    /// CSS color value, e.g. "#ff0000".
    pub font_color: Option<String>,
    /// Opacity between 0.0 and 1.0.
    pub opacity: Option<f64>,
    pub x_position: Option<i32>,
    pub y_position: Option<i32>,
    pub image_width: Option<u32>,
    pub image_height: Option<u32>,
    /// Rotation in degrees.
    pub rotate: Option<f64>,
    pub pre_signed_url_expires_in: Option<i64>,
    pub metadata: Option<serde_json::Value>,
}

impl WatermarkPdfParams {
    pub fn text(source: DocumentSource, text: impl Into<String>) -> Self {
        Self {
            source,
            watermark_type: WatermarkType::Text,
            text: Some(text.into()),
            watermark: None,
            font: None,
            font_size: None,
            font_color: None,
            opacity: None,
            x_position: None,
            y_position: None,
            image_width: None,
            image_height: None,
            rotate: None,
            pre_signed_url_expires_in: None,
            metadata: None,
        }
    }

    pub fn image(source: DocumentSource, watermark: FileParam) -> Self {
        Self {
            watermark: Some(watermark),
            watermark_type: WatermarkType::Image,
            text: None,
            ..Self::text(source, "")
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.source.validate()?;
        match self.watermark_type {
            WatermarkType::Text => {
                if self.text.as_deref().map_or(true, |t| t.trim().is_empty()) {
                    return Err(PdfGateError::ValidationFailed(
                        "text must be provided when watermark type is text".to_string(),
                    ));
                }
            }
            WatermarkType::Image => match &self.watermark {
                None => {
                    return Err(PdfGateError::ValidationFailed(
                        "watermark file must be provided when watermark type is image".to_string(),
                    ));
                }
                Some(watermark) if !watermark.is_complete() => {
                    return Err(PdfGateError::ValidationFailed(
                        "watermark file name and data must be provided".to_string(),
                    ));
                }
                Some(_) => {}
            },
        }
        Ok(())
    }
}

/// Encryption algorithms supported by the protect operation.
#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum EncryptionAlgorithm {
    #[serde(rename = "AES256")]
    Aes256,
    #[serde(rename = "AES128")]
    Aes128,
}

impl EncryptionAlgorithm {
    /// Wire value used in multipart form fields.
    pub fn as_str(&self) -> &'static str {
        match self {
            EncryptionAlgorithm::Aes256 => "AES256",
            EncryptionAlgorithm::Aes128 => "AES128",
        }
    }
}

/// Parameters for password-protecting a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtectPdfParams {
    pub source: DocumentSource,
    pub algorithm: Option<EncryptionAlgorithm>,
    /// Password required to open the document.
    pub user_password: Option<String>,
    /// Password required to change permissions.
    pub owner_password: Option<String>,
    pub disable_print: Option<bool>,
    pub disable_copy: Option<bool>,
    pub disable_editing: Option<bool>,
    pub encrypt_metadata: Option<bool>,
    pub pre_signed_url_expires_in: Option<i64>,
    pub metadata: Option<serde_json::Value>,
}

impl ProtectPdfParams {
    pub fn new(source: DocumentSource) -> Self {
        Self {
            source,
            algorithm: None,
            user_password: None,
            owner_password: None,
            disable_print: None,
            disable_copy: None,
            disable_editing: None,
            encrypt_metadata: None,
            pre_signed_url_expires_in: None,
            metadata: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }
}

/// Parameters for compressing a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct CompressPdfParams {
    pub source: DocumentSource,
    /// Linearize the output for progressive web viewing.
    pub linearize: Option<bool>,
    pub pre_signed_url_expires_in: Option<i64>,
    pub metadata: Option<serde_json::Value>,
}

impl CompressPdfParams {
    pub fn new(source: DocumentSource) -> Self {
        Self {
            source,
            linearize: None,
            pre_signed_url_expires_in: None,
            metadata: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }
}

/// Parameters for extracting form field data from a PDF.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtractFormDataParams {
    pub source: DocumentSource,
}

impl ExtractFormDataParams {
    pub fn new(source: DocumentSource) -> Self {
        Self { source }
    }

    pub fn validate(&self) -> Result<()> {
        self.source.validate()
    }
}

/// Parameters for retrieving a document's metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetDocumentParams {
    pub document_id: String,
    /// Request a fresh pre-signed download URL valid for this many seconds.
    pub pre_signed_url_expires_in: Option<i64>,
}

impl GetDocumentParams {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            pre_signed_url_expires_in: None,
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.document_id.trim().is_empty() {
            return Err(PdfGateError::ValidationFailed(
                "documentId must be provided".to_string(),
            ));
        }
        Ok(())
    }
}

/// Parameters for downloading a stored document file.
///
/// Stored files are only available when "Save files" is enabled in the
/// PDFGate dashboard.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GetFileParams {
    pub document_id: String,
}

impl GetFileParams {
    pub fn new(document_id: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.document_id.trim().is_empty() {
            return Err(PdfGateError::ValidationFailed(
                "documentId must be provided".to_string(),
            ));
        }
        Ok(())
    }
}
