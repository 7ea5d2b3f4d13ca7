use std::time::Duration;

use log::{debug, error, info, trace};
use pdfgate_core::{
    CompressPdfParams, Document, DocumentSource, ExtractFormDataParams, FlattenPdfParams,
    GeneratePdfParams, GetDocumentParams, GetFileParams, ProtectPdfParams, WatermarkPdfParams,
};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response, StatusCode};
use serde_json::Value;

use crate::config::PdfGateConfig;
use crate::errors::{ApiError, HttpError, Result};
use crate::urls::UrlBuilder;

/// Environment variable holding the API key for [`PdfGateClient::from_env`].
pub const API_KEY_ENV: &str = "PDFGATE_API_KEY";

/// Masks an API key for logging, keeping only the first and last 4 chars.
/// Works on character boundaries, so arbitrary input never panics.
pub(crate) fn mask_key(api_key: &str) -> String {
    let chars: Vec<char> = api_key.chars().collect();
    let head: String = chars.iter().take(4).collect();
    if chars.len() <= 8 {
        return format!("{head}...");
    }
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{head}...{tail}")
}

/// HTTP client for the PDFGate document API.
///
/// One awaited call per operation; connection pooling is handled by the
/// underlying `reqwest` client.
#[derive(Debug, Clone)]
pub struct PdfGateClient {
    client: Client,
    api_key: String,
    config: PdfGateConfig,
    urls: UrlBuilder,
}

impl PdfGateClient {
    /// Creates a client with the default configuration.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        Self::with_config(api_key, PdfGateConfig::default())
    }

    /// Creates a client with a custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: PdfGateConfig) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ApiError::Config("apiKey must be provided".to_string()));
        }

        let urls = UrlBuilder::new(&api_key, &config)?;

        debug!("Creating PdfGateClient");
        debug!("  API Key: {}", mask_key(&api_key));
        debug!("  Base URL: {}", urls.base_url());

        let client = Client::builder()
            .connect_timeout(config.default_timeout)
            .build()
            .map_err(HttpError::Request)?;

        Ok(Self {
            client,
            api_key,
            config,
            urls,
        })
    }

    /// Creates a client from the `PDFGATE_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        debug!("Creating PdfGateClient from environment variable");
        let api_key = std::env::var(API_KEY_ENV).map_err(|_| {
            error!("{} environment variable not set", API_KEY_ENV);
            ApiError::Config(format!("{API_KEY_ENV} environment variable not set"))
        })?;
        Self::new(api_key)
    }

    pub fn config(&self) -> &PdfGateConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.urls.base_url()
    }

    // --- generate -----------------------------------------------------

    /// Generates a PDF from HTML or a URL, returning the raw PDF bytes.
    pub async fn generate_pdf(&self, params: &GeneratePdfParams) -> Result<Vec<u8>> {
        let body = self.generate_body(params, false)?;
        let response = self
            .post_json(
                &self.urls.generate_pdf(),
                body,
                self.config.generate_pdf_timeout,
            )
            .await?;
        self.read_bytes(response).await
    }

    /// Generates a PDF and returns the stored document's metadata.
    pub async fn generate_pdf_document(&self, params: &GeneratePdfParams) -> Result<Document> {
        let body = self.generate_body(params, true)?;
        let response = self
            .post_json(
                &self.urls.generate_pdf(),
                body,
                self.config.generate_pdf_timeout,
            )
            .await?;
        self.read_document(response).await
    }

    fn generate_body(&self, params: &GeneratePdfParams, json_response: bool) -> Result<Value> {
        params.validate()?;
        let mut body = serde_json::to_value(params)?;
        body["jsonResponse"] = Value::Bool(json_response);
        Ok(body)
    }

    // --- flatten ------------------------------------------------------

    /// Flattens interactive fields into static content, returning PDF bytes.
    pub async fn flatten_pdf(&self, params: &FlattenPdfParams) -> Result<Vec<u8>> {
        params.validate()?;
        let form = self.flatten_form(params, false)?;
        let response = self
            .post_multipart(
                &self.urls.flatten_pdf(),
                form,
                self.config.flatten_pdf_timeout,
            )
            .await?;
        self.read_bytes(response).await
    }

    /// Flattens a PDF and returns the stored document's metadata.
    pub async fn flatten_pdf_document(&self, params: &FlattenPdfParams) -> Result<Document> {
        params.validate()?;
        let form = self.flatten_form(params, true)?;
        let response = self
            .post_multipart(
                &self.urls.flatten_pdf(),
                form,
                self.config.flatten_pdf_timeout,
            )
            .await?;
        self.read_document(response).await
    }

    fn flatten_form(&self, params: &FlattenPdfParams, json_response: bool) -> Result<Form> {
        let mut form = Form::new().text("jsonResponse", json_response.to_string());
        form = add_optional_i64(form, "preSignedUrlExpiresIn", params.pre_signed_url_expires_in);
        form = add_metadata(form, params.metadata.as_ref())?;
        add_source(form, &params.source)
    }

    // --- watermark ----------------------------------------------------

    /// Applies a text or image watermark, returning the watermarked bytes.
    pub async fn watermark_pdf(&self, params: &WatermarkPdfParams) -> Result<Vec<u8>> {
        params.validate()?;
        let form = self.watermark_form(params, false)?;
        let response = self
            .post_multipart(
                &self.urls.watermark_pdf(),
                form,
                self.config.default_timeout,
            )
            .await?;
        self.read_bytes(response).await
    }

    /// Applies a watermark and returns the stored document's metadata.
    pub async fn watermark_pdf_document(&self, params: &WatermarkPdfParams) -> Result<Document> {
        params.validate()?;
        let form = self.watermark_form(params, true)?;
        let response = self
            .post_multipart(
                &self.urls.watermark_pdf(),
                form,
                self.config.default_timeout,
            )
            .await?;
        self.read_document(response).await
    }

    fn watermark_form(&self, params: &WatermarkPdfParams, json_response: bool) -> Result<Form> {
        let mut form = Form::new()
            .text("type", params.watermark_type.as_str())
            .text("jsonResponse", json_response.to_string());

        if let Some(text) = &params.text {
            form = form.text("text", text.clone());
        }
        if let Some(font) = &params.font {
            form = form.text("font", font.clone());
        }
        if let Some(font_size) = params.font_size {
            form = form.text("fontSize", font_size.to_string());
        }
        if let Some(font_color) = &params.font_color {
            form = form.text("fontColor", font_color.clone());
        }
        if let Some(opacity) = params.opacity {
            form = form.text("opacity", opacity.to_string());
        }
        if let Some(x) = params.x_position {
            form = form.text("xPosition", x.to_string());
        }
        if let Some(y) = params.y_position {
            form = form.text("yPosition", y.to_string());
        }
        if let Some(width) = params.image_width {
            form = form.text("imageWidth", width.to_string());
        }
        if let Some(height) = params.image_height {
            form = form.text("imageHeight", height.to_string());
        }
        if let Some(rotate) = params.rotate {
            form = form.text("rotate", rotate.to_string());
        }
        form = add_optional_i64(form, "preSignedUrlExpiresIn", params.pre_signed_url_expires_in);
        form = add_metadata(form, params.metadata.as_ref())?;

        if let Some(watermark) = &params.watermark {
            form = form.part("watermark", file_part(watermark)?);
        }

        add_source(form, &params.source)
    }

    // --- protect ------------------------------------------------------

    /// Password-protects a PDF, returning the encrypted bytes.
    pub async fn protect_pdf(&self, params: &ProtectPdfParams) -> Result<Vec<u8>> {
        params.validate()?;
        let form = self.protect_form(params, false)?;
        let response = self
            .post_multipart(
                &self.urls.protect_pdf(),
                form,
                self.config.protect_pdf_timeout,
            )
            .await?;
        self.read_bytes(response).await
    }

    /// Password-protects a PDF and returns the stored document's metadata.
    pub async fn protect_pdf_document(&self, params: &ProtectPdfParams) -> Result<Document> {
        params.validate()?;
        let form = self.protect_form(params, true)?;
        let response = self
            .post_multipart(
                &self.urls.protect_pdf(),
                form,
                self.config.protect_pdf_timeout,
            )
            .await?;
        self.read_document(response).await
    }

    fn protect_form(&self, params: &ProtectPdfParams, json_response: bool) -> Result<Form> {
        let mut form = Form::new().text("jsonResponse", json_response.to_string());

        if let Some(algorithm) = params.algorithm {
            form = form.text("algorithm", algorithm.as_str());
        }
        if let Some(user_password) = &params.user_password {
            form = form.text("userPassword", user_password.clone());
        }
        if let Some(owner_password) = &params.owner_password {
            form = form.text("ownerPassword", owner_password.clone());
        }
        if let Some(disable_print) = params.disable_print {
            form = form.text("disablePrint", disable_print.to_string());
        }
        if let Some(disable_copy) = params.disable_copy {
            form = form.text("disableCopy", disable_copy.to_string());
        }
        if let Some(disable_editing) = params.disable_editing {
            form = form.text("disableEditing", disable_editing.to_string());
        }
        if let Some(encrypt_metadata) = params.encrypt_metadata {
            form = form.text("encryptMetadata", encrypt_metadata.to_string());
        }
        form = add_optional_i64(form, "preSignedUrlExpiresIn", params.pre_signed_url_expires_in);
        form = add_metadata(form, params.metadata.as_ref())?;

        add_source(form, &params.source)
    }

    // --- compress -----------------------------------------------------

    /// Compresses a PDF, returning the compressed bytes.
    pub async fn compress_pdf(&self, params: &CompressPdfParams) -> Result<Vec<u8>> {
        params.validate()?;
        let form = self.compress_form(params, false)?;
        let response = self
            .post_multipart(
                &self.urls.compress_pdf(),
                form,
                self.config.compress_pdf_timeout,
            )
            .await?;
        self.read_bytes(response).await
    }

    /// Compresses a PDF and returns the stored document's metadata.
    pub async fn compress_pdf_document(&self, params: &CompressPdfParams) -> Result<Document> {
        params.validate()?;
        let form = self.compress_form(params, true)?;
        let response = self
            .post_multipart(
                &self.urls.compress_pdf(),
                form,
                self.config.compress_pdf_timeout,
            )
            .await?;
        self.read_document(response).await
    }

    fn compress_form(&self, params: &CompressPdfParams, json_response: bool) -> Result<Form> {
        let mut form = Form::new().text("jsonResponse", json_response.to_string());
        if let Some(linearize) = params.linearize {
            form = form.text("linearize", linearize.to_string());
        }
        form = add_optional_i64(form, "preSignedUrlExpiresIn", params.pre_signed_url_expires_in);
        form = add_metadata(form, params.metadata.as_ref())?;
        add_source(form, &params.source)
    }

    // --- forms & documents --------------------------------------------

    /// Extracts form field data from a PDF as raw JSON.
    pub async fn extract_form_data(&self, params: &ExtractFormDataParams) -> Result<Value> {
        params.validate()?;
        let form = add_source(Form::new(), &params.source)?;
        let response = self
            .post_multipart(
                &self.urls.extract_form_data(),
                form,
                self.config.default_timeout,
            )
            .await?;
        let value: Value = response.json().await.map_err(HttpError::Decode)?;
        info!("Successfully extracted form data");
        Ok(value)
    }

    /// Fetches a stored document's metadata.
    pub async fn get_document(&self, params: &GetDocumentParams) -> Result<Document> {
        params.validate()?;
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(expires_in) = params.pre_signed_url_expires_in {
            query.push(("preSignedUrlExpiresIn", expires_in.to_string()));
        }
        let response = self
            .get(
                &self.urls.document(&params.document_id),
                &query,
                self.config.default_timeout,
            )
            .await?;
        self.read_document(response).await
    }

    /// Downloads a stored document's file bytes.
    pub async fn get_file(&self, params: &GetFileParams) -> Result<Vec<u8>> {
        params.validate()?;
        let response = self
            .get(
                &self.urls.document_file(&params.document_id),
                &[],
                self.config.default_timeout,
            )
            .await?;
        self.read_bytes(response).await
    }

    // --- transport ----------------------------------------------------

    async fn post_json(&self, url: &str, body: Value, timeout: Duration) -> Result<Response> {
        debug!("HTTP POST request to: {}", url);
        trace!("  Authorization: Bearer {}", mask_key(&self.api_key));
        trace!(
            "Request body: {}",
            serde_json::to_string_pretty(&body).unwrap_or_else(|_| "Invalid JSON".to_string())
        );

        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                error!("POST request failed: {:?}", e);
                HttpError::Request(e)
            })?;

        debug!("Response status: {}", response.status());
        self.handle_response(response).await
    }

    async fn post_multipart(&self, url: &str, form: Form, timeout: Duration) -> Result<Response> {
        debug!("HTTP POST (multipart) request to: {}", url);
        trace!("  Authorization: Bearer {}", mask_key(&self.api_key));

        let response = self
            .client
            .post(url)
            .timeout(timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .multipart(form)
            .send()
            .await
            .map_err(|e| {
                error!("POST request failed: {:?}", e);
                HttpError::Request(e)
            })?;

        debug!("Response status: {}", response.status());
        self.handle_response(response).await
    }

    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
        timeout: Duration,
    ) -> Result<Response> {
        debug!("HTTP GET request to: {}", url);
        trace!("  Authorization: Bearer {}", mask_key(&self.api_key));

        let response = self
            .client
            .get(url)
            .timeout(timeout)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .query(query)
            .send()
            .await
            .map_err(|e| {
                error!("GET request failed: {:?}", e);
                HttpError::Request(e)
            })?;

        debug!("Response status: {}", response.status());
        self.handle_response(response).await
    }

    /// Maps non-2xx responses into the error taxonomy.
    async fn handle_response(&self, response: Response) -> Result<Response> {
        let status = response.status();

        if status.is_success() {
            debug!("Request successful with status: {}", status);
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        error!("Request failed with status: {}", status);
        debug!("Error response body: {}", body);

        let http_error = match status {
            StatusCode::UNAUTHORIZED => HttpError::AuthenticationFailed,
            StatusCode::FORBIDDEN => HttpError::InvalidApiKey,
            StatusCode::TOO_MANY_REQUESTS => HttpError::RateLimited,
            StatusCode::SERVICE_UNAVAILABLE => HttpError::ServiceUnavailable,
            StatusCode::REQUEST_TIMEOUT => HttpError::Timeout,
            _ => HttpError::from_status(status.as_u16(), body),
        };

        Err(ApiError::Http(http_error))
    }

    async fn read_document(&self, response: Response) -> Result<Document> {
        let document: Document = response.json().await.map_err(|e| {
            error!("Failed to decode document response: {:?}", e);
            HttpError::Decode(e)
        })?;
        info!(
            "Received document{}",
            document
                .id
                .as_deref()
                .map(|id| format!(" {id}"))
                .unwrap_or_default()
        );
        Ok(document)
    }

    async fn read_bytes(&self, response: Response) -> Result<Vec<u8>> {
        let bytes = response.bytes().await.map_err(HttpError::Request)?;
        info!("Received {} bytes", bytes.len());
        Ok(bytes.to_vec())
    }
}

/// Attaches the source PDF: either a multipart file part or a documentId field.
fn add_source(form: Form, source: &DocumentSource) -> Result<Form> {
    match source {
        DocumentSource::File(file) => Ok(form.part("file", file_part(file)?)),
        DocumentSource::DocumentId(id) => Ok(form.text("documentId", id.clone())),
    }
}

fn file_part(file: &pdfgate_core::FileParam) -> Result<Part> {
    let part = Part::bytes(file.data().to_vec())
        .file_name(file.name().to_string())
        .mime_str(&file.content_type())
        .map_err(HttpError::Request)?;
    Ok(part)
}

fn add_optional_i64(form: Form, field: &str, value: Option<i64>) -> Form {
    match value {
        Some(value) => form.text(field.to_string(), value.to_string()),
        None => form,
    }
}

/// Metadata is passed through verbatim when it is already a string, and
/// JSON-encoded otherwise.
fn add_metadata(form: Form, metadata: Option<&Value>) -> Result<Form> {
    match metadata {
        Some(Value::String(text)) => Ok(form.text("metadata", text.clone())),
        Some(value) => Ok(form.text("metadata", serde_json::to_string(value)?)),
        None => Ok(form),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_masking() {
        assert_eq!(mask_key("live_abcdef123456"), "live...3456");
        assert_eq!(mask_key("test_abcdefgh"), "test...efgh");
        assert_eq!(mask_key("short"), "shor...");
        assert_eq!(mask_key(""), "...");
    }

    #[test]
    fn test_key_masking_multibyte() {
        // Characters wider than one byte must not split mid-character
        assert_eq!(mask_key("abcé_fghijk"), "abcé...hijk");
        assert_eq!(mask_key("κλειδί"), "κλει...");
    }

    #[test]
    fn test_client_rejects_blank_key() {
        assert!(PdfGateClient::new("").is_err());
        assert!(PdfGateClient::new("   ").is_err());
    }

    #[test]
    fn test_client_rejects_unknown_key_prefix() {
        assert!(PdfGateClient::new("sk_12345").is_err());
    }

    #[test]
    fn test_client_accepts_valid_keys() {
        let client = PdfGateClient::new("live_12345").unwrap();
        assert_eq!(client.base_url(), "https://api.pdfgate.com");

        let client = PdfGateClient::new("test_12345").unwrap();
        assert_eq!(client.base_url(), "https://api-sandbox.pdfgate.com");
    }

    #[test]
    fn test_generate_body_injects_response_mode() {
        let client = PdfGateClient::new("test_12345").unwrap();
        let params = GeneratePdfParams::from_html("<p>x</p>");

        let body = client.generate_body(&params, true).unwrap();
        assert_eq!(body["jsonResponse"], true);
        assert_eq!(body["html"], "<p>x</p>");

        let body = client.generate_body(&params, false).unwrap();
        assert_eq!(body["jsonResponse"], false);
    }
}
