use pdfgate_core::{
    CompressPdfParams, Document, ExtractFormDataParams, FlattenPdfParams, GeneratePdfParams,
    GetDocumentParams, GetFileParams, ProtectPdfParams, WatermarkPdfParams,
};

use crate::client::PdfGateClient;
use crate::config::PdfGateConfig;
use crate::errors::Result;
use crate::urls::is_sandbox_key;

/// Main SDK entry point for PDFGate.
pub struct PdfGate {
    client: PdfGateClient,
    sandbox: bool,
}

impl PdfGate {
    /// Creates a new PDFGate instance with an API key.
    pub fn new(api_key: impl Into<String>) -> Result<Self> {
        let api_key = api_key.into();
        let sandbox = is_sandbox_key(&api_key);
        let client = PdfGateClient::new(api_key)?;
        Ok(Self { client, sandbox })
    }

    /// Creates a new PDFGate instance with a custom configuration.
    pub fn with_config(api_key: impl Into<String>, config: PdfGateConfig) -> Result<Self> {
        let api_key = api_key.into();
        let sandbox = is_sandbox_key(&api_key);
        let client = PdfGateClient::with_config(api_key, config)?;
        Ok(Self { client, sandbox })
    }

    /// Creates a new PDFGate instance from `PDFGATE_API_KEY`.
    pub fn from_env() -> Result<Self> {
        let client = PdfGateClient::from_env()?;
        let sandbox = client.base_url() == client.config().sandbox_api_domain;
        Ok(Self { client, sandbox })
    }

    /// True when requests target the sandbox environment.
    pub fn is_sandbox(&self) -> bool {
        self.sandbox
    }

    /// Access to the underlying HTTP client.
    pub fn client(&self) -> &PdfGateClient {
        &self.client
    }

    /// Renders raw HTML to PDF bytes.
    pub async fn generate_pdf_from_html(&self, html: impl Into<String>) -> Result<Vec<u8>> {
        self.client
            .generate_pdf(&GeneratePdfParams::from_html(html))
            .await
    }

    /// Renders a public URL to PDF bytes.
    pub async fn generate_pdf_from_url(&self, url: impl Into<String>) -> Result<Vec<u8>> {
        self.client
            .generate_pdf(&GeneratePdfParams::from_url(url))
            .await
    }

    pub async fn generate_pdf(&self, params: &GeneratePdfParams) -> Result<Vec<u8>> {
        self.client.generate_pdf(params).await
    }

    pub async fn generate_pdf_document(&self, params: &GeneratePdfParams) -> Result<Document> {
        self.client.generate_pdf_document(params).await
    }

    pub async fn flatten_pdf(&self, params: &FlattenPdfParams) -> Result<Vec<u8>> {
        self.client.flatten_pdf(params).await
    }

    pub async fn flatten_pdf_document(&self, params: &FlattenPdfParams) -> Result<Document> {
        self.client.flatten_pdf_document(params).await
    }

    pub async fn watermark_pdf(&self, params: &WatermarkPdfParams) -> Result<Vec<u8>> {
        self.client.watermark_pdf(params).await
    }

    pub async fn watermark_pdf_document(&self, params: &WatermarkPdfParams) -> Result<Document> {
        self.client.watermark_pdf_document(params).await
    }

    pub async fn protect_pdf(&self, params: &ProtectPdfParams) -> Result<Vec<u8>> {
        self.client.protect_pdf(params).await
    }

    pub async fn protect_pdf_document(&self, params: &ProtectPdfParams) -> Result<Document> {
        self.client.protect_pdf_document(params).await
    }

    pub async fn compress_pdf(&self, params: &CompressPdfParams) -> Result<Vec<u8>> {
        self.client.compress_pdf(params).await
    }

    pub async fn compress_pdf_document(&self, params: &CompressPdfParams) -> Result<Document> {
        self.client.compress_pdf_document(params).await
    }

    pub async fn extract_form_data(&self, params: &ExtractFormDataParams) -> Result<serde_json::Value> {
        self.client.extract_form_data(params).await
    }

    /// Fetches a stored document's metadata by ID.
    pub async fn get_document(&self, params: &GetDocumentParams) -> Result<Document> {
        self.client.get_document(params).await
    }

    /// Downloads a stored document's file by ID.
    pub async fn get_file(&self, params: &GetFileParams) -> Result<Vec<u8>> {
        self.client.get_file(params).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sandbox_detection() {
        let sdk = PdfGate::new("test_abc123").unwrap();
        assert!(sdk.is_sandbox());

        let sdk = PdfGate::new("live_abc123").unwrap();
        assert!(!sdk.is_sandbox());
    }
}
