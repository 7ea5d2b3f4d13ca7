use url::Url;

use crate::config::PdfGateConfig;
use crate::errors::{ApiError, Result};

/// Builds endpoint URLs for the PDFGate API.
///
/// The target domain is chosen from the API key prefix: `live_` keys hit
/// the production domain, `test_` keys hit the sandbox domain.
#[derive(Debug, Clone)]
pub struct UrlBuilder {
    base_url: String,
    base: Url,
}

const API_VERSION: &str = "v1";

impl UrlBuilder {
    pub fn new(api_key: &str, config: &PdfGateConfig) -> Result<Self> {
        let domain = domain_for_api_key(api_key, config)?;
        if domain.trim().is_empty() {
            return Err(ApiError::Config("domain must be provided".to_string()));
        }
        // Reject malformed domains up front rather than at request time
        let base = Url::parse(domain.trim())
            .map_err(|e| ApiError::Config(format!("invalid API domain '{domain}': {e}")))?;
        if base.cannot_be_a_base() {
            return Err(ApiError::Config(format!(
                "invalid API domain '{domain}': not a base URL"
            )));
        }
        Ok(Self {
            base_url: domain.trim().trim_end_matches('/').to_string(),
            base,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Joins path segments onto the base URL, percent-encoding each segment.
    fn join_segments(&self, segments: &[&str]) -> String {
        let mut url = self.base.clone();
        // The base is validated as a base URL at construction
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url.to_string()
    }

    pub fn generate_pdf(&self) -> String {
        format!("{}/{}/generate/pdf", self.base_url, API_VERSION)
    }

    pub fn flatten_pdf(&self) -> String {
        format!("{}/forms/flatten", self.base_url)
    }

    pub fn extract_form_data(&self) -> String {
        format!("{}/forms/extract-data", self.base_url)
    }

    pub fn watermark_pdf(&self) -> String {
        format!("{}/watermark/pdf", self.base_url)
    }

    pub fn protect_pdf(&self) -> String {
        format!("{}/protect/pdf", self.base_url)
    }

    pub fn compress_pdf(&self) -> String {
        format!("{}/compress/pdf", self.base_url)
    }

    pub fn document(&self, document_id: &str) -> String {
        self.join_segments(&[API_VERSION, "documents", document_id])
    }

    pub fn document_file(&self, document_id: &str) -> String {
        self.join_segments(&[API_VERSION, "documents", document_id, "file"])
    }
}

/// True when the key targets the sandbox environment.
pub fn is_sandbox_key(api_key: &str) -> bool {
    api_key.starts_with("test_")
}

fn domain_for_api_key<'a>(api_key: &str, config: &'a PdfGateConfig) -> Result<&'a str> {
    if api_key.starts_with("live_") {
        Ok(&config.production_api_domain)
    } else if api_key.starts_with("test_") {
        Ok(&config.sandbox_api_domain)
    } else {
        Err(ApiError::Config(
            "invalid API key format: expected a key starting with 'live_' or 'test_'".to_string(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> PdfGateConfig {
        PdfGateConfig::default().with_domains("https://prod.example/", "https://sandbox.example")
    }

    #[test]
    fn test_live_key_selects_production() {
        let urls = UrlBuilder::new("live_abc", &config()).unwrap();
        assert_eq!(urls.base_url(), "https://prod.example");
        assert_eq!(urls.generate_pdf(), "https://prod.example/v1/generate/pdf");
    }

    #[test]
    fn test_test_key_selects_sandbox() {
        let urls = UrlBuilder::new("test_abc", &config()).unwrap();
        assert_eq!(urls.base_url(), "https://sandbox.example");
        assert_eq!(urls.flatten_pdf(), "https://sandbox.example/forms/flatten");
    }

    #[test]
    fn test_unknown_prefix_is_rejected() {
        assert!(UrlBuilder::new("sk_abc", &config()).is_err());
        assert!(UrlBuilder::new("", &config()).is_err());
    }

    #[test]
    fn test_document_endpoints() {
        let urls = UrlBuilder::new("test_abc", &config()).unwrap();
        assert_eq!(
            urls.document("doc_1"),
            "https://sandbox.example/v1/documents/doc_1"
        );
        assert_eq!(
            urls.document_file("doc_1"),
            "https://sandbox.example/v1/documents/doc_1/file"
        );
        assert_eq!(
            urls.extract_form_data(),
            "https://sandbox.example/forms/extract-data"
        );
        assert_eq!(urls.watermark_pdf(), "https://sandbox.example/watermark/pdf");
        assert_eq!(urls.protect_pdf(), "https://sandbox.example/protect/pdf");
        assert_eq!(urls.compress_pdf(), "https://sandbox.example/compress/pdf");
    }

    #[test]
    fn test_document_id_is_percent_encoded() {
        let urls = UrlBuilder::new("test_abc", &config()).unwrap();
        // Reserved characters must not break or redirect the path
        assert_eq!(
            urls.document("a/b c?d"),
            "https://sandbox.example/v1/documents/a%2Fb%20c%3Fd"
        );
        assert_eq!(
            urls.document_file("../etc"),
            "https://sandbox.example/v1/documents/..%2Fetc/file"
        );
    }

    #[test]
    fn test_malformed_domain_is_rejected() {
        let config = PdfGateConfig::default().with_domains("not a url", "https://ok.example");
        assert!(UrlBuilder::new("live_abc", &config).is_err());
    }

    #[test]
    fn test_sandbox_detection() {
        assert!(is_sandbox_key("test_123"));
        assert!(!is_sandbox_key("live_123"));
    }
}
