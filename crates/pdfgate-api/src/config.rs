use std::time::Duration;

/// Default production API base URL.
const DEFAULT_PRODUCTION_API_DOMAIN: &str = "https://api.pdfgate.com";
/// Default sandbox API base URL.
const DEFAULT_SANDBOX_API_DOMAIN: &str = "https://api-sandbox.pdfgate.com";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);
const DEFAULT_GENERATE_PDF_TIMEOUT: Duration = Duration::from_secs(15 * 60);
const DEFAULT_FLATTEN_PDF_TIMEOUT: Duration = Duration::from_secs(3 * 60);
const DEFAULT_COMPRESS_PDF_TIMEOUT: Duration = Duration::from_secs(3 * 60);
const DEFAULT_PROTECT_PDF_TIMEOUT: Duration = Duration::from_secs(3 * 60);

/// Client configuration: API domains and per-endpoint timeouts.
///
/// Start from [`PdfGateConfig::default`] and override with the `with_*`
/// methods. Generation gets a much longer timeout than the other
/// operations because rendering large pages can take minutes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PdfGateConfig {
    pub production_api_domain: String,
    pub sandbox_api_domain: String,
    /// Timeout applied when no endpoint-specific timeout exists.
    pub default_timeout: Duration,
    pub generate_pdf_timeout: Duration,
    pub flatten_pdf_timeout: Duration,
    pub compress_pdf_timeout: Duration,
    pub protect_pdf_timeout: Duration,
}

impl Default for PdfGateConfig {
    fn default() -> Self {
        Self {
            production_api_domain: DEFAULT_PRODUCTION_API_DOMAIN.to_string(),
            sandbox_api_domain: DEFAULT_SANDBOX_API_DOMAIN.to_string(),
            default_timeout: DEFAULT_TIMEOUT,
            generate_pdf_timeout: DEFAULT_GENERATE_PDF_TIMEOUT,
            flatten_pdf_timeout: DEFAULT_FLATTEN_PDF_TIMEOUT,
            compress_pdf_timeout: DEFAULT_COMPRESS_PDF_TIMEOUT,
            protect_pdf_timeout: DEFAULT_PROTECT_PDF_TIMEOUT,
        }
    }
}

impl PdfGateConfig {
    /// Overrides both API domains, e.g. to point at a mock server.
    pub fn with_domains(
        mut self,
        production_api_domain: impl Into<String>,
        sandbox_api_domain: impl Into<String>,
    ) -> Self {
        self.production_api_domain = production_api_domain.into();
        self.sandbox_api_domain = sandbox_api_domain.into();
        self
    }

    pub fn with_default_timeout(mut self, timeout: Duration) -> Self {
        self.default_timeout = timeout;
        self
    }

    pub fn with_generate_pdf_timeout(mut self, timeout: Duration) -> Self {
        self.generate_pdf_timeout = timeout;
        self
    }

    pub fn with_flatten_pdf_timeout(mut self, timeout: Duration) -> Self {
        self.flatten_pdf_timeout = timeout;
        self
    }

    pub fn with_compress_pdf_timeout(mut self, timeout: Duration) -> Self {
        self.compress_pdf_timeout = timeout;
        self
    }

    pub fn with_protect_pdf_timeout(mut self, timeout: Duration) -> Self {
        self.protect_pdf_timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = PdfGateConfig::default();
        assert_eq!(config.production_api_domain, "https://api.pdfgate.com");
        assert_eq!(config.sandbox_api_domain, "https://api-sandbox.pdfgate.com");
        assert_eq!(config.default_timeout, Duration::from_secs(60));
        assert_eq!(config.generate_pdf_timeout, Duration::from_secs(900));
        assert_eq!(config.flatten_pdf_timeout, Duration::from_secs(180));
    }

    #[test]
    fn test_overrides() {
        let config = PdfGateConfig::default()
            .with_domains("https://prod.example", "https://sandbox.example")
            .with_generate_pdf_timeout(Duration::from_secs(5));
        assert_eq!(config.production_api_domain, "https://prod.example");
        assert_eq!(config.sandbox_api_domain, "https://sandbox.example");
        assert_eq!(config.generate_pdf_timeout, Duration::from_secs(5));
        // Untouched fields keep their defaults
        assert_eq!(config.protect_pdf_timeout, Duration::from_secs(180));
    }
}
