//! # PDFGate API
//!
//! HTTP client for the PDFGate document API.
//! This crate provides a high-level interface for generating, transforming
//! and retrieving PDF documents through the remote service.

pub mod client;
pub mod config;
pub mod errors;
pub mod sdk;
pub mod urls;

// Re-export common types for convenience
pub use client::{PdfGateClient, API_KEY_ENV};
pub use config::PdfGateConfig;
pub use errors::{ApiError, HttpError, Result};
pub use sdk::PdfGate;
pub use urls::{is_sandbox_key, UrlBuilder};

// Re-export core types that API consumers will need
pub use pdfgate_core::{
    CompressPdfParams, Document, DocumentSource, DocumentStatus, DocumentType,
    EncryptionAlgorithm, ExtractFormDataParams, FileParam, FlattenPdfParams, GeneratePdfParams,
    GetDocumentParams, GetFileParams, PageMargin, PageSize, ProtectPdfParams, WatermarkPdfParams,
    WatermarkType,
};
