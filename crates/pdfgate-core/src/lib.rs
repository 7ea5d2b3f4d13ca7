//! # PDFGate Core
//!
//! Core domain types for the PDFGate document API.
//!
//! This crate contains pure data and validation logic with no I/O
//! dependencies:
//! - Document models returned by the API
//! - Request parameter types and their validation rules
//! - Error definitions
//!
//! ## Design Principles
//!
//! - **Pure Functions**: No side effects, easy to test
//! - **Dependency-Free**: No networking or persistence dependencies
//! - **Composable**: Usable from any transport layer

pub mod errors;
pub mod models;
pub mod params;

// Re-export commonly used types
pub use errors::{PdfGateError, Result};
pub use models::{guess_content_type, Document, DocumentStatus, DocumentType, FileParam};
pub use params::{
    Authentication, ClickSelectorChain, ClickSelectorChainSetup, CompressPdfParams,
    DocumentSource, EmulateMediaType, EncryptionAlgorithm, ExtractFormDataParams,
    FlattenPdfParams, GeneratePdfParams, GetDocumentParams, GetFileParams, Orientation,
    PageMargin, PageSize, ProtectPdfParams, Viewport, WatermarkPdfParams, WatermarkType,
};
