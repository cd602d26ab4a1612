//! Document Export Port - Output formats and binary encoding.
//!
//! Renderers produce a markup string or an in-memory paginated document.
//! This port turns the paginated form into bytes and describes the exported
//! "blob": content, MIME type and download filename.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::contract::contract_filename;
use crate::domain::layout::PaginatedDocument;

/// Port for serialising a paginated document to a binary format.
///
/// # Contract
///
/// Implementations must:
/// - Emit every page in order with its header, body and footer
/// - Embed every image the document references
/// - Be deterministic for identical documents
///
/// # Usage
///
/// ```rust,ignore
/// let encoder: &dyn PaginatedDocumentEncoder = get_encoder();
/// let pdf_bytes = encoder.encode(&document)?;
/// ```
pub trait PaginatedDocumentEncoder: Send + Sync {
    /// Format produced by this encoder.
    fn format(&self) -> ExportFormat;

    /// Encodes the document.
    ///
    /// # Errors
    ///
    /// Returns `ExportError` if serialisation fails.
    fn encode(&self, document: &PaginatedDocument) -> Result<Vec<u8>, ExportError>;
}

/// Export formats supported for contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Standalone HTML document.
    Html,
    /// Paginated PDF document.
    #[default]
    Pdf,
}

impl ExportFormat {
    /// Get the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "application/pdf",
            ExportFormat::Html => "text/html; charset=utf-8",
        }
    }

    /// Get the file extension for this format.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Pdf => "pdf",
            ExportFormat::Html => "html",
        }
    }
}

impl std::fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ExportFormat::Pdf => write!(f, "pdf"),
            ExportFormat::Html => write!(f, "html"),
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = ExportError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pdf" => Ok(ExportFormat::Pdf),
            "html" | "htm" => Ok(ExportFormat::Html),
            _ => Err(ExportError::UnsupportedFormat(s.to_string())),
        }
    }
}

/// Exported document with content and metadata.
#[derive(Debug, Clone)]
pub struct ExportedDocument {
    /// The exported content as bytes.
    pub content: Vec<u8>,
    /// The MIME content type.
    pub content_type: String,
    /// Suggested filename for download.
    pub filename: String,
    /// The format that was used.
    pub format: ExportFormat,
}

impl ExportedDocument {
    /// Create an exported contract named after its type, counter-party and date.
    pub fn for_contract(
        content: Vec<u8>,
        format: ExportFormat,
        template_type: &str,
        counter_party_name: Option<&str>,
        date: NaiveDate,
    ) -> Self {
        Self {
            content,
            content_type: format.content_type().to_string(),
            filename: contract_filename(
                template_type,
                counter_party_name,
                date,
                format.extension(),
            ),
            format,
        }
    }

    /// Content size in bytes.
    pub fn size(&self) -> usize {
        self.content.len()
    }
}

/// Errors that can occur during document export.
#[derive(Debug, Clone, Error)]
pub enum ExportError {
    /// Unsupported export format requested.
    #[error("Unsupported export format: {0}")]
    UnsupportedFormat(String),

    /// Serialisation to PDF failed.
    #[error("PDF encoding failed: {0}")]
    PdfEncodingFailed(String),

    /// Document references an image it does not carry.
    #[error("Missing image {0}")]
    MissingImage(usize),

    /// I/O error during export.
    #[error("I/O error during export: {0}")]
    IoError(String),
}

impl ExportError {
    /// Create a PDF encoding error.
    pub fn pdf_failed(reason: impl Into<String>) -> Self {
        Self::PdfEncodingFailed(reason.into())
    }

    /// Create an I/O error.
    pub fn io_error(reason: impl Into<String>) -> Self {
        Self::IoError(reason.into())
    }
}

// ════════════════════════════════════════════════════════════════════════════════
// Tests
// ════════════════════════════════════════════════════════════════════════════════

#[cfg(test)]
mod tests {
    use super::*;

    // ───────────────────────────────────────────────────────────────
    // ExportFormat tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn export_format_content_types_are_correct() {
        assert_eq!(ExportFormat::Pdf.content_type(), "application/pdf");
        assert_eq!(ExportFormat::Html.content_type(), "text/html; charset=utf-8");
    }

    #[test]
    fn export_format_parses_from_string() {
        assert_eq!("pdf".parse::<ExportFormat>().unwrap(), ExportFormat::Pdf);
        assert_eq!("HTML".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
        assert_eq!("htm".parse::<ExportFormat>().unwrap(), ExportFormat::Html);
    }

    #[test]
    fn export_format_parse_rejects_unknown_format() {
        let result = "docx".parse::<ExportFormat>();
        assert!(matches!(result, Err(ExportError::UnsupportedFormat(_))));
    }

    // ───────────────────────────────────────────────────────────────
    // ExportedDocument tests
    // ───────────────────────────────────────────────────────────────

    #[test]
    fn exported_contract_uses_download_filename() {
        let doc = ExportedDocument::for_contract(
            b"%PDF-1.5".to_vec(),
            ExportFormat::Pdf,
            "shows",
            Some("João Da Silva"),
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        assert_eq!(doc.filename, "contrato_shows_joão_da_silva_2024-05-01.pdf");
        assert_eq!(doc.content_type, "application/pdf");
        assert_eq!(doc.size(), 8);
    }

    #[test]
    fn exported_html_uses_html_extension() {
        let doc = ExportedDocument::for_contract(
            b"<html></html>".to_vec(),
            ExportFormat::Html,
            "shows",
            None,
            NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
        );
        assert_eq!(doc.filename, "contrato_shows_sem_nome_2024-05-01.html");
    }
}
