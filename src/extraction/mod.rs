pub mod docx;
pub mod pdf;
pub mod plain;

use crate::error::Result;
use crate::models::{Document, DocumentFormat};

pub use docx::extract_docx_text;
pub use pdf::extract_pdf_text;
pub use plain::extract_plain_text;

/// Converts a document to plain text according to its declared format.
///
/// Unsupported formats produce empty text rather than an error.
pub fn extract_text(document: &Document) -> Result<String> {
    let text = match document.format {
        DocumentFormat::Pdf => extract_pdf_text(&document.name, &document.bytes)?,
        DocumentFormat::Docx => extract_docx_text(&document.name, &document.bytes)?,
        DocumentFormat::PlainText => extract_plain_text(&document.bytes),
        DocumentFormat::Unsupported => {
            tracing::debug!("Skipping unsupported document format: {}", document.name);
            String::new()
        }
    };

    tracing::debug!(
        "Extracted {} characters of {} text from {}",
        text.chars().count(),
        document.format,
        document.name
    );

    Ok(text)
}
