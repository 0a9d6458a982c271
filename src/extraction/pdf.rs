use std::panic;

use crate::error::{Error, Result};

/// Concatenates the text of every page in page order.
///
/// Pages without a text layer contribute nothing. The PDF decoder can panic
/// on malformed input, so a panic is reported as an unreadable document.
pub fn extract_pdf_text(name: &str, bytes: &[u8]) -> Result<String> {
    let pages = panic::catch_unwind(|| pdf_extract::extract_text_from_mem_by_pages(bytes))
        .map_err(|_| Error::unreadable(name, "PDF decoder aborted on malformed input"))?
        .map_err(|e| Error::unreadable(name, e))?;

    tracing::debug!("Extracted {} PDF pages from {}", pages.len(), name);

    Ok(pages.concat())
}
