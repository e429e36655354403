//! PDF text extraction module
//!
//! Delegates parsing to pdf-extract and collapses all whitespace runs to
//! single spaces, matching the prompt format: page fragments joined by
//! spaces, pages concatenated without a separator.

use crate::error::{RegDocError, Result};
use std::path::Path;

/// Extract the concatenated visible text of a PDF file.
pub fn extract_text(path: &Path) -> Result<String> {
    if !path.exists() {
        return Err(RegDocError::FileNotFound(path.display().to_string()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| RegDocError::Extraction(format!("{}: {}", path.display(), e)))?;
    extract_text_from_bytes(&bytes).map_err(|err| match err {
        RegDocError::Extraction(msg) => {
            RegDocError::Extraction(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Extract the concatenated visible text of an in-memory PDF payload.
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String> {
    let raw = pdf_extract::extract_text_from_mem(bytes)
        .map_err(|e| RegDocError::Extraction(e.to_string()))?;
    Ok(normalize_whitespace(&raw))
}

/// Number of pages in an in-memory PDF payload.
///
/// pdf-extract re-exports the lopdf `Document`.
pub fn page_count(bytes: &[u8]) -> Result<usize> {
    let doc = pdf_extract::Document::load_mem(bytes)
        .map_err(|e| RegDocError::Extraction(e.to_string()))?;
    Ok(doc.get_pages().len())
}

/// Collapse every whitespace run (including newlines) to a single space.
fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
