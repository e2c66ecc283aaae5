//! PDF text extraction
//!
//! Text is pulled page by page in page-number order, with a newline after
//! every page.

use std::path::Path;

use lopdf::Document;
use tracing::debug;

use crate::{Error, Result};

/// Extract the full text of a PDF file
///
/// The file is read into memory and closed before parsing starts.
pub fn extract_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)?;
    debug!(path = %path.display(), bytes = bytes.len(), "Source document read");
    extract_text_from_bytes(&bytes)
}

/// Extract the full text of an in-memory PDF
pub fn extract_text_from_bytes(bytes: &[u8]) -> Result<String> {
    let doc = Document::load_mem(bytes).map_err(|e| Error::Pdf(e.to_string()))?;

    let pages = doc.get_pages();
    let mut text = String::new();
    for page_num in pages.keys() {
        let content = doc
            .extract_text(&[*page_num])
            .map_err(|e| Error::Pdf(format!("page {}: {}", page_num, e)))?;
        text.push_str(&content);
        text.push('\n');
    }

    debug!(pages = pages.len(), chars = text.chars().count(), "Text extracted");
    Ok(text)
}
