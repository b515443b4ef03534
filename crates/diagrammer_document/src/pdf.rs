//! Text layer extraction from PDF files.

use diagrammer_error::{DocumentError, DocumentErrorKind};
use lopdf::Document;
use tracing::{debug, instrument};

fn unreadable(reason: impl ToString) -> DocumentError {
    DocumentError::new(DocumentErrorKind::Unreadable {
        format: "pdf".to_string(),
        reason: reason.to_string(),
    })
}

/// Extract the text of every page, in page order.
///
/// Scanned PDFs without a text layer come back as blank text, which the
/// preprocessor reports as empty.
///
/// # Errors
///
/// Returns [`DocumentErrorKind::Unreadable`] for malformed or encrypted files.
#[instrument(skip(bytes), fields(bytes = bytes.len()))]
pub fn pdf_to_text(bytes: &[u8]) -> Result<String, DocumentError> {
    let document = Document::load_mem(bytes).map_err(unreadable)?;
    if document.is_encrypted() {
        return Err(unreadable("document is encrypted"));
    }

    let pages: Vec<u32> = document.get_pages().keys().copied().collect();
    if pages.is_empty() {
        return Err(unreadable("document has no pages"));
    }
    let text = document.extract_text(&pages).map_err(unreadable)?;
    debug!(pages = pages.len(), chars = text.len(), "Extracted PDF text");
    Ok(text)
}
