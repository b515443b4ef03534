//! Byte-level intake.

use crate::{DocumentFormat, docx_to_text, markdown_to_text, pdf_to_text};
use derive_getters::Getters;
use diagrammer_error::{DocumentError, DocumentErrorKind};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Default cap on characters handed to the analysis prompt.
pub const DEFAULT_MAX_CHARS: usize = 20_000;

/// Normalized document text ready for analysis.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct PreparedDocument {
    /// Format the text came from
    format: DocumentFormat,
    /// Normalized text
    text: String,
    /// Whether the text was cut at the character limit
    truncated: bool,
}

/// Turns raw bytes into [`PreparedDocument`]s.
///
/// # Examples
///
/// ```
/// use diagrammer_document::{DocumentFormat, DocumentPreprocessor};
///
/// let doc = DocumentPreprocessor::default()
///     .prepare(b"# API\nServes mobile clients", DocumentFormat::Markdown)
///     .unwrap();
/// assert_eq!(doc.text(), "API\nServes mobile clients");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters)]
pub struct DocumentPreprocessor {
    max_chars: usize,
}

impl Default for DocumentPreprocessor {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_CHARS)
    }
}

impl DocumentPreprocessor {
    /// Preprocessor that keeps at most `max_chars` characters.
    pub fn new(max_chars: usize) -> Self {
        Self { max_chars }
    }

    /// Decode or extract a document and normalize its text.
    ///
    /// # Errors
    ///
    /// - [`DocumentErrorKind::InvalidEncoding`] for text bytes that are not UTF-8
    /// - [`DocumentErrorKind::Unreadable`] for PDF or DOCX files that cannot be parsed
    /// - [`DocumentErrorKind::Empty`] when no text remains
    #[instrument(skip(self, bytes), fields(bytes = bytes.len(), %format))]
    pub fn prepare(
        &self,
        bytes: &[u8],
        format: DocumentFormat,
    ) -> Result<PreparedDocument, DocumentError> {
        let extracted = match format {
            DocumentFormat::Text | DocumentFormat::Markdown => {
                let raw = std::str::from_utf8(bytes).map_err(|e| {
                    DocumentError::new(DocumentErrorKind::InvalidEncoding(e.to_string()))
                })?;
                return self.prepare_text(raw, format);
            }
            DocumentFormat::Pdf => pdf_to_text(bytes)?,
            DocumentFormat::Docx => docx_to_text(bytes)?,
        };
        self.prepare_text(&extracted, format)
    }

    /// Normalize text that is already decoded, or extracted from a binary
    /// format.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentErrorKind::Empty`] when nothing remains.
    pub fn prepare_text(
        &self,
        raw: &str,
        format: DocumentFormat,
    ) -> Result<PreparedDocument, DocumentError> {
        let raw = raw.strip_prefix('\u{feff}').unwrap_or(raw);
        let text = match format {
            DocumentFormat::Markdown => markdown_to_text(raw),
            DocumentFormat::Text => raw.replace("\r\n", "\n").trim().to_string(),
            DocumentFormat::Pdf | DocumentFormat::Docx => tidy_extracted(raw),
        };
        if text.is_empty() {
            return Err(DocumentError::new(DocumentErrorKind::Empty));
        }

        let (text, truncated) = match text.char_indices().nth(self.max_chars) {
            Some((cut, _)) => {
                warn!(max_chars = self.max_chars, "Document truncated");
                (text[..cut].to_string(), true)
            }
            None => (text, false),
        };
        debug!(chars = text.chars().count(), truncated, "Document prepared");

        Ok(PreparedDocument {
            format,
            text,
            truncated,
        })
    }
}

/// Trim line ends and fold runs of blank lines left by layout extraction.
fn tidy_extracted(raw: &str) -> String {
    let mut text = String::with_capacity(raw.len());
    let mut previous_blank = false;
    for line in raw.lines().map(str::trim_end) {
        let blank = line.is_empty();
        if !(blank && previous_blank) {
            text.push_str(line);
            text.push('\n');
        }
        previous_blank = blank;
    }
    text.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracted_layout_is_tidied() {
        let raw = "  Cache  \r\n\n\n\nsits before   \n\nthe database\n\n";
        assert_eq!(tidy_extracted(raw), "Cache\n\nsits before\n\nthe database");
    }
}
