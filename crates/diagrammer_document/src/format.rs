//! Supported document formats.

use diagrammer_error::{DocumentError, DocumentErrorKind};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Formats the intake recognizes.
///
/// # Examples
///
/// ```
/// use diagrammer_document::DocumentFormat;
///
/// let format = DocumentFormat::from_content_type("text/markdown; charset=utf-8").unwrap();
/// assert_eq!(format, DocumentFormat::Markdown);
/// assert_eq!(DocumentFormat::from_content_type("application/pdf").unwrap(), DocumentFormat::Pdf);
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum DocumentFormat {
    /// Plain UTF-8 text
    #[default]
    #[serde(alias = "txt", alias = "plain")]
    #[strum(to_string = "text", serialize = "txt", serialize = "plain")]
    Text,
    /// CommonMark-style Markdown
    #[serde(alias = "md")]
    #[strum(to_string = "markdown", serialize = "md")]
    Markdown,
    /// Portable Document Format, read from its text layer
    Pdf,
    /// Office Open XML word processing document
    Docx,
}

impl DocumentFormat {
    /// Detect the format from an HTTP `Content-Type` value.
    ///
    /// Parameters such as `charset` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentErrorKind::UnsupportedFormat`] for unknown media types.
    #[track_caller]
    pub fn from_content_type(content_type: &str) -> Result<Self, DocumentError> {
        let essence = content_type
            .split(';')
            .next()
            .unwrap_or_default()
            .trim()
            .to_ascii_lowercase();
        match essence.as_str() {
            "text/plain" => Ok(DocumentFormat::Text),
            "text/markdown" | "text/x-markdown" => Ok(DocumentFormat::Markdown),
            "application/pdf" => Ok(DocumentFormat::Pdf),
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document" => {
                Ok(DocumentFormat::Docx)
            }
            _ => Err(DocumentError::new(DocumentErrorKind::UnsupportedFormat(
                essence,
            ))),
        }
    }

    /// Detect the format from a file extension.
    ///
    /// # Errors
    ///
    /// Returns [`DocumentErrorKind::UnsupportedFormat`] when the extension is
    /// missing or unknown.
    #[track_caller]
    pub fn from_path(path: &Path) -> Result<Self, DocumentError> {
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        match extension.as_str() {
            "txt" | "text" => Ok(DocumentFormat::Text),
            "md" | "markdown" => Ok(DocumentFormat::Markdown),
            "pdf" => Ok(DocumentFormat::Pdf),
            "docx" => Ok(DocumentFormat::Docx),
            _ => Err(DocumentError::new(DocumentErrorKind::UnsupportedFormat(
                path.display().to_string(),
            ))),
        }
    }
}
