//! Document intake: format detection and conversion to plain text.
//!
//! Plain text and Markdown are decoded as UTF-8 and normalized. PDF files are
//! read through their text layer and DOCX files through the paragraphs of
//! their main body part.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod docx;
mod format;
mod markdown;
mod pdf;
mod preprocessor;

pub use docx::docx_to_text;
pub use format::DocumentFormat;
pub use markdown::markdown_to_text;
pub use pdf::pdf_to_text;
pub use preprocessor::{DEFAULT_MAX_CHARS, DocumentPreprocessor, PreparedDocument};
