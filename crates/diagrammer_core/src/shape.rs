//! What the caller expects to get back from a completion.

use serde::{Deserialize, Serialize};

/// Target shape for response sanitization.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "snake_case")]
pub enum ExpectedShape {
    /// Bare diagram definition; only code fences are stripped
    #[display("diagram_definition")]
    DiagramDefinition,
    /// Only the diagram container snippet, extracted from whatever came back
    #[display("embedded_markup_block")]
    EmbeddedMarkupBlock,
    /// A complete styled page; extraction is skipped
    #[display("full_document")]
    FullDocument,
    /// Free text such as a document analysis
    #[display("plain_text")]
    PlainText,
}
