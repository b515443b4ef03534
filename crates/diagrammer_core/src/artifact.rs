//! Final output of a generation.

use serde::{Deserialize, Serialize};

/// The payload returned to a caller.
///
/// Built fresh per request and never cached.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", content = "content", rename_all = "snake_case")]
pub enum DiagramArtifact {
    /// Diagram definition or container snippet
    Markup(String),
    /// Complete HTML page with rendering scaffolding
    Document(String),
}

impl DiagramArtifact {
    /// Borrow the artifact text.
    pub fn as_str(&self) -> &str {
        match self {
            DiagramArtifact::Markup(s) | DiagramArtifact::Document(s) => s,
        }
    }

    /// Consume the artifact, returning its text.
    pub fn into_string(self) -> String {
        match self {
            DiagramArtifact::Markup(s) | DiagramArtifact::Document(s) => s,
        }
    }

    /// Whether this is a complete HTML page.
    pub fn is_document(&self) -> bool {
        matches!(self, DiagramArtifact::Document(_))
    }
}
