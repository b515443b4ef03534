//! Cleanup and structural extraction of raw model output.
//!
//! Everything here is pure: no I/O and no failure modes. When the extraction
//! patterns do not match, the cleaned text is wrapped as-is.
//!
//! ```
//! use diagrammer_core::ExpectedShape;
//! use diagrammer_sanitize::extract;
//!
//! let artifact = extract("```mermaid\ngraph TD\nA-->B\n```", ExpectedShape::DiagramDefinition);
//! assert_eq!(artifact.as_str(), "graph TD\nA-->B");
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extract;
mod fence;
mod options;
mod page;

pub use extract::{MERMAID_CONTAINER_CLASS, extract, has_content, wrap_in_container};
pub use fence::strip_code_fences;
pub use options::{MERMAID_SCRIPT_SRC, RenderOptions, RenderOptionsBuilder};
pub use page::{assemble_page, is_complete_document};
