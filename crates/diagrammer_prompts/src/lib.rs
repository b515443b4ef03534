//! Prompt template registry.
//!
//! Maps each [`DiagramKind`](diagrammer_core::DiagramKind) to an instruction
//! template with a single `{description}` placeholder. Templates are data:
//! swapping one never touches the orchestration code.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod registry;
mod template;
pub mod templates;

pub use registry::PromptRegistry;
pub use template::{DESCRIPTION_PLACEHOLDER, PromptTemplate};
