//! Core data types for the Diagrammer workspace.
//!
//! These types are shared by the prompt registry, the completion client,
//! the retry orchestrator and the sanitizer.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod artifact;
mod credentials;
mod kind;
mod prompt;
mod request;
mod shape;

pub use artifact::DiagramArtifact;
pub use credentials::ApiKey;
pub use kind::DiagramKind;
pub use prompt::{CompletionPrompt, CompletionPromptBuilder};
pub use request::GenerationRequest;
pub use shape::ExpectedShape;
