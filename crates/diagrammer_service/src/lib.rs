//! The generation pipeline and its configuration.
//!
//! [`DiagramService`] composes the prompt registry, the retry orchestrator and
//! the sanitizer. Every variant (typed diagram, architecture page, document
//! analysis, free-form HTML page) runs through the same path and differs only
//! in its [`GenerationProfile`].

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod profile;
mod service;

pub use config::{
    DiagrammerConfig, DocumentConfig, ENV_PREFIX, LEGACY_API_KEY_VAR, LoggingConfig,
    RenderConfig, ServerConfig, TemplateOverrides,
};
pub use profile::{GenerationProfile, GenerationProfileBuilder, PromptCatalog};
pub use service::{DiagramService, DocumentDiagram};
