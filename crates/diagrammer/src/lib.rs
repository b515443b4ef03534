//! Diagrammer - Mermaid diagrams from natural-language descriptions
//!
//! Diagrammer turns a short description (or a whole document) into a
//! self-contained HTML page that renders a Mermaid diagram. A chat-completion
//! model writes the diagram; Diagrammer picks the prompt, bounds the call with
//! retries and timeouts, cleans up whatever the model returned, and wraps it
//! into a page.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use diagrammer::{ChatCompletionClient, DiagramService, DiagrammerConfig, GenerationRequest};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = DiagrammerConfig::load(None)?;
//!     let client = ChatCompletionClient::new(config.upstream.clone());
//!     let service = DiagramService::from_config(client, &config)?;
//!
//!     let request = GenerationRequest::parse(Some("sequence"), "User signs in with OAuth")?;
//!     let html = service.generate_diagram(&request).await?;
//!     println!("{}", html);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! - `diagrammer_error` - Error types
//! - `diagrammer_core` - Diagram kinds, requests, prompts and artifacts
//! - `diagrammer_prompts` - Prompt templates per diagram kind
//! - `diagrammer_client` - Chat-completion client
//! - `diagrammer_retry` - Bounded retries with growing timeouts
//! - `diagrammer_sanitize` - Output cleanup and page assembly
//! - `diagrammer_document` - Document decoding and normalization
//! - `diagrammer_service` - The generation pipeline and configuration
//! - `diagrammer_server` - HTTP API
//!
//! This crate re-exports everything for convenience.

pub use diagrammer_client::*;
pub use diagrammer_core::*;
pub use diagrammer_document::*;
pub use diagrammer_error::*;
pub use diagrammer_prompts::*;
pub use diagrammer_retry::*;
pub use diagrammer_sanitize::*;
pub use diagrammer_server::*;
pub use diagrammer_service::*;
