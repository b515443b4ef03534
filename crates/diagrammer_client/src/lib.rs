//! Chat-completion client for Diagrammer.
//!
//! [`CompletionClient`] is the seam the retry orchestrator drives. It performs
//! exactly one outbound call per invocation and never retries internally.
//! [`ChatCompletionClient`] implements it against an OpenAI-compatible
//! endpoint (`{model, messages, temperature, max_tokens}` in,
//! `{choices: [{message: {content}}]}` out).

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod client;
mod config;
#[cfg(feature = "mock")]
mod mock;
mod request;
mod response;

pub use client::{ChatCompletionClient, CompletionClient};
pub use config::{ClientConfig, DEFAULT_ENDPOINT, DEFAULT_MODEL};
#[cfg(feature = "mock")]
pub use mock::{MockBehavior, MockCompletionClient, MockResponse, RecordedCall};
pub use request::{ChatCompletionRequest, Message};
pub use response::{ChatCompletionResponse, Choice, ChoiceMessage, Usage};
