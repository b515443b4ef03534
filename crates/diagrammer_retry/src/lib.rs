//! Retry/backoff orchestration around a [`CompletionClient`](diagrammer_client::CompletionClient).
//!
//! The [`Orchestrator`] runs attempts strictly in sequence. Each attempt gets a
//! timeout that grows by a fixed multiplier up to a ceiling, and a configurable
//! delay separates consecutive attempts. Dropping the returned future abandons
//! the in-flight attempt and any pending delay.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod orchestrator;
mod policy;

pub use orchestrator::Orchestrator;
pub use policy::{DelayPolicy, RetryPolicy, RetryPolicyBuilder};
