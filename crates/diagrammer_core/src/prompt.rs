//! A fully rendered prompt ready for the completion endpoint.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// System instruction, user turn and sampling parameters for one call.
///
/// # Examples
///
/// ```
/// use diagrammer_core::CompletionPrompt;
///
/// let prompt = CompletionPrompt::builder()
///     .system("You are a diagram generator.")
///     .user("Draw a login flow")
///     .temperature(0.7)
///     .max_tokens(4000u32)
///     .build()
///     .unwrap();
///
/// assert_eq!(*prompt.max_tokens(), 4000);
/// ```
#[derive(
    Debug, Clone, PartialEq, Serialize, Deserialize, Getters, derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct CompletionPrompt {
    /// Role framing for the assistant
    system: String,
    /// Rendered template with the caller's description
    user: String,
    /// Sampling temperature
    temperature: f32,
    /// Token ceiling for the completion
    max_tokens: u32,
}

impl CompletionPrompt {
    /// Prompt from its four parts.
    pub fn new(
        system: impl Into<String>,
        user: impl Into<String>,
        temperature: f32,
        max_tokens: u32,
    ) -> Self {
        Self {
            system: system.into(),
            user: user.into(),
            temperature,
            max_tokens,
        }
    }

    /// Creates a new prompt builder.
    pub fn builder() -> CompletionPromptBuilder {
        CompletionPromptBuilder::default()
    }
}
