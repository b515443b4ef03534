use crate::{ChatCompletionRequest, ChatCompletionResponse, ClientConfig};
use async_trait::async_trait;
use diagrammer_core::CompletionPrompt;
use diagrammer_error::{CompletionError, CompletionErrorKind};
use std::sync::Arc;
use std::time::Duration;
use tracing::instrument;

/// One outbound completion call.
///
/// Implementations must not retry internally; bounded retries belong to the
/// orchestrator driving this trait.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Send the prompt and return the raw completion text.
    ///
    /// `timeout` bounds this single call.
    async fn complete(
        &self,
        prompt: &CompletionPrompt,
        timeout: Duration,
    ) -> Result<String, CompletionError>;

    /// Model identifier (e.g., "deepseek-chat").
    fn model_name(&self) -> &str;
}

#[async_trait]
impl<T> CompletionClient for Arc<T>
where
    T: CompletionClient + ?Sized,
{
    async fn complete(
        &self,
        prompt: &CompletionPrompt,
        timeout: Duration,
    ) -> Result<String, CompletionError> {
        (**self).complete(prompt, timeout).await
    }

    fn model_name(&self) -> &str {
        (**self).model_name()
    }
}

/// Client for an OpenAI-compatible chat-completion endpoint
#[derive(Debug, Clone)]
pub struct ChatCompletionClient {
    config: ClientConfig,
    client: reqwest::Client,
}

impl ChatCompletionClient {
    /// Create a new completion client
    #[instrument(skip(config), fields(endpoint = %config.endpoint(), model = %config.model()))]
    pub fn new(config: ClientConfig) -> Self {
        tracing::debug!("Creating chat completion client");
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    /// Get the client configuration
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }
}

fn transport_error(e: &reqwest::Error, timeout: Duration) -> CompletionError {
    if e.is_timeout() {
        CompletionError::new(CompletionErrorKind::Timeout(timeout.as_millis() as u64))
    } else {
        CompletionError::new(CompletionErrorKind::Transport(e.to_string()))
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionClient {
    #[instrument(
        skip(self, prompt),
        fields(model = %self.config.model(), timeout_ms = timeout.as_millis() as u64)
    )]
    async fn complete(
        &self,
        prompt: &CompletionPrompt,
        timeout: Duration,
    ) -> Result<String, CompletionError> {
        let api_key = self.config.credential().ok_or_else(|| {
            tracing::error!("No API key configured for completion endpoint");
            CompletionError::new(CompletionErrorKind::MissingCredential)
        })?;

        let request = ChatCompletionRequest::from_prompt(self.config.model().clone(), prompt);
        tracing::debug!(endpoint = %self.config.endpoint(), "Sending chat completion request");

        let response = self
            .client
            .post(self.config.endpoint())
            .bearer_auth(api_key.expose())
            .json(&request)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| {
                tracing::warn!(error = %e, "Request failed");
                transport_error(&e, timeout)
            })?;

        let status = response.status();
        tracing::debug!(status = status.as_u16(), "Upstream responded");

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), body = %body, "Upstream returned error");
            return Err(CompletionError::new(CompletionErrorKind::Upstream {
                status_code: status.as_u16(),
                body,
            }));
        }

        let parsed: ChatCompletionResponse = response.json().await.map_err(|e| {
            tracing::warn!(error = %e, "Failed to parse response");
            if e.is_timeout() {
                transport_error(&e, timeout)
            } else {
                CompletionError::new(CompletionErrorKind::Deserialization(e.to_string()))
            }
        })?;

        match parsed.first_content() {
            Some(text) if !text.trim().is_empty() => {
                tracing::debug!(chars = text.len(), "Chat completion successful");
                Ok(text.to_string())
            }
            _ => {
                tracing::warn!("Upstream returned no completion text");
                Err(CompletionError::new(CompletionErrorKind::EmptyResponse))
            }
        }
    }

    fn model_name(&self) -> &str {
        self.config.model()
    }
}
