//! Sequential attempt loop with adaptive timeouts.

use crate::RetryPolicy;
use diagrammer_client::CompletionClient;
use diagrammer_core::CompletionPrompt;
use diagrammer_error::{CompletionError, ConfigError, RetryError, RetryErrorKind, RetryableError};
use std::fmt;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;
use tokio_retry2::{Retry, RetryError as AttemptDirective};
use tracing::{debug, error, info, instrument, warn};

/// One outbound call inside the loop. Lives only for that attempt.
#[derive(Debug, Clone, Copy)]
struct CompletionAttempt {
    index: u32,
    max_attempts: u32,
    timeout: Duration,
}

impl fmt::Display for CompletionAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "attempt {}/{} (timeout {} ms)",
            self.index,
            self.max_attempts,
            self.timeout.as_millis()
        )
    }
}

/// Drives a [`CompletionClient`] until success or the attempt budget is spent.
///
/// Attempt `n + 1` never starts before attempt `n` has an outcome, so a
/// request has at most one outstanding upstream call.
///
/// # Example
///
/// ```rust,ignore
/// let orchestrator = Orchestrator::new(client, RetryPolicy::default())?;
/// let text = orchestrator.run(&prompt).await?;
/// ```
#[derive(Debug, Clone)]
pub struct Orchestrator<C> {
    client: C,
    policy: RetryPolicy,
}

impl<C: CompletionClient> Orchestrator<C> {
    /// Wrap a client with a retry policy.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the policy fails [`RetryPolicy::validate`].
    pub fn new(client: C, policy: RetryPolicy) -> Result<Self, ConfigError> {
        policy.validate()?;
        Ok(Self { client, policy })
    }

    /// The wrapped client.
    pub fn client(&self) -> &C {
        &self.client
    }

    /// The active policy.
    pub fn policy(&self) -> &RetryPolicy {
        &self.policy
    }

    /// Run the attempt loop for one prompt and return the raw completion text.
    ///
    /// # Errors
    ///
    /// See [`Orchestrator::run_with`].
    pub async fn run(&self, prompt: &CompletionPrompt) -> Result<String, RetryError> {
        self.run_with(prompt, |text| Ok(text.to_string())).await
    }

    /// Run the attempt loop, passing every completion through `accept`.
    ///
    /// A rejection from `accept` counts as a failed attempt and is retried
    /// under the same rules as a client failure.
    ///
    /// # Errors
    ///
    /// - [`RetryErrorKind::Exhausted`] with the last failure once every attempt failed
    /// - [`RetryErrorKind::Permanent`] for failures that are never retried
    /// - [`RetryErrorKind::DeadlineExceeded`] when the overall deadline elapses
    #[instrument(
        skip(self, prompt, accept),
        fields(model = %self.client.model_name(), max_attempts = *self.policy.max_attempts())
    )]
    pub async fn run_with<T, F>(&self, prompt: &CompletionPrompt, accept: F) -> Result<T, RetryError>
    where
        T: Send,
        F: Fn(&str) -> Result<T, CompletionError> + Sync,
    {
        match self.policy.overall_deadline() {
            Some(deadline) => {
                match tokio::time::timeout(deadline, self.attempt_loop(prompt, &accept)).await {
                    Ok(outcome) => outcome,
                    Err(_) => {
                        warn!(deadline_ms = deadline.as_millis() as u64, "Generation deadline exceeded");
                        Err(RetryError::new(RetryErrorKind::DeadlineExceeded(
                            deadline.as_millis() as u64,
                        )))
                    }
                }
            }
            None => self.attempt_loop(prompt, &accept).await,
        }
    }

    async fn attempt_loop<T, F>(&self, prompt: &CompletionPrompt, accept: &F) -> Result<T, RetryError>
    where
        T: Send,
        F: Fn(&str) -> Result<T, CompletionError> + Sync,
    {
        let max_attempts = *self.policy.max_attempts();
        let counter = AtomicU32::new(0);

        let outcome = Retry::spawn(self.policy.delays(), || {
            let index = counter.fetch_add(1, Ordering::SeqCst) + 1;
            let attempt = CompletionAttempt {
                index,
                max_attempts,
                timeout: self.policy.timeout_for(index),
            };
            async move {
                debug!(%attempt, "Sending completion request");
                let outcome = self
                    .client
                    .complete(prompt, attempt.timeout)
                    .await
                    .and_then(|text| accept(&text));
                match outcome {
                    Ok(value) => {
                        info!(%attempt, "Completion accepted");
                        Ok(value)
                    }
                    Err(e) if e.is_retryable() => {
                        warn!(%attempt, reason = e.kind.label(), error = %e, "Completion failed");
                        Err(AttemptDirective::Transient {
                            err: e,
                            retry_after: None,
                        })
                    }
                    Err(e) => {
                        error!(%attempt, reason = e.kind.label(), error = %e, "Completion failed permanently");
                        Err(AttemptDirective::Permanent(e))
                    }
                }
            }
        })
        .await;

        let attempts = counter.load(Ordering::SeqCst);
        outcome.map_err(|last| {
            if last.is_retryable() {
                error!(attempts, "Max retry attempts reached, giving up");
                RetryError::new(RetryErrorKind::Exhausted { attempts, last })
            } else {
                RetryError::new(RetryErrorKind::Permanent {
                    attempt: attempts,
                    error: last,
                })
            }
        })
    }
}
