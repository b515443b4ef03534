//! Scriptable completion client for tests.

use crate::CompletionClient;
use async_trait::async_trait;
use diagrammer_core::CompletionPrompt;
use diagrammer_error::{CompletionError, CompletionErrorKind};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

/// Behavior configuration for mock responses.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// Always return success with the given text
    Success(String),
    /// Always return the specified error
    Error(CompletionErrorKind),
    /// Fail N times with the error, then succeed with the text
    FailThenSucceed {
        /// Number of leading failures
        fail_count: usize,
        /// Failure returned for each of them
        error: CompletionErrorKind,
        /// Text returned afterwards
        success_text: String,
    },
    /// Return a sequence of responses (errors or success)
    Sequence(Vec<MockResponse>),
}

/// A single mock response (success or error).
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Completion text
    Success(String),
    /// Failure
    Error(CompletionErrorKind),
}

/// What the mock saw on one call.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedCall {
    /// Prompt that was sent
    pub prompt: CompletionPrompt,
    /// Timeout the caller allowed
    pub timeout: Duration,
}

/// In-memory [`CompletionClient`] with scripted outcomes.
///
/// A configured latency longer than the caller's timeout yields
/// [`CompletionErrorKind::Timeout`], like the real client.
#[derive(Debug, Clone)]
pub struct MockCompletionClient {
    behavior: MockBehavior,
    latency: Duration,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockCompletionClient {
    /// Create a mock client with custom behavior.
    pub fn new_with_behavior(behavior: MockBehavior) -> Self {
        Self {
            behavior,
            latency: Duration::ZERO,
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Create a mock client that always succeeds with the given text.
    pub fn new_success(text: impl Into<String>) -> Self {
        Self::new_with_behavior(MockBehavior::Success(text.into()))
    }

    /// Create a mock client that always fails with the given error.
    pub fn new_error(error: CompletionErrorKind) -> Self {
        Self::new_with_behavior(MockBehavior::Error(error))
    }

    /// Create a mock client that fails N times, then succeeds.
    pub fn new_fail_then_succeed(
        fail_count: usize,
        error: CompletionErrorKind,
        success_text: impl Into<String>,
    ) -> Self {
        Self::new_with_behavior(MockBehavior::FailThenSucceed {
            fail_count,
            error,
            success_text: success_text.into(),
        })
    }

    /// Create a mock client with a sequence of responses.
    pub fn new_sequence(responses: Vec<MockResponse>) -> Self {
        Self::new_with_behavior(MockBehavior::Sequence(responses))
    }

    /// Simulated network latency per call.
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }

    fn calls_guard(&self) -> MutexGuard<'_, Vec<RecordedCall>> {
        self.calls.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Get the number of times complete() was called.
    pub fn call_count(&self) -> usize {
        self.calls_guard().len()
    }

    /// Every call seen so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls_guard().clone()
    }

    /// Timeouts passed to each call, in order.
    pub fn timeouts(&self) -> Vec<Duration> {
        self.calls_guard().iter().map(|call| call.timeout).collect()
    }

    fn outcome(&self, index: usize) -> Result<String, CompletionError> {
        let response = match &self.behavior {
            MockBehavior::Success(text) => MockResponse::Success(text.clone()),
            MockBehavior::Error(kind) => MockResponse::Error(kind.clone()),
            MockBehavior::FailThenSucceed {
                fail_count,
                error,
                success_text,
            } => {
                if index < *fail_count {
                    MockResponse::Error(error.clone())
                } else {
                    MockResponse::Success(success_text.clone())
                }
            }
            MockBehavior::Sequence(responses) => match responses.get(index) {
                Some(response) => response.clone(),
                None => MockResponse::Error(CompletionErrorKind::Transport(format!(
                    "Mock sequence exhausted (call {} beyond {} responses)",
                    index + 1,
                    responses.len()
                ))),
            },
        };

        match response {
            MockResponse::Success(text) if text.trim().is_empty() => {
                Err(CompletionError::new(CompletionErrorKind::EmptyResponse))
            }
            MockResponse::Success(text) => Ok(text),
            MockResponse::Error(kind) => Err(CompletionError::new(kind)),
        }
    }
}

#[async_trait]
impl CompletionClient for MockCompletionClient {
    async fn complete(
        &self,
        prompt: &CompletionPrompt,
        timeout: Duration,
    ) -> Result<String, CompletionError> {
        let index = {
            let mut calls = self.calls_guard();
            calls.push(RecordedCall {
                prompt: prompt.clone(),
                timeout,
            });
            calls.len() - 1
        };

        if self.latency > timeout {
            tokio::time::sleep(timeout).await;
            return Err(CompletionError::new(CompletionErrorKind::Timeout(
                timeout.as_millis() as u64,
            )));
        }
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        self.outcome(index)
    }

    fn model_name(&self) -> &str {
        "mock-completion"
    }
}
