//! Terminal failures of the retry orchestrator.

use crate::CompletionError;

/// Reasons the orchestrator gave up.
#[derive(Debug, Clone, derive_more::Display)]
pub enum RetryErrorKind {
    /// Every attempt failed; carries the last observed failure
    #[display("All {} attempts failed, last error: {}", attempts, last)]
    Exhausted {
        /// Number of attempts performed
        attempts: u32,
        /// Failure from the final attempt
        last: CompletionError,
    },
    /// A failure that must not be retried ended the loop early
    #[display("Attempt {} failed permanently: {}", attempt, error)]
    Permanent {
        /// Attempt that produced the failure
        attempt: u32,
        /// The failure
        error: CompletionError,
    },
    /// The overall request deadline elapsed
    #[display("Generation deadline of {} ms exceeded", _0)]
    DeadlineExceeded(u64),
}

/// Retry error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Retry Error: {} at line {} in {}", kind, line, file)]
pub struct RetryError {
    /// The kind of error that occurred
    pub kind: RetryErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RetryError {
    /// Create a new RetryError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RetryErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }

    /// The completion failure behind this error, if any.
    pub fn last_failure(&self) -> Option<&CompletionError> {
        match &self.kind {
            RetryErrorKind::Exhausted { last, .. } => Some(last),
            RetryErrorKind::Permanent { error, .. } => Some(error),
            RetryErrorKind::DeadlineExceeded(_) => None,
        }
    }
}
