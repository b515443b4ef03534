//! Completion client errors and retry classification.

/// Failure conditions of a single chat-completion call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum CompletionErrorKind {
    /// No API key configured
    #[display("Upstream API key is not configured")]
    MissingCredential,
    /// Upstream answered with a non-2xx status
    #[display("Upstream returned HTTP {}: {}", status_code, body)]
    Upstream {
        /// HTTP status code
        status_code: u16,
        /// Raw response body (server-side logging only)
        body: String,
    },
    /// Network-level failure before a response arrived
    #[display("Transport failure: {}", _0)]
    Transport(String),
    /// Attempt exceeded its timeout
    #[display("Request timed out after {} ms", _0)]
    Timeout(u64),
    /// Response body was not the expected JSON shape
    #[display("Malformed response body: {}", _0)]
    Deserialization(String),
    /// Model answered with no usable text
    #[display("Upstream returned an empty completion")]
    EmptyResponse,
}

impl CompletionErrorKind {
    /// Check if this error type should be retried.
    ///
    /// Every upstream or transport failure is transient. Only configuration
    /// failures are permanent.
    pub fn is_retryable(&self) -> bool {
        !matches!(self, CompletionErrorKind::MissingCredential)
    }

    /// Short machine-readable label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            CompletionErrorKind::MissingCredential => "missing_credential",
            CompletionErrorKind::Upstream { .. } => "upstream",
            CompletionErrorKind::Transport(_) => "transport",
            CompletionErrorKind::Timeout(_) => "timeout",
            CompletionErrorKind::Deserialization(_) => "deserialization",
            CompletionErrorKind::EmptyResponse => "empty_response",
        }
    }
}

/// Completion error with source location tracking.
///
/// # Examples
///
/// ```
/// use diagrammer_error::{CompletionError, CompletionErrorKind};
///
/// let err = CompletionError::new(CompletionErrorKind::MissingCredential);
/// assert!(format!("{}", err).contains("API key"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Completion Error: {} at line {} in {}", kind, line, file)]
pub struct CompletionError {
    /// The kind of error that occurred
    pub kind: CompletionErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl CompletionError {
    /// Create a new CompletionError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: CompletionErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}

/// Trait for errors that support retry logic.
///
/// # Examples
///
/// ```
/// use diagrammer_error::{CompletionError, CompletionErrorKind, RetryableError};
///
/// let err = CompletionError::new(CompletionErrorKind::Upstream {
///     status_code: 503,
///     body: "Service unavailable".to_string(),
/// });
/// assert!(err.is_retryable());
///
/// let err = CompletionError::new(CompletionErrorKind::MissingCredential);
/// assert!(!err.is_retryable());
/// ```
pub trait RetryableError {
    /// Returns true if this error should trigger another attempt.
    fn is_retryable(&self) -> bool;
}

impl RetryableError for CompletionError {
    fn is_retryable(&self) -> bool {
        self.kind.is_retryable()
    }
}
