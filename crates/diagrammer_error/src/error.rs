//! Top-level error wrapper types.

use crate::{
    CompletionError, CompletionErrorKind, ConfigError, DocumentError, DocumentErrorKind,
    RequestError, RetryError, RetryErrorKind, ServerError, TemplateError,
};

/// Every failure the Diagrammer crates can surface.
///
/// # Examples
///
/// ```
/// use diagrammer_error::{ConfigError, DiagrammerError};
///
/// let err: DiagrammerError = ConfigError::new("missing endpoint").into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum DiagrammerErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Prompt template error
    #[from(TemplateError)]
    Template(TemplateError),
    /// Single completion call failed outside the retry loop
    #[from(CompletionError)]
    Completion(CompletionError),
    /// Retry loop gave up
    #[from(RetryError)]
    Retry(RetryError),
    /// Document intake error
    #[from(DocumentError)]
    Document(DocumentError),
    /// Invalid inbound request
    #[from(RequestError)]
    Request(RequestError),
    /// HTTP listener failure
    #[from(ServerError)]
    Server(ServerError),
}

/// Diagrammer error with kind discrimination.
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Diagrammer Error: {}", _0)]
pub struct DiagrammerError(Box<DiagrammerErrorKind>);

impl DiagrammerError {
    /// Create a new error from a kind.
    pub fn new(kind: DiagrammerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &DiagrammerErrorKind {
        &self.0
    }

    /// Message that is safe to hand back to an API caller.
    ///
    /// Upstream bodies, file locations and credentials stay out of it.
    ///
    /// ```
    /// use diagrammer_error::{
    ///     CompletionError, CompletionErrorKind, DiagrammerError, RetryError, RetryErrorKind,
    /// };
    ///
    /// let last = CompletionError::new(CompletionErrorKind::Upstream {
    ///     status_code: 500,
    ///     body: "internal stack trace".into(),
    /// });
    /// let err: DiagrammerError =
    ///     RetryError::new(RetryErrorKind::Exhausted { attempts: 3, last }).into();
    /// assert!(!err.public_message().contains("stack trace"));
    /// ```
    pub fn public_message(&self) -> String {
        match self.kind() {
            DiagrammerErrorKind::Config(_) => "The service is not configured correctly".to_string(),
            DiagrammerErrorKind::Server(_) => "Internal server error".to_string(),
            DiagrammerErrorKind::Template(e) => e.kind.to_string(),
            DiagrammerErrorKind::Request(e) => e.kind.to_string(),
            DiagrammerErrorKind::Document(e) => match &e.kind {
                DocumentErrorKind::InvalidEncoding(_) => "Document is not valid UTF-8".to_string(),
                DocumentErrorKind::Unreadable { format, .. } => {
                    format!("Could not read {} document", format)
                }
                other => other.to_string(),
            },
            DiagrammerErrorKind::Completion(e) => completion_message(&e.kind),
            DiagrammerErrorKind::Retry(e) => match &e.kind {
                RetryErrorKind::DeadlineExceeded(_) => {
                    "Diagram generation took too long, please try again".to_string()
                }
                RetryErrorKind::Exhausted { last, .. } | RetryErrorKind::Permanent { error: last, .. } => {
                    completion_message(&last.kind)
                }
            },
        }
    }
}

fn completion_message(kind: &CompletionErrorKind) -> String {
    match kind {
        CompletionErrorKind::MissingCredential => {
            "The service is not configured correctly".to_string()
        }
        CompletionErrorKind::Upstream { status_code, .. } => format!(
            "The diagram model is unavailable (upstream status {}), please try again later",
            status_code
        ),
        _ => "The diagram model is unavailable, please try again later".to_string(),
    }
}

// Generic From implementation for any type that converts to DiagrammerErrorKind
impl<T> From<T> for DiagrammerError
where
    T: Into<DiagrammerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Diagrammer operations.
pub type DiagrammerResult<T> = std::result::Result<T, DiagrammerError>;
