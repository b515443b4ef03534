//! Inbound request validation errors.

/// Request-shape error conditions. Never retried.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum RequestErrorKind {
    /// Description is missing or blank
    #[display("Description must not be empty")]
    EmptyDescription,
    /// Diagram type string does not name a known kind
    #[display("Unknown diagram type: {}", _0)]
    UnknownKind(String),
}

/// Request error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Request Error: {} at line {} in {}", kind, line, file)]
pub struct RequestError {
    /// The kind of error that occurred
    pub kind: RequestErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl RequestError {
    /// Create a new RequestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: RequestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
