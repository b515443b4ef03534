//! Document intake errors.

/// Document preprocessing error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum DocumentErrorKind {
    /// Media type or extension the intake does not know
    #[display("Unsupported document format: {}", _0)]
    UnsupportedFormat(String),
    /// Binary container that could not be parsed or holds no readable text layer
    #[display("Could not read {} document: {}", format, reason)]
    Unreadable {
        /// Format that was being parsed
        format: String,
        /// Parser diagnostic
        reason: String,
    },
    /// Bytes are not valid UTF-8
    #[display("Document is not valid UTF-8: {}", _0)]
    InvalidEncoding(String),
    /// Nothing left after normalization
    #[display("Document contains no text")]
    Empty,
}

/// Document error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Document Error: {} at line {} in {}", kind, line, file)]
pub struct DocumentError {
    /// The kind of error that occurred
    pub kind: DocumentErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl DocumentError {
    /// Create a new DocumentError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: DocumentErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
