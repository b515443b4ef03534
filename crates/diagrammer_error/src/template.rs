//! Prompt template errors.

/// Template registry error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum TemplateErrorKind {
    /// No template registered for the requested diagram kind
    #[display("Unsupported diagram type: {}", _0)]
    UnsupportedKind(String),
    /// Template text lacks the description placeholder
    #[display("Template for {} has no {{description}} placeholder", _0)]
    MissingPlaceholder(String),
    /// Template text contains the description placeholder more than once
    #[display("Template for {} has {} {{description}} placeholders, expected exactly one", kind, count)]
    DuplicatePlaceholder {
        /// Template key
        kind: String,
        /// Number of placeholders found
        count: usize,
    },
}

/// Template error with location tracking.
///
/// # Examples
///
/// ```
/// use diagrammer_error::{TemplateError, TemplateErrorKind};
///
/// let err = TemplateError::new(TemplateErrorKind::UnsupportedKind("gantt".into()));
/// assert!(format!("{}", err).contains("gantt"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Template Error: {} at line {} in {}", kind, line, file)]
pub struct TemplateError {
    /// The kind of error that occurred
    pub kind: TemplateErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl TemplateError {
    /// Create a new TemplateError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: TemplateErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
