//! A single parameterized instruction string.

use diagrammer_error::{TemplateError, TemplateErrorKind};
use serde::Serialize;

/// Substitution point replaced by the caller's description.
pub const DESCRIPTION_PLACEHOLDER: &str = "{description}";

/// Instruction text containing exactly one [`DESCRIPTION_PLACEHOLDER`].
///
/// # Examples
///
/// ```
/// use diagrammer_prompts::PromptTemplate;
///
/// let template = PromptTemplate::new("custom", "Draw this: {description}").unwrap();
/// assert_eq!(template.render("a cache"), "Draw this: a cache");
///
/// assert!(PromptTemplate::new("custom", "No placeholder").is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PromptTemplate {
    name: String,
    text: String,
}

impl PromptTemplate {
    /// Validate and wrap template text.
    ///
    /// # Errors
    ///
    /// Fails when the placeholder is missing or appears more than once.
    #[track_caller]
    pub fn new(name: impl Into<String>, text: impl Into<String>) -> Result<Self, TemplateError> {
        let name = name.into();
        let text = text.into();
        match text.matches(DESCRIPTION_PLACEHOLDER).count() {
            1 => Ok(Self { name, text }),
            0 => Err(TemplateError::new(TemplateErrorKind::MissingPlaceholder(name))),
            count => Err(TemplateError::new(TemplateErrorKind::DuplicatePlaceholder {
                kind: name,
                count,
            })),
        }
    }

    /// Template name used in diagnostics.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Raw template text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Insert the description verbatim. No escaping is applied.
    pub fn render(&self, description: &str) -> String {
        self.text.replacen(DESCRIPTION_PLACEHOLDER, description, 1)
    }
}
