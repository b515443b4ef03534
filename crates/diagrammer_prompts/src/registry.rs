//! Kind-keyed template lookup.

use crate::{PromptTemplate, templates};
use diagrammer_core::DiagramKind;
use diagrammer_error::{TemplateError, TemplateErrorKind};
use std::collections::HashMap;
use strum::IntoEnumIterator;
use tracing::{debug, instrument};

/// Maps each diagram kind to exactly one template.
///
/// Built once at startup and shared read-only between requests.
///
/// # Examples
///
/// ```
/// use diagrammer_core::DiagramKind;
/// use diagrammer_prompts::PromptRegistry;
///
/// let registry = PromptRegistry::with_defaults().unwrap();
/// let prompt = registry.render(DiagramKind::Sequence, "User logs in").unwrap();
/// assert!(prompt.contains("User logs in"));
///
/// let empty = PromptRegistry::empty();
/// assert!(empty.render(DiagramKind::Sequence, "User logs in").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PromptRegistry {
    templates: HashMap<DiagramKind, PromptTemplate>,
}

impl PromptRegistry {
    /// Registry with no templates.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Registry holding the bundled template for every kind.
    ///
    /// # Errors
    ///
    /// Fails when a bundled template does not hold exactly one placeholder.
    pub fn with_defaults() -> Result<Self, TemplateError> {
        Self::from_texts(DiagramKind::iter().map(|kind| (kind, templates::for_kind(kind))))
    }

    /// Registry built from raw template texts, validating each one.
    ///
    /// # Errors
    ///
    /// Returns the first template error; no partial registry is produced.
    pub fn from_texts<I, S>(texts: I) -> Result<Self, TemplateError>
    where
        I: IntoIterator<Item = (DiagramKind, S)>,
        S: Into<String>,
    {
        let templates = texts
            .into_iter()
            .map(|(kind, text)| Ok((kind, PromptTemplate::new(kind.to_string(), text)?)))
            .collect::<Result<_, TemplateError>>()?;
        Ok(Self { templates })
    }

    /// Register or replace the template for a kind.
    pub fn register(&mut self, kind: DiagramKind, template: PromptTemplate) -> &mut Self {
        debug!(%kind, template = template.name(), "Registering prompt template");
        self.templates.insert(kind, template);
        self
    }

    /// Register an override from raw text, validating its placeholder.
    ///
    /// # Errors
    ///
    /// Fails when the text does not hold exactly one placeholder.
    #[track_caller]
    pub fn register_text(
        &mut self,
        kind: DiagramKind,
        text: impl Into<String>,
    ) -> Result<&mut Self, TemplateError> {
        let template = PromptTemplate::new(kind.to_string(), text)?;
        Ok(self.register(kind, template))
    }

    /// Look up the template for a kind.
    ///
    /// # Errors
    ///
    /// Returns [`TemplateErrorKind::UnsupportedKind`] when nothing is registered.
    #[track_caller]
    pub fn template(&self, kind: DiagramKind) -> Result<&PromptTemplate, TemplateError> {
        self.templates
            .get(&kind)
            .ok_or_else(|| TemplateError::new(TemplateErrorKind::UnsupportedKind(kind.to_string())))
    }

    /// Render the prompt for a kind.
    #[instrument(skip(self, description), fields(description_len = description.len()))]
    pub fn render(&self, kind: DiagramKind, description: &str) -> Result<String, TemplateError> {
        Ok(self.template(kind)?.render(description))
    }

    /// Kinds that currently have a template, in declaration order.
    pub fn kinds(&self) -> Vec<DiagramKind> {
        let mut kinds: Vec<_> = self.templates.keys().copied().collect();
        kinds.sort();
        kinds
    }

    /// Whether a kind has a template.
    pub fn supports(&self, kind: DiagramKind) -> bool {
        self.templates.contains_key(&kind)
    }
}
