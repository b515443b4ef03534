//! Per-variant generation parameters.

use crate::TemplateOverrides;
use derive_getters::Getters;
use diagrammer_core::{CompletionPrompt, DiagramKind, ExpectedShape};
use diagrammer_error::ConfigError;
use diagrammer_prompts::{PromptRegistry, PromptTemplate, templates};

/// System instruction, sampling parameters and output shape of one variant.
///
/// # Examples
///
/// ```
/// use diagrammer_core::ExpectedShape;
/// use diagrammer_service::GenerationProfile;
///
/// let profile = GenerationProfile::document_analysis();
/// assert_eq!(*profile.shape(), ExpectedShape::PlainText);
/// assert_eq!(*profile.max_tokens(), 2000);
/// ```
#[derive(Debug, Clone, PartialEq, Getters, derive_builder::Builder)]
#[builder(setter(into))]
pub struct GenerationProfile {
    /// Name used in logs
    name: String,
    /// System instruction
    system: String,
    /// Sampling temperature
    temperature: f32,
    /// Token ceiling
    max_tokens: u32,
    /// How the answer is sanitized
    shape: ExpectedShape,
}

impl GenerationProfile {
    /// Creates a new builder.
    pub fn builder() -> GenerationProfileBuilder {
        GenerationProfileBuilder::default()
    }

    fn preset(
        name: &str,
        system: &str,
        temperature: f32,
        max_tokens: u32,
        shape: ExpectedShape,
    ) -> Self {
        Self {
            name: name.to_string(),
            system: system.to_string(),
            temperature,
            max_tokens,
            shape,
        }
    }

    /// Raw Mermaid code for an explicit diagram kind.
    pub fn diagram() -> Self {
        Self::preset(
            "diagram",
            templates::DIAGRAM_SYSTEM,
            0.7,
            4000,
            ExpectedShape::DiagramDefinition,
        )
    }

    /// HTML snippet with a diagram container, used when no kind was given.
    pub fn architecture_page() -> Self {
        Self::preset(
            "architecture_page",
            templates::ARCHITECTURE_PAGE_SYSTEM,
            0.7,
            4000,
            ExpectedShape::EmbeddedMarkupBlock,
        )
    }

    /// Condensed system description of a document.
    pub fn document_analysis() -> Self {
        Self::preset(
            "document_analysis",
            templates::DOCUMENT_ANALYSIS_SYSTEM,
            0.3,
            2000,
            ExpectedShape::PlainText,
        )
    }

    /// Complete styled HTML page.
    pub fn html_page() -> Self {
        Self::preset(
            "html_page",
            templates::HTML_PAGE_SYSTEM,
            0.7,
            4000,
            ExpectedShape::FullDocument,
        )
    }

    /// Pair this profile with a rendered user prompt.
    pub fn prompt(&self, user: impl Into<String>) -> CompletionPrompt {
        CompletionPrompt::new(&self.system, user, self.temperature, self.max_tokens)
    }
}

/// Every template the pipeline renders: one per kind plus the auxiliary ones.
#[derive(Debug, Clone, Getters)]
pub struct PromptCatalog {
    /// Per-kind templates
    registry: PromptRegistry,
    /// Architecture page template
    architecture_page: PromptTemplate,
    /// Document analysis template
    document_analysis: PromptTemplate,
    /// Free-form HTML page template
    html_page: PromptTemplate,
}

impl PromptCatalog {
    /// Bundled templates only.
    ///
    /// # Errors
    ///
    /// Fails only if a bundled template lost its placeholder.
    pub fn bundled() -> Result<Self, ConfigError> {
        Self::from_overrides(&TemplateOverrides::default())
    }

    /// Bundled templates with the given overrides applied.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] naming the override whose placeholder is
    /// missing or repeated.
    pub fn from_overrides(overrides: &TemplateOverrides) -> Result<Self, ConfigError> {
        let mut registry = PromptRegistry::with_defaults()
            .map_err(|e| ConfigError::new(format!("bundled template: {}", e.kind)))?;
        let per_kind = [
            (DiagramKind::Architecture, &overrides.architecture),
            (DiagramKind::Sequence, &overrides.sequence),
            (DiagramKind::Flowchart, &overrides.flowchart),
            (DiagramKind::Usecase, &overrides.usecase),
            (DiagramKind::EntityRelationship, &overrides.er),
            (DiagramKind::Class, &overrides.class),
        ];
        for (kind, text) in per_kind {
            if let Some(text) = text {
                registry
                    .register_text(kind, text.as_str())
                    .map_err(|e| ConfigError::new(format!("templates.{}: {}", kind, e.kind)))?;
            }
        }

        Ok(Self {
            registry,
            architecture_page: auxiliary(
                "architecture_page",
                overrides.architecture_page.as_deref(),
                templates::ARCHITECTURE_PAGE,
            )?,
            document_analysis: auxiliary(
                "document_analysis",
                overrides.document_analysis.as_deref(),
                templates::DOCUMENT_ANALYSIS,
            )?,
            html_page: auxiliary(
                "html_page",
                overrides.html_page.as_deref(),
                templates::HTML_PAGE,
            )?,
        })
    }

    /// Replace the per-kind templates.
    pub fn with_registry(mut self, registry: PromptRegistry) -> Self {
        self.registry = registry;
        self
    }
}

fn auxiliary(
    name: &str,
    text: Option<&str>,
    bundled: &'static str,
) -> Result<PromptTemplate, ConfigError> {
    PromptTemplate::new(name, text.unwrap_or(bundled))
        .map_err(|e| ConfigError::new(format!("templates.{}: {}", name, e.kind)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let diagram = GenerationProfile::diagram();
        assert_eq!(*diagram.shape(), ExpectedShape::DiagramDefinition);
        assert_eq!(*diagram.temperature(), 0.7);
        assert_eq!(*diagram.max_tokens(), 4000);

        assert_eq!(
            *GenerationProfile::architecture_page().shape(),
            ExpectedShape::EmbeddedMarkupBlock
        );
        assert_eq!(
            *GenerationProfile::html_page().shape(),
            ExpectedShape::FullDocument
        );
    }

    #[test]
    fn prompt_carries_profile_parameters() {
        let prompt = GenerationProfile::document_analysis().prompt("Read this");
        assert_eq!(prompt.system(), templates::DOCUMENT_ANALYSIS_SYSTEM);
        assert_eq!(prompt.user(), "Read this");
        assert_eq!(*prompt.temperature(), 0.3);
    }

    #[test]
    fn overrides_replace_bundled_templates() {
        let overrides = TemplateOverrides {
            sequence: Some("Sequence please: {description}".into()),
            html_page: Some("<page>{description}</page>".into()),
            ..Default::default()
        };
        let catalog = PromptCatalog::from_overrides(&overrides).unwrap();
        assert_eq!(
            catalog.registry().render(DiagramKind::Sequence, "login").unwrap(),
            "Sequence please: login"
        );
        assert_eq!(catalog.html_page().render("x"), "<page>x</page>");
        assert!(catalog.document_analysis().render("doc").contains("doc"));
    }

    #[test]
    fn invalid_override_names_its_key() {
        let overrides = TemplateOverrides {
            er: Some("no placeholder here".into()),
            ..Default::default()
        };
        let err = PromptCatalog::from_overrides(&overrides).unwrap_err();
        assert!(err.message.contains("templates.er"));

        let overrides = TemplateOverrides {
            document_analysis: Some("{description} and {description}".into()),
            ..Default::default()
        };
        let err = PromptCatalog::from_overrides(&overrides).unwrap_err();
        assert!(err.message.contains("templates.document_analysis"));
    }
}
