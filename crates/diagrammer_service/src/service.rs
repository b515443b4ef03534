//! The unified generation pipeline.

use crate::{DiagrammerConfig, GenerationProfile, PromptCatalog, RenderConfig};
use derive_getters::Getters;
use diagrammer_client::CompletionClient;
use diagrammer_core::{DiagramArtifact, DiagramKind, GenerationRequest};
use diagrammer_document::{DocumentFormat, DocumentPreprocessor, PreparedDocument};
use diagrammer_error::{
    CompletionError, CompletionErrorKind, DiagrammerResult, RequestError, RequestErrorKind,
};
use diagrammer_retry::{Orchestrator, RetryPolicy};
use diagrammer_sanitize::{RenderOptions, assemble_page, extract, has_content};
use serde::Serialize;
use tracing::{debug, info, instrument};

/// Result of turning a document into a diagram.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct DocumentDiagram {
    /// System description the model extracted from the document
    description: String,
    /// Rendered diagram page
    html: String,
}

/// Prompt, orchestrate, sanitize, assemble.
///
/// Holds only read-only state, so one instance serves all concurrent requests.
///
/// # Example
///
/// ```rust,ignore
/// let service = DiagramService::from_config(client, &config)?;
/// let request = GenerationRequest::parse(Some("sequence"), "User signs in with OAuth")?;
/// let html = service.generate_diagram(&request).await?;
/// ```
#[derive(Debug)]
pub struct DiagramService<C> {
    orchestrator: Orchestrator<C>,
    catalog: PromptCatalog,
    preprocessor: DocumentPreprocessor,
    render: RenderConfig,
}

impl<C: CompletionClient> DiagramService<C> {
    /// Assemble a service from its parts.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when the retry policy is invalid.
    pub fn new(
        client: C,
        policy: RetryPolicy,
        catalog: PromptCatalog,
        preprocessor: DocumentPreprocessor,
        render: RenderConfig,
    ) -> DiagrammerResult<Self> {
        Ok(Self {
            orchestrator: Orchestrator::new(client, policy)?,
            catalog,
            preprocessor,
            render,
        })
    }

    /// Build a service from loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when a template override or the retry
    /// policy is invalid.
    pub fn from_config(client: C, config: &DiagrammerConfig) -> DiagrammerResult<Self> {
        let catalog = PromptCatalog::from_overrides(&config.templates)?;
        Self::new(
            client,
            config.retry.clone(),
            catalog,
            config.documents.preprocessor(),
            config.render.clone(),
        )
    }

    /// The retry orchestrator.
    pub fn orchestrator(&self) -> &Orchestrator<C> {
        &self.orchestrator
    }

    /// The templates in use.
    pub fn catalog(&self) -> &PromptCatalog {
        &self.catalog
    }

    /// Kinds that can be requested explicitly.
    pub fn kinds(&self) -> Vec<DiagramKind> {
        self.catalog.registry().kinds()
    }

    /// Generate a self-contained diagram page.
    ///
    /// Without a kind, the architecture page variant runs and the diagram
    /// container is extracted from the model's HTML. With a kind, the model is
    /// asked for raw Mermaid code.
    ///
    /// # Errors
    ///
    /// - Template errors for kinds without a registered template (no call is made)
    /// - Retry errors once the attempt budget or deadline is spent
    #[instrument(
        skip(self, request),
        fields(kind = ?request.kind(), description_len = request.description().len())
    )]
    pub async fn generate_diagram(&self, request: &GenerationRequest) -> DiagrammerResult<String> {
        let kind = *request.kind();
        let (profile, user) = match kind {
            Some(kind) => (
                GenerationProfile::diagram(),
                self.catalog.registry().render(kind, request.description())?,
            ),
            None => (
                GenerationProfile::architecture_page(),
                self.catalog.architecture_page().render(request.description()),
            ),
        };

        let artifact = self.complete(&profile, user).await?;
        let page = assemble_page(&artifact, &self.render_options(kind));
        info!(bytes = page.len(), "Diagram page generated");
        Ok(page)
    }

    /// Generate a free-form styled HTML page.
    ///
    /// # Errors
    ///
    /// Fails for a blank description or when generation is exhausted.
    #[instrument(skip(self, description), fields(description_len = description.len()))]
    pub async fn generate_html_page(&self, description: &str) -> DiagrammerResult<String> {
        if description.trim().is_empty() {
            return Err(RequestError::new(RequestErrorKind::EmptyDescription).into());
        }
        let user = self.catalog.html_page().render(description);
        let artifact = self.complete(&GenerationProfile::html_page(), user).await?;
        let page = assemble_page(&artifact, &self.render_options(None));
        info!(bytes = page.len(), "HTML page generated");
        Ok(page)
    }

    /// Decode and normalize raw document bytes.
    ///
    /// # Errors
    ///
    /// Document errors for unsupported formats, bad encoding or empty input.
    pub fn prepare_document(
        &self,
        bytes: &[u8],
        format: DocumentFormat,
    ) -> DiagrammerResult<PreparedDocument> {
        Ok(self.preprocessor.prepare(bytes, format)?)
    }

    /// Condense a document into a system description.
    ///
    /// # Errors
    ///
    /// Retry errors once the attempt budget or deadline is spent.
    #[instrument(skip(self, document), fields(format = %document.format(), chars = document.text().len()))]
    pub async fn describe_document(&self, document: &PreparedDocument) -> DiagrammerResult<String> {
        let user = self.catalog.document_analysis().render(document.text());
        let artifact = self
            .complete(&GenerationProfile::document_analysis(), user)
            .await?;
        Ok(artifact.into_string())
    }

    /// Describe a document, then draw the description.
    ///
    /// # Errors
    ///
    /// Any error from [`describe_document`](Self::describe_document) or
    /// [`generate_diagram`](Self::generate_diagram).
    #[instrument(skip(self, document), fields(format = %document.format()))]
    pub async fn analyze_document(
        &self,
        document: &PreparedDocument,
        kind: Option<DiagramKind>,
    ) -> DiagrammerResult<DocumentDiagram> {
        let description = self.describe_document(document).await?;
        debug!(chars = description.len(), "Document described");
        let request = GenerationRequest::new(kind, description.clone())?;
        let html = self.generate_diagram(&request).await?;
        Ok(DocumentDiagram { description, html })
    }

    async fn complete(
        &self,
        profile: &GenerationProfile,
        user: String,
    ) -> DiagrammerResult<DiagramArtifact> {
        debug!(profile = profile.name().as_str(), "Running generation profile");
        let shape = *profile.shape();
        // An answer that sanitizes to nothing is a failed attempt.
        let artifact = self
            .orchestrator
            .run_with(&profile.prompt(user), |raw| {
                let artifact = extract(raw, shape);
                if has_content(&artifact) {
                    Ok(artifact)
                } else {
                    Err(CompletionError::new(CompletionErrorKind::EmptyResponse))
                }
            })
            .await?;
        Ok(artifact)
    }

    fn render_options(&self, kind: Option<DiagramKind>) -> RenderOptions {
        RenderOptions::for_kind(kind)
            .with_theme(self.render.theme.as_str())
            .with_script_src(self.render.script_src.as_str())
    }
}
