//! One-shot generation handlers.

use diagrammer::{
    ChatCompletionClient, DiagramService, DiagrammerConfig, DocumentFormat, GenerationRequest,
    PromptCatalog,
};
use diagrammer_core::DiagramKind;
use diagrammer_error::{DiagrammerError, RequestError, RequestErrorKind};
use std::path::Path;
use std::str::FromStr;
use tracing::info;

type CliResult = Result<(), Box<dyn std::error::Error>>;

fn build_service(
    config: &DiagrammerConfig,
) -> Result<DiagramService<ChatCompletionClient>, DiagrammerError> {
    let client = ChatCompletionClient::new(config.upstream.clone());
    DiagramService::from_config(client, config)
}

async fn emit(page: &str, out: Option<&Path>) -> CliResult {
    match out {
        Some(path) => {
            tokio::fs::write(path, page).await?;
            info!(path = %path.display(), bytes = page.len(), "Page written");
        }
        None => println!("{}", page),
    }
    Ok(())
}

/// Handle the `generate` command.
pub async fn generate(
    config: &DiagrammerConfig,
    description: &str,
    kind: Option<&str>,
    html: bool,
    out: Option<&Path>,
) -> CliResult {
    let service = build_service(config)?;

    let page = if html {
        service.generate_html_page(description).await?
    } else {
        let request = GenerationRequest::parse(kind, description).map_err(DiagrammerError::from)?;
        service.generate_diagram(&request).await?
    };

    emit(&page, out).await
}

/// Handle the `analyze` command.
pub async fn analyze_document(
    config: &DiagrammerConfig,
    path: &Path,
    kind: Option<&str>,
    out: Option<&Path>,
) -> CliResult {
    let kind = match kind {
        Some(raw) => Some(DiagramKind::from_str(raw).map_err(|_| {
            DiagrammerError::from(RequestError::new(RequestErrorKind::UnknownKind(
                raw.to_string(),
            )))
        })?),
        None => None,
    };
    let format = DocumentFormat::from_path(path).map_err(DiagrammerError::from)?;
    let bytes = tokio::fs::read(path).await?;

    let service = build_service(config)?;
    let document = service.prepare_document(&bytes, format)?;
    if *document.truncated() {
        tracing::warn!(chars = document.text().len(), "Document truncated before analysis");
    }

    let result = service.analyze_document(&document, kind).await?;
    eprintln!("{}", result.description());
    emit(result.html(), out).await
}

/// Handle the `kinds` command.
pub fn list_kinds(config: &DiagrammerConfig) -> CliResult {
    let catalog = PromptCatalog::from_overrides(&config.templates).map_err(DiagrammerError::from)?;
    for kind in catalog.registry().kinds() {
        println!("{}", kind);
    }
    Ok(())
}
