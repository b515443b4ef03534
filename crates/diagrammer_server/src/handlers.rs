//! Route handlers.

use crate::{ApiError, AppState};
use axum::{
    Json,
    body::Bytes,
    extract::{Query, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header::CONTENT_TYPE},
    response::IntoResponse,
};
use diagrammer_core::{DiagramKind, GenerationRequest};
use diagrammer_document::DocumentFormat;
use diagrammer_error::{DiagrammerError, RequestError, RequestErrorKind};
use diagrammer_service::DocumentDiagram;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::{info, instrument};

/// Body of `/generate-diagram` and `/generate`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateDiagramRequest {
    /// What to draw
    pub description: String,
    /// Diagram kind; the architecture page variant runs when absent
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Body of `/generate-html`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerateHtmlRequest {
    /// Page content
    pub description: String,
}

/// Body of `/analyze-document`.
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeDocumentRequest {
    /// Document text
    pub content: String,
    /// How `content` is formatted
    #[serde(default)]
    pub format: DocumentFormat,
    /// Diagram kind for the resulting diagram
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Query string of `/upload-document`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UploadParams {
    /// Diagram kind for the resulting diagram
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

/// Success body carrying a rendered page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HtmlResponse {
    /// Self-contained HTML page
    pub html: String,
}

/// Body of `/health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `healthy` while the process serves requests
    pub status: String,
}

/// Body of `/kinds`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KindsResponse {
    /// Kinds accepted in the `type` field
    pub kinds: Vec<String>,
}

fn parse_kind(kind: Option<&str>) -> Result<Option<DiagramKind>, DiagrammerError> {
    match kind.map(str::trim).filter(|k| !k.is_empty()) {
        Some(raw) => DiagramKind::from_str(raw)
            .map(Some)
            .map_err(|_| RequestError::new(RequestErrorKind::UnknownKind(raw.to_string())).into()),
        None => Ok(None),
    }
}

/// Liveness check with no upstream dependency.
pub async fn health() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

/// Kinds with a registered template.
pub async fn kinds(State(state): State<AppState>) -> Json<KindsResponse> {
    Json(KindsResponse {
        kinds: state
            .service()
            .kinds()
            .into_iter()
            .map(|kind| kind.to_string())
            .collect(),
    })
}

/// Generate a diagram page from a description.
#[instrument(skip(state, payload))]
pub async fn generate_diagram(
    State(state): State<AppState>,
    payload: Result<Json<GenerateDiagramRequest>, JsonRejection>,
) -> Result<Json<HtmlResponse>, ApiError> {
    let Json(body) = payload?;
    let request = GenerationRequest::parse(body.kind.as_deref(), body.description)
        .map_err(DiagrammerError::from)?;
    info!(kind = ?request.kind(), "Received diagram request");

    let html = state.service().generate_diagram(&request).await?;
    Ok(Json(HtmlResponse { html }))
}

/// Generate a free-form styled page.
#[instrument(skip(state, payload))]
pub async fn generate_html(
    State(state): State<AppState>,
    payload: Result<Json<GenerateHtmlRequest>, JsonRejection>,
) -> Result<Json<HtmlResponse>, ApiError> {
    let Json(body) = payload?;
    let html = state.service().generate_html_page(&body.description).await?;
    Ok(Json(HtmlResponse { html }))
}

/// Describe a document sent as JSON, then draw it.
#[instrument(skip(state, payload))]
pub async fn analyze_document(
    State(state): State<AppState>,
    payload: Result<Json<AnalyzeDocumentRequest>, JsonRejection>,
) -> Result<Json<DocumentDiagram>, ApiError> {
    let Json(body) = payload?;
    let kind = parse_kind(body.kind.as_deref())?;
    let document = state
        .service()
        .prepare_document(body.content.as_bytes(), body.format)?;
    info!(format = %body.format, chars = document.text().len(), "Received document");

    let result = state.service().analyze_document(&document, kind).await?;
    Ok(Json(result))
}

/// Describe a raw uploaded document, then draw it.
///
/// The format comes from the `Content-Type` header.
#[instrument(skip(state, headers, body), fields(bytes = body.len()))]
pub async fn upload_document(
    State(state): State<AppState>,
    Query(params): Query<UploadParams>,
    headers: HeaderMap,
    body: Bytes,
) -> Result<Json<DocumentDiagram>, ApiError> {
    let content_type = headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .ok_or_else(|| ApiError::bad_request("Content-Type header is required"))?;
    let format = DocumentFormat::from_content_type(content_type).map_err(DiagrammerError::from)?;
    let kind = parse_kind(params.kind.as_deref())?;

    let document = state.service().prepare_document(&body, format)?;
    info!(%format, chars = document.text().len(), "Received upload");

    let result = state.service().analyze_document(&document, kind).await?;
    Ok(Json(result))
}
