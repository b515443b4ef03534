//! Route table and middleware.

use crate::{AppState, handlers};
use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{get, post},
};
use tower_http::{
    cors::CorsLayer,
    limit::RequestBodyLimitLayer,
    trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;

/// Build the application router.
///
/// Bodies above `body_limit_bytes` are refused with `413`.
pub fn create_router(state: AppState, body_limit_bytes: usize) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &axum::http::Request<_>| {
            tracing::info_span!("http_request", method = %req.method(), uri = %req.uri())
        })
        .on_request(DefaultOnRequest::new().level(Level::INFO))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(tower_http::LatencyUnit::Millis),
        );

    Router::new()
        .route("/health", get(handlers::health))
        .route("/kinds", get(handlers::kinds))
        .route("/generate-diagram", post(handlers::generate_diagram))
        .route("/generate", post(handlers::generate_diagram))
        .route("/generate-html", post(handlers::generate_html))
        .route("/analyze-document", post(handlers::analyze_document))
        .route("/upload-document", post(handlers::upload_document))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit_bytes))
        .layer(trace)
        .layer(CorsLayer::permissive())
        .with_state(state)
}
