//! Process-level entry point.

use crate::{AppState, SharedClient, create_router};
use diagrammer_client::ChatCompletionClient;
use diagrammer_error::{DiagrammerResult, ServerError};
use diagrammer_service::{DiagramService, DiagrammerConfig};
use std::sync::Arc;
use tracing::{info, instrument, warn};

/// Bind the configured address and serve until Ctrl+C.
///
/// # Errors
///
/// Returns an error for invalid template overrides, a failed bind, or a
/// listener failure.
#[instrument(skip(config), fields(address = %config.server.bind_address()))]
pub async fn serve(config: DiagrammerConfig) -> DiagrammerResult<()> {
    let client: SharedClient = Arc::new(ChatCompletionClient::new(config.upstream.clone()));
    let service = DiagramService::from_config(client, &config)?;
    let app = create_router(AppState::new(service), config.server.body_limit_bytes);

    let address = config.server.bind_address();
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| ServerError::new(format!("Failed to bind {}: {}", address, e)))?;
    info!(%address, "Diagrammer listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::new(format!("Server error: {}", e)))?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl+C.
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
