//! `serve` command handler.

use diagrammer::DiagrammerConfig;
use diagrammer_error::DiagrammerResult;

/// Apply command-line overrides and run the HTTP API until Ctrl+C.
pub async fn serve(
    mut config: DiagrammerConfig,
    host: Option<String>,
    port: Option<u16>,
) -> DiagrammerResult<()> {
    if let Some(host) = host {
        config.server.host = host;
    }
    if let Some(port) = port {
        config.server.port = port;
    }

    tracing::info!(address = %config.server.bind_address(), "Starting Diagrammer server");
    diagrammer::serve(config).await
}
