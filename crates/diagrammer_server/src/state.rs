//! Shared handler state.

use diagrammer_client::CompletionClient;
use diagrammer_service::DiagramService;
use std::sync::Arc;

/// Completion client behind a trait object, so tests can swap in fakes.
pub type SharedClient = Arc<dyn CompletionClient>;

/// State cloned into every handler. Read-only after startup.
#[derive(Clone)]
pub struct AppState {
    service: Arc<DiagramService<SharedClient>>,
}

impl AppState {
    /// Wrap a service.
    pub fn new(service: DiagramService<SharedClient>) -> Self {
        Self {
            service: Arc::new(service),
        }
    }

    /// The generation pipeline.
    pub fn service(&self) -> &DiagramService<SharedClient> {
        &self.service
    }
}
