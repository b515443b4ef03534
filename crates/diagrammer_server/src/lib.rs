//! HTTP surface for Diagrammer.
//!
//! Routes:
//! - `GET /health`
//! - `GET /kinds`
//! - `POST /generate-diagram` (alias `POST /generate`)
//! - `POST /generate-html`
//! - `POST /analyze-document`
//! - `POST /upload-document`

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod handlers;
mod logging;
mod router;
mod server;
mod state;

pub use error::ApiError;
pub use handlers::{
    AnalyzeDocumentRequest, GenerateDiagramRequest, GenerateHtmlRequest, HealthResponse,
    HtmlResponse, KindsResponse, UploadParams,
};
pub use logging::init_logging;
pub use router::create_router;
pub use server::{serve, shutdown_signal};
pub use state::{AppState, SharedClient};
