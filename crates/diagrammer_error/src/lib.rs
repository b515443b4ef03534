//! Error types for the Diagrammer workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! # Examples
//!
//! ```
//! use diagrammer_error::{ConfigError, DiagrammerResult};
//!
//! fn load() -> DiagrammerResult<String> {
//!     Err(ConfigError::new("upstream.endpoint must not be empty"))?
//! }
//!
//! assert!(load().is_err());
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod completion;
mod config;
mod document;
mod error;
mod request;
mod retry;
mod server;
mod template;

pub use completion::{CompletionError, CompletionErrorKind, RetryableError};
pub use config::ConfigError;
pub use document::{DocumentError, DocumentErrorKind};
pub use error::{DiagrammerError, DiagrammerErrorKind, DiagrammerResult};
pub use request::{RequestError, RequestErrorKind};
pub use retry::{RetryError, RetryErrorKind};
pub use server::ServerError;
pub use template::{TemplateError, TemplateErrorKind};
