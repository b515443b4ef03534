//! Command-line interface module.
//!
//! CLI structure and command handlers for the diagrammer binary.

mod commands;
mod generate;
mod serve;

pub use commands::{Cli, Commands};
pub use generate::{analyze_document, generate, list_kinds};
pub use serve::serve;
