//! CLI command definitions.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Diagrammer - Mermaid diagrams from natural-language descriptions
#[derive(Parser, Debug)]
#[command(name = "diagrammer")]
#[command(about = "Generate Mermaid diagram pages from natural-language descriptions", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// Configuration file layered over the bundled defaults
    #[arg(short, long, global = true, env = "DIAGRAMMER_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API
    Serve {
        /// Interface to bind, overriding server.host
        #[arg(long)]
        host: Option<String>,

        /// Port to bind, overriding server.port
        #[arg(long)]
        port: Option<u16>,
    },

    /// Generate a diagram page from a description
    Generate {
        /// What to draw
        description: String,

        /// Diagram kind (architecture, sequence, flowchart, usecase, er, class)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Ask for a free-form styled HTML page instead of a diagram
        #[arg(long, conflicts_with = "kind")]
        html: bool,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Turn a text, Markdown, PDF or DOCX document into a diagram page
    Analyze {
        /// Document to read; the format follows the file extension
        path: PathBuf,

        /// Diagram kind for the resulting diagram
        #[arg(short = 't', long = "type")]
        kind: Option<String>,

        /// Write the page to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// List the diagram kinds that can be requested
    Kinds,
}
