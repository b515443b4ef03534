//! Diagrammer CLI binary.
//!
//! - Serve the HTTP API
//! - Generate a diagram page from a description
//! - Turn a document into a diagram page
//! - List the supported diagram kinds

use clap::Parser;

mod cli;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use cli::{Cli, Commands, analyze_document, generate, list_kinds, serve};

    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = diagrammer::DiagrammerConfig::load(cli.config.as_deref())?;
    if cli.json_logs {
        config.logging.json = true;
    }
    diagrammer::init_logging(&config.logging, cli.verbose)?;

    match cli.command {
        Commands::Serve { host, port } => {
            serve(config, host, port).await?;
        }

        Commands::Generate {
            description,
            kind,
            html,
            out,
        } => {
            generate(&config, &description, kind.as_deref(), html, out.as_deref()).await?;
        }

        Commands::Analyze { path, kind, out } => {
            analyze_document(&config, &path, kind.as_deref(), out.as_deref()).await?;
        }

        Commands::Kinds => {
            list_kinds(&config)?;
        }
    }

    Ok(())
}
