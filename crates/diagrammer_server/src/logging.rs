//! Subscriber setup.

use diagrammer_error::{ConfigError, DiagrammerResult};
use diagrammer_service::LoggingConfig;
use tracing_subscriber::{EnvFilter, Layer, layer::SubscriberExt, util::SubscriberInitExt};

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. `verbose` lowers the configured
/// level to `debug`.
///
/// # Errors
///
/// Returns a configuration error for an invalid filter directive or when a
/// subscriber is already installed.
pub fn init_logging(config: &LoggingConfig, verbose: bool) -> DiagrammerResult<()> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .map_err(|e| ConfigError::new(format!("Invalid log filter '{}': {}", level, e)))?;

    let fmt_layer = if config.json {
        tracing_subscriber::fmt::layer()
            .json()
            .with_target(true)
            .with_level(true)
            .boxed()
    } else {
        tracing_subscriber::fmt::layer()
            .with_target(true)
            .with_level(true)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|e| ConfigError::new(format!("Failed to install log subscriber: {}", e)))?;

    Ok(())
}
