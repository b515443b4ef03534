//! Layered configuration.
//!
//! Sources, lowest precedence first:
//! - Bundled defaults (include_str! from diagrammer.toml)
//! - `~/.config/diagrammer/diagrammer.toml`
//! - `./diagrammer.toml`
//! - A file named on the command line
//! - `DIAGRAMMER__SECTION__KEY` environment variables
//! - `DEEPSEEK_API_KEY` for the credential

use crate::PromptCatalog;
use config::{Config, ConfigBuilder, Environment, File, FileFormat, builder::DefaultState};
use diagrammer_client::ClientConfig;
use diagrammer_core::ApiKey;
use diagrammer_document::{DEFAULT_MAX_CHARS, DocumentPreprocessor};
use diagrammer_error::{ConfigError, DiagrammerError, DiagrammerResult};
use diagrammer_retry::RetryPolicy;
use diagrammer_sanitize::MERMAID_SCRIPT_SRC;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, instrument, warn};

/// Prefix for environment overrides (`DIAGRAMMER__RETRY__MAX_ATTEMPTS`).
pub const ENV_PREFIX: &str = "DIAGRAMMER";

/// Credential variable honoured for compatibility with existing deployments.
pub const LEGACY_API_KEY_VAR: &str = "DEEPSEEK_API_KEY";

const DEFAULT_CONFIG: &str = include_str!("../../../diagrammer.toml");

/// HTTP listener settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind
    pub host: String,
    /// Port to bind
    pub port: u16,
    /// Largest accepted request body
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8001,
            body_limit_bytes: 2 * 1024 * 1024,
        }
    }
}

impl ServerConfig {
    /// `host:port` for binding.
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            json: false,
        }
    }
}

/// Document intake limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentConfig {
    /// Characters kept before a document is truncated
    pub max_chars: usize,
}

impl Default for DocumentConfig {
    fn default() -> Self {
        Self {
            max_chars: DEFAULT_MAX_CHARS,
        }
    }
}

impl DocumentConfig {
    /// Preprocessor honouring these limits.
    pub fn preprocessor(&self) -> DocumentPreprocessor {
        DocumentPreprocessor::new(self.max_chars)
    }
}

/// Page assembly settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Mermaid theme
    pub theme: String,
    /// Mermaid bundle URL
    pub script_src: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            theme: "default".to_string(),
            script_src: MERMAID_SCRIPT_SRC.to_string(),
        }
    }
}

/// Prompt template overrides, keyed like the diagram kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemplateOverrides {
    /// Typed architecture diagram
    pub architecture: Option<String>,
    /// Sequence diagram
    pub sequence: Option<String>,
    /// Flowchart
    pub flowchart: Option<String>,
    /// Use case diagram
    pub usecase: Option<String>,
    /// Entity relationship diagram
    pub er: Option<String>,
    /// Class diagram
    pub class: Option<String>,
    /// Architecture page requested without a diagram type
    pub architecture_page: Option<String>,
    /// Document analysis
    pub document_analysis: Option<String>,
    /// Free-form HTML page
    pub html_page: Option<String>,
}

/// Complete Diagrammer configuration.
///
/// # Example
///
/// ```no_run
/// use diagrammer_service::DiagrammerConfig;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = DiagrammerConfig::load(None)?;
/// println!("listening on {}", config.server.bind_address());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagrammerConfig {
    /// Completion endpoint and credential
    pub upstream: ClientConfig,
    /// Attempt budget, timeouts and delays
    pub retry: RetryPolicy,
    /// HTTP listener
    pub server: ServerConfig,
    /// Log output
    pub logging: LoggingConfig,
    /// Document intake
    pub documents: DocumentConfig,
    /// Page assembly
    pub render: RenderConfig,
    /// Prompt overrides
    pub templates: TemplateOverrides,
}

impl DiagrammerConfig {
    /// Load configuration from every source in precedence order.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if a present file cannot be parsed or a
    /// value fails validation. A missing API key is not an error here.
    #[instrument]
    pub fn load(explicit: Option<&Path>) -> DiagrammerResult<Self> {
        debug!("Loading configuration with precedence: env > explicit > current dir > home dir > bundled defaults");

        let mut builder = Self::defaults();

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".config/diagrammer/diagrammer.toml");
            builder = builder.add_source(File::from(home_config).required(false));
        }

        builder = builder.add_source(File::with_name("diagrammer").required(false));

        if let Some(path) = explicit {
            builder = builder.add_source(File::from(path));
        }

        builder = builder.add_source(
            Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let prefixed_key = format!("{}__UPSTREAM__API_KEY", ENV_PREFIX);
        if std::env::var_os(&prefixed_key).is_none() {
            if let Ok(key) = std::env::var(LEGACY_API_KEY_VAR) {
                debug!(var = LEGACY_API_KEY_VAR, "Using legacy credential variable");
                builder = builder
                    .set_override("upstream.api_key", key)
                    .map_err(|e| config_error("Failed to apply legacy API key", e))?;
            }
        }

        Self::finish(builder)
    }

    /// Bundled defaults overlaid with a TOML document.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for malformed TOML or invalid values.
    pub fn from_toml_str(toml: &str) -> DiagrammerResult<Self> {
        Self::finish(Self::defaults().add_source(File::from_str(toml, FileFormat::Toml)))
    }

    /// Bundled defaults overlaid with a single file.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the file is missing or invalid.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> DiagrammerResult<Self> {
        debug!("Loading configuration from file");
        Self::finish(Self::defaults().add_source(File::from(path.as_ref())))
    }

    fn defaults() -> ConfigBuilder<DefaultState> {
        Config::builder().add_source(File::from_str(DEFAULT_CONFIG, FileFormat::Toml))
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> DiagrammerResult<Self> {
        let config: Self = builder
            .build()
            .map_err(|e| config_error("Failed to build configuration", e))?
            .try_deserialize()
            .map_err(|e| config_error("Failed to parse configuration", e))?;
        config.validate()?;
        if config.upstream.credential().is_none() {
            warn!("No upstream API key configured; generation requests will fail until one is set");
        }
        Ok(config)
    }

    /// Check every section.
    ///
    /// # Errors
    ///
    /// Returns the first [`ConfigError`] found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.retry.validate()?;

        reqwest::Url::parse(self.upstream.endpoint()).map_err(|e| {
            ConfigError::new(format!(
                "upstream.endpoint '{}' is not a valid URL: {}",
                self.upstream.endpoint(),
                e
            ))
        })?;
        if self.upstream.model().trim().is_empty() {
            return Err(ConfigError::new("upstream.model must not be empty"));
        }
        if self.server.body_limit_bytes == 0 {
            return Err(ConfigError::new("server.body_limit_bytes must be positive"));
        }
        if self.documents.max_chars == 0 {
            return Err(ConfigError::new("documents.max_chars must be positive"));
        }

        PromptCatalog::from_overrides(&self.templates).map(|_| ())
    }

    /// Replace the upstream credential.
    pub fn with_api_key(mut self, key: impl Into<String>) -> Self {
        self.upstream = self.upstream.with_api_key(ApiKey::new(key));
        self
    }
}

#[track_caller]
fn config_error(context: &str, e: config::ConfigError) -> DiagrammerError {
    DiagrammerError::from(ConfigError::new(format!("{}: {}", context, e)))
}
