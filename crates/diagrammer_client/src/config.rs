//! Configuration for the upstream completion endpoint

use derive_getters::Getters;
use diagrammer_core::ApiKey;
use serde::{Deserialize, Serialize};

/// Chat-completion endpoint used when none is configured.
pub const DEFAULT_ENDPOINT: &str = "https://api.deepseek.com/v1/chat/completions";

/// Model identifier used when none is configured.
pub const DEFAULT_MODEL: &str = "deepseek-chat";

/// Connection settings for the completion endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ClientConfig {
    /// Full URL of the chat-completions route
    #[serde(default = "default_endpoint")]
    endpoint: String,
    /// Model identifier sent with every request
    #[serde(default = "default_model")]
    model: String,
    /// Bearer credential; absence surfaces on first call
    #[serde(default, skip_serializing)]
    api_key: Option<ApiKey>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
        }
    }
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(endpoint: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: None,
        }
    }

    /// Set the API key
    pub fn with_api_key(mut self, api_key: ApiKey) -> Self {
        self.api_key = Some(api_key);
        self
    }

    /// Configured key, ignoring blank values.
    pub fn credential(&self) -> Option<&ApiKey> {
        self.api_key.as_ref().filter(|key| !key.is_empty())
    }
}
