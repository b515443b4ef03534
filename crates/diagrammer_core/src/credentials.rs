//! Upstream credentials.

use serde::{Deserialize, Serialize};
use std::fmt;

/// API key for the completion endpoint.
///
/// `Debug` and `Display` are redacted so the key never lands in logs.
///
/// ```
/// use diagrammer_core::ApiKey;
///
/// let key = ApiKey::new("sk-secret");
/// assert_eq!(format!("{:?}", key), "ApiKey(***)");
/// assert_eq!(key.expose(), "sk-secret");
/// ```
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a raw key.
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    /// Raw key, for the authorization header only.
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the key is blank.
    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

impl fmt::Display for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("***")
    }
}
