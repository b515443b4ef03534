//! Inbound generation requests.

use crate::DiagramKind;
use derive_getters::Getters;
use diagrammer_error::{RequestError, RequestErrorKind};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// One caller request: a description and, optionally, the diagram kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct GenerationRequest {
    kind: Option<DiagramKind>,
    description: String,
}

impl GenerationRequest {
    /// Validate and build a request.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::EmptyDescription`] when the description is blank.
    ///
    /// ```
    /// use diagrammer_core::{DiagramKind, GenerationRequest};
    ///
    /// let req = GenerationRequest::new(Some(DiagramKind::Class), "Shop with orders").unwrap();
    /// assert_eq!(*req.kind(), Some(DiagramKind::Class));
    /// assert!(GenerationRequest::new(None, "   ").is_err());
    /// ```
    #[track_caller]
    pub fn new(
        kind: Option<DiagramKind>,
        description: impl Into<String>,
    ) -> Result<Self, RequestError> {
        let description = description.into();
        if description.trim().is_empty() {
            return Err(RequestError::new(RequestErrorKind::EmptyDescription));
        }
        Ok(Self { kind, description })
    }

    /// Build a request from an untyped kind string as received over the wire.
    ///
    /// # Errors
    ///
    /// Returns [`RequestErrorKind::UnknownKind`] for a kind outside the closed set.
    #[track_caller]
    pub fn parse(kind: Option<&str>, description: impl Into<String>) -> Result<Self, RequestError> {
        let kind = match kind.map(str::trim).filter(|k| !k.is_empty()) {
            Some(raw) => Some(
                DiagramKind::from_str(raw)
                    .map_err(|_| RequestError::new(RequestErrorKind::UnknownKind(raw.to_string())))?,
            ),
            None => None,
        };
        Self::new(kind, description)
    }
}
