//! Error-to-response mapping.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use diagrammer_error::{
    CompletionErrorKind, DiagrammerError, DiagrammerErrorKind, DocumentErrorKind,
    RequestErrorKind, RetryErrorKind, TemplateErrorKind,
};
use serde_json::json;

/// Failure returned to an API caller as `{"error": code, "message": text}`.
///
/// The full error, including any upstream body, is logged when the response
/// is built; only the public message leaves the process.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    code: &'static str,
    message: String,
    source: Option<DiagrammerError>,
}

impl ApiError {
    /// Status code of the response.
    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Machine-readable error code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Caller-facing message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Error for a request the caller must fix.
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "invalid_request",
            message: message.into(),
            source: None,
        }
    }
}

fn classify(kind: &DiagrammerErrorKind) -> (StatusCode, &'static str) {
    match kind {
        DiagrammerErrorKind::Config(_) => (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error"),
        DiagrammerErrorKind::Server(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        DiagrammerErrorKind::Template(e) => match e.kind {
            TemplateErrorKind::UnsupportedKind(_) => (StatusCode::BAD_REQUEST, "unsupported_kind"),
            _ => (StatusCode::INTERNAL_SERVER_ERROR, "template_error"),
        },
        DiagrammerErrorKind::Request(e) => match e.kind {
            RequestErrorKind::UnknownKind(_) => (StatusCode::BAD_REQUEST, "unsupported_kind"),
            RequestErrorKind::EmptyDescription => (StatusCode::BAD_REQUEST, "invalid_request"),
        },
        DiagrammerErrorKind::Document(e) => match e.kind {
            DocumentErrorKind::UnsupportedFormat(_) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, "unsupported_format")
            }
            _ => (StatusCode::BAD_REQUEST, "invalid_document"),
        },
        DiagrammerErrorKind::Completion(e) => completion_status(&e.kind),
        DiagrammerErrorKind::Retry(e) => match &e.kind {
            RetryErrorKind::DeadlineExceeded(_) => (StatusCode::GATEWAY_TIMEOUT, "deadline_exceeded"),
            RetryErrorKind::Exhausted { last, .. } => completion_status(&last.kind),
            RetryErrorKind::Permanent { error, .. } => completion_status(&error.kind),
        },
    }
}

fn completion_status(kind: &CompletionErrorKind) -> (StatusCode, &'static str) {
    match kind {
        CompletionErrorKind::MissingCredential => {
            (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
        }
        _ => (StatusCode::BAD_GATEWAY, "upstream_unavailable"),
    }
}

impl From<DiagrammerError> for ApiError {
    fn from(err: DiagrammerError) -> Self {
        let (status, code) = classify(err.kind());
        Self {
            status,
            code,
            message: err.public_message(),
            source: Some(err),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            code: "invalid_request",
            message: rejection.body_text(),
            source: None,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.source {
            Some(err) if self.status.is_server_error() => {
                tracing::error!(status = self.status.as_u16(), code = self.code, error = %err, "Request failed");
            }
            Some(err) => {
                tracing::warn!(status = self.status.as_u16(), code = self.code, error = %err, "Request rejected");
            }
            None => {
                tracing::warn!(status = self.status.as_u16(), code = self.code, message = %self.message, "Request rejected");
            }
        }

        let body = Json(json!({ "error": self.code, "message": self.message }));
        (self.status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use diagrammer_error::{
        CompletionError, ConfigError, DocumentError, RetryError, TemplateError,
    };

    fn api(err: impl Into<DiagrammerError>) -> ApiError {
        ApiError::from(err.into())
    }

    #[test]
    fn status_mapping() {
        assert_eq!(
            api(TemplateError::new(TemplateErrorKind::UnsupportedKind("gantt".into()))).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            api(DocumentError::new(DocumentErrorKind::UnsupportedFormat("image/png".into()))).status(),
            StatusCode::UNSUPPORTED_MEDIA_TYPE
        );
        assert_eq!(
            api(DocumentError::new(DocumentErrorKind::Unreadable {
                format: "pdf".into(),
                reason: "xref table missing".into(),
            }))
            .status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            api(DocumentError::new(DocumentErrorKind::Empty)).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            api(ConfigError::new("bad")).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            api(RetryError::new(RetryErrorKind::DeadlineExceeded(1000))).status(),
            StatusCode::GATEWAY_TIMEOUT
        );
        assert_eq!(
            api(CompletionError::new(CompletionErrorKind::EmptyResponse)).status(),
            StatusCode::BAD_GATEWAY
        );
    }

    #[test]
    fn exhausted_upstream_hides_body() {
        let last = CompletionError::new(CompletionErrorKind::Upstream {
            status_code: 500,
            body: "secret internals".into(),
        });
        let err = api(RetryError::new(RetryErrorKind::Exhausted { attempts: 3, last }));
        assert_eq!(err.status(), StatusCode::BAD_GATEWAY);
        assert_eq!(err.code(), "upstream_unavailable");
        assert!(!err.message().contains("secret internals"));
    }

    #[test]
    fn missing_credential_is_a_server_fault() {
        let error = CompletionError::new(CompletionErrorKind::MissingCredential);
        let err = api(RetryError::new(RetryErrorKind::Permanent { attempt: 1, error }));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.code(), "configuration_error");
    }
}
