use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

/// All errors that can occur in a request lifecycle. Every handler returns
/// `Result<T, ServiceError>`, and the `IntoResponse` impl converts failures
/// into a JSON `{ "error": ... }` body with the matching status code.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The caller omitted a required field.
    #[error("{0}")]
    Validation(String),

    /// A base64 image field could not be decoded.
    #[error("Invalid base64 image payload: {0}")]
    InvalidEncoding(String),

    /// The upstream API answered with a non-success status.
    #[error("Upstream request failed with status {status}: {body}")]
    Upstream { status: u16, body: String },

    /// The upstream API answered 2xx but not in the agreed shape.
    #[error("Unexpected upstream response: {0}")]
    UpstreamProtocol(String),

    /// Anything else: outbound transport failures, body read failures.
    #[error("{0}")]
    Internal(String),
}

impl IntoResponse for ServiceError {
    fn into_response(self) -> Response {
        error!("{}", self);
        let (status, detail) = match &self {
            ServiceError::Validation(message) => (StatusCode::BAD_REQUEST, json!(message)),
            ServiceError::InvalidEncoding(_) => (StatusCode::BAD_REQUEST, json!(self.to_string())),
            // The upstream error body is relayed verbatim; JSON bodies are
            // embedded as JSON rather than as an escaped string.
            ServiceError::Upstream { body, .. } => {
                let detail = serde_json::from_str(body).unwrap_or_else(|_| json!(body));
                (StatusCode::INTERNAL_SERVER_ERROR, detail)
            }
            ServiceError::UpstreamProtocol(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, json!(self.to_string()))
            }
            ServiceError::Internal(message) => (StatusCode::INTERNAL_SERVER_ERROR, json!(message)),
        };
        (status, Json(json!({ "error": detail }))).into_response()
    }
}
