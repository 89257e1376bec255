//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use inimock_domain::error::InimockError;

/// JSON error body returned by the endpoint.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps [`InimockError`] to an HTTP response.
///
/// Every variant is the caller's fault, so every variant is a `400`.
#[derive(Debug)]
pub struct ApiError(InimockError);

impl From<InimockError> for ApiError {
    fn from(err: InimockError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self.0 {
            InimockError::MalformedRequest(source) => {
                tracing::debug!(error = %source, "rejecting malformed request");
            }
            InimockError::UnknownMethod(name) => {
                tracing::debug!(method = %name, "rejecting unknown method");
            }
            InimockError::InvalidParams(source) => {
                tracing::warn!(error = %source, "rejecting invalid parameters");
            }
        }

        let body = ErrorBody {
            error: self.0.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
