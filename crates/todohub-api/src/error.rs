//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use todohub_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Human-readable message.
    pub error: String,
}

/// Newtype over [`AppError`] carrying the HTTP mapping.
///
/// Handlers return `Result<_, ApiError>`; the `From` impl lets domain
/// errors propagate with `?`.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self.0.kind {
            ErrorKind::Validation => StatusCode::BAD_REQUEST,
            ErrorKind::Unauthenticated => StatusCode::UNAUTHORIZED,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Database
            | ErrorKind::Configuration
            | ErrorKind::Serialization
            | ErrorKind::Internal => {
                tracing::error!(error = %self.0.message, kind = %self.0.kind, "Request failed");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        // Internal detail stays in the log; the body carries the message
        // only for client-caused errors.
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            "Something went wrong".to_string()
        } else {
            self.0.message
        };

        (status, Json(ApiErrorResponse { error: message })).into_response()
    }
}
