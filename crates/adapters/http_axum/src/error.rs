//! HTTP error response mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use tagstore_domain::error::TagstoreError;

/// JSON error body returned by API endpoints.
#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

/// Maps failures to an HTTP response with appropriate status code.
pub enum ApiError {
    /// A domain or storage failure from a service call.
    Domain(TagstoreError),
    /// The bearer credential was missing or invalid.
    Unauthorized(&'static str),
}

impl From<TagstoreError> for ApiError {
    fn from(err: TagstoreError) -> Self {
        Self::Domain(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            Self::Domain(TagstoreError::Validation(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(TagstoreError::NotFound(err)) => (StatusCode::NOT_FOUND, err.to_string()),
            // The original surface reports conflicts as 400, not 409.
            Self::Domain(TagstoreError::Conflict(err)) => {
                (StatusCode::BAD_REQUEST, err.to_string())
            }
            Self::Domain(TagstoreError::Storage(err)) => {
                tracing::error!(error = %err, "storage error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "internal server error".to_string(),
                )
            }
            Self::Unauthorized(message) => (StatusCode::UNAUTHORIZED, message.to_string()),
        };

        (status, Json(ErrorBody { error: message })).into_response()
    }
}
