use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;

use service::errors::ServiceError;

/// Central error type for the HTTP handlers. Every validation or
/// persistence failure funnels through here and maps onto the status and
/// body the API contract promises.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    Validation(String),
    #[error("malformatted id")]
    MalformattedId,
    #[error("not found")]
    NotFound,
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<ServiceError> for ApiError {
    fn from(e: ServiceError) -> Self {
        match e {
            ServiceError::Validation(msg) => ApiError::Validation(msg),
            ServiceError::NotFound(_) => ApiError::NotFound,
            ServiceError::Storage(msg) => ApiError::Internal(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Validation(msg) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": msg }))).into_response()
            }
            ApiError::MalformattedId => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "malformatted id" })),
            )
                .into_response(),
            // Missing records answer with an empty 404 body.
            ApiError::NotFound => StatusCode::NOT_FOUND.into_response(),
            ApiError::Internal(msg) => {
                error!(error = %msg, "request failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "internal server error" })),
                )
                    .into_response()
            }
        }
    }
}
