use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use thiserror::Error;
use tracing::error;
use crate::models::validation::FieldViolation;
use crate::repositories::RepositoryError;

/// Failure of a request, rendered as a JSON body with a matching status code.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("request failed validation")]
    Validation(Vec<FieldViolation>),

    #[error("{message}")]
    MalformedBody { status: StatusCode, message: String },

    #[error("no endpoint at {path}")]
    NotFound { path: String },

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match &self {
            Self::Validation(violations) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                json!({
                    "error": "validation_error",
                    "message": self.to_string(),
                    "violations": violations,
                }),
            ),
            Self::MalformedBody { status, message } => (
                *status,
                json!({
                    "error": "malformed_body",
                    "message": message,
                }),
            ),
            Self::NotFound { .. } => (
                StatusCode::NOT_FOUND,
                json!({
                    "error": "not_found",
                    "message": self.to_string(),
                }),
            ),
            Self::Repository(e) => {
                error!("Reservation store failed: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({
                        "error": "internal_error",
                        "message": "an internal error occurred",
                    }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
