pub mod health;
pub mod students;

// Common response types
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use common::errors::{DatabaseError, ValidationError};

/// Standard API error response body: `{"error": <text>}`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Handler-boundary error type
///
/// Client input failures map to 400 and are produced before any database
/// interaction; everything database-side maps to 500 and carries the raw
/// underlying error text. Nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Database(#[from] DatabaseError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}

/// Acknowledgement payload with a human-readable message
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Payload returned when a student has been created
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_errors_map_to_bad_request() {
        let response =
            ApiError::Validation(ValidationError::MissingRequiredNames).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn database_errors_map_to_internal_server_error() {
        let err = DatabaseError::ConnectionFailed("connection refused".to_string());
        let response = ApiError::Database(err).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
