use axum::{extract::State, http::StatusCode, response::IntoResponse};

use crate::handlers::ApiError;
use crate::state::AppState;

/// Health check endpoint
#[tracing::instrument]
pub async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, "OK")
}

/// Database health check endpoint: runs `SELECT 1` over a fresh connection
#[tracing::instrument(skip(state))]
pub async fn db_health_check(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    state.connector.ping().await?;
    Ok((StatusCode::OK, "OK"))
}
