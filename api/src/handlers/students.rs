use axum::{extract::State, http::StatusCode, Json};

use crate::handlers::{ApiError, CreatedResponse, MessageResponse};
use crate::state::AppState;
use common::models::{CreateStudentRequest, StudentRow};

/// Create the `students` table
///
/// Invoked once at setup time; safe to call again, later invocations are
/// schema no-ops.
#[tracing::instrument(skip(state))]
pub async fn init_table(
    State(state): State<AppState>,
) -> Result<Json<MessageResponse>, ApiError> {
    state.students().create_table().await?;

    Ok(Json(MessageResponse::new(
        "Table 'students' created successfully.",
    )))
}

/// List all students ordered by first name
///
/// Each student is a positional `[id, fname, lname, nickname, phone,
/// image_url]` tuple; `created_at` never leaves the database.
#[tracing::instrument(skip(state))]
pub async fn list_students(
    State(state): State<AppState>,
) -> Result<Json<Vec<StudentRow>>, ApiError> {
    let students = state.students().list_all().await?;

    let rows = students.into_iter().map(|s| s.into_row()).collect();
    Ok(Json(rows))
}

/// Register a new student
///
/// Required fields are checked before any connection is opened; a missing or
/// empty first/last name never reaches the database.
#[tracing::instrument(skip(state, req))]
pub async fn create_student(
    State(state): State<AppState>,
    Json(req): Json<CreateStudentRequest>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let new_student = req.validate()?;

    let id = state.students().insert(&new_student).await?;

    tracing::info!(student_id = id, "Student added");
    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Student added successfully.".to_string(),
            id,
        }),
    ))
}
