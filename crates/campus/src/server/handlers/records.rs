//! Roster administration endpoint handlers
//!
//! CRUD over the student and professor stores. Records are addressed by
//! their position in the roster; the stores serialize every
//! mutate-and-persist under their own lock.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use roster::{ProfessorRecord, StoreError, StudentRecord};

use crate::server::error::ApiError;
use crate::server::types::{
  ProfessorMutationResponse, ProfessorRemovedResponse, StudentMutationResponse,
  StudentRemovedResponse,
};
use crate::server::SharedState;

fn map_store_error(e: StoreError, not_found_message: &str) -> ApiError {
  match e {
    StoreError::NotFound(_) => ApiError::NotFound(not_found_message.to_string()),
    other => ApiError::Internal(other.to_string()),
  }
}

// Students
// ========

/// GET /api/students - Full student roster
pub async fn list_students(State(state): State<SharedState>) -> Json<Vec<StudentRecord>> {
  Json(state.assistant.students().all())
}

/// POST /api/students - Append a student record
pub async fn add_student(
  State(state): State<SharedState>,
  Json(student): Json<StudentRecord>,
) -> Result<(StatusCode, Json<StudentMutationResponse>), ApiError> {
  state
    .assistant
    .students()
    .add(student.clone())
    .map_err(|e| ApiError::Internal(e.to_string()))?;

  Ok((
    StatusCode::CREATED,
    Json(StudentMutationResponse { status: "ok".to_string(), student }),
  ))
}

/// PUT /api/students/{index} - Replace a student record
pub async fn update_student(
  State(state): State<SharedState>,
  Path(index): Path<usize>,
  Json(student): Json<StudentRecord>,
) -> Result<Json<StudentMutationResponse>, ApiError> {
  let student = state
    .assistant
    .students()
    .update(index, student)
    .map_err(|e| map_store_error(e, "Student not found"))?;

  Ok(Json(StudentMutationResponse { status: "ok".to_string(), student }))
}

/// DELETE /api/students/{index} - Remove a student record
pub async fn remove_student(
  State(state): State<SharedState>,
  Path(index): Path<usize>,
) -> Result<Json<StudentRemovedResponse>, ApiError> {
  let removed = state
    .assistant
    .students()
    .remove(index)
    .map_err(|e| map_store_error(e, "Student not found"))?;

  Ok(Json(StudentRemovedResponse { status: "ok".to_string(), removed }))
}

// Professors
// ==========

/// GET /api/professors - Full professor roster
pub async fn list_professors(State(state): State<SharedState>) -> Json<Vec<ProfessorRecord>> {
  Json(state.assistant.professors().all())
}

/// POST /api/professors - Append a professor record
pub async fn add_professor(
  State(state): State<SharedState>,
  Json(professor): Json<ProfessorRecord>,
) -> Result<(StatusCode, Json<ProfessorMutationResponse>), ApiError> {
  state
    .assistant
    .professors()
    .add(professor.clone())
    .map_err(|e| ApiError::Internal(e.to_string()))?;

  Ok((
    StatusCode::CREATED,
    Json(ProfessorMutationResponse { status: "ok".to_string(), professor }),
  ))
}

/// PUT /api/professors/{index} - Replace a professor record
pub async fn update_professor(
  State(state): State<SharedState>,
  Path(index): Path<usize>,
  Json(professor): Json<ProfessorRecord>,
) -> Result<Json<ProfessorMutationResponse>, ApiError> {
  let professor = state
    .assistant
    .professors()
    .update(index, professor)
    .map_err(|e| map_store_error(e, "Professor not found"))?;

  Ok(Json(ProfessorMutationResponse { status: "ok".to_string(), professor }))
}

/// DELETE /api/professors/{index} - Remove a professor record
pub async fn remove_professor(
  State(state): State<SharedState>,
  Path(index): Path<usize>,
) -> Result<Json<ProfessorRemovedResponse>, ApiError> {
  let removed = state
    .assistant
    .professors()
    .remove(index)
    .map_err(|e| map_store_error(e, "Professor not found"))?;

  Ok(Json(ProfessorRemovedResponse { status: "ok".to_string(), removed }))
}
