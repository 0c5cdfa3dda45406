//! Question-answering endpoint handler

use axum::extract::State;
use axum::response::Json;

use crate::server::error::ApiError;
use crate::server::types::{QueryRequest, QueryResponse};
use crate::server::SharedState;

/// POST /query - Answer one question within a session
pub async fn handle_query(
  State(state): State<SharedState>,
  Json(request): Json<QueryRequest>,
) -> Result<Json<QueryResponse>, ApiError> {
  let session_id = request
    .session_id
    .filter(|id| !id.is_empty())
    .ok_or_else(|| ApiError::MissingInput("Session ID is missing".to_string()))?;

  let answer = state.assistant.answer(&session_id, request.question.trim()).await;

  Ok(Json(QueryResponse { answer }))
}
