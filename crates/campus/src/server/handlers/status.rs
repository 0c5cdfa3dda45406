//! Status endpoint handler

use axum::response::Json;

use crate::server::types::StatusResponse;

/// GET / - Liveness check
pub async fn home() -> Json<StatusResponse> {
  Json(StatusResponse { status: "Backend is running.".to_string() })
}
