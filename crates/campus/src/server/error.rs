//! API error taxonomy and HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

/// Everything a handler can fail with. Raw stack traces never reach the
/// caller; each variant maps to a status code and an `{"error": ...}` body.
#[derive(Debug, Error)]
pub enum ApiError {
  /// A required request field is absent or empty.
  #[error("{0}")]
  MissingInput(String),

  /// The addressed record does not exist.
  #[error("{0}")]
  NotFound(String),

  /// An external oracle (model, TTS, STT) failed.
  #[error("{0}")]
  Oracle(String),

  /// Anything else that went wrong server-side.
  #[error("{0}")]
  Internal(String),
}

#[derive(Serialize)]
struct ErrorBody {
  error: String,
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = match &self {
      ApiError::MissingInput(_) => StatusCode::BAD_REQUEST,
      ApiError::NotFound(_) => StatusCode::NOT_FOUND,
      ApiError::Oracle(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    (status, Json(ErrorBody { error: self.to_string() })).into_response()
  }
}
