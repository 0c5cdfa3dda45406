//! Request and response types for the REST API.

use roster::{ProfessorRecord, StudentRecord};
use serde::{Deserialize, Serialize};

// Status Endpoint
// ===============

/// Response for `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusResponse {
  pub status: String,
}

// Query Endpoint
// ==============

/// Request for `POST /query`
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryRequest {
  /// The natural-language question
  #[serde(default)]
  pub question: String,

  /// Opaque caller-supplied session identifier
  #[serde(rename = "sessionId")]
  pub session_id: Option<String>,
}

/// Response for `POST /query`
#[derive(Debug, Serialize, Deserialize)]
pub struct QueryResponse {
  pub answer: String,
}

// Speech Endpoints
// ================

/// Request for `POST /speak`
#[derive(Debug, Serialize, Deserialize)]
pub struct SpeakRequest {
  #[serde(default)]
  pub text: String,
}

/// Request for `POST /recognize`
#[derive(Debug, Serialize, Deserialize)]
pub struct RecognizeRequest {
  /// Base64 data URL of the recorded audio
  pub audio: Option<String>,
}

/// Response for `POST /recognize`
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptResponse {
  pub transcript: String,
}

// Roster Endpoints
// ================

/// Response for student create/update operations
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentMutationResponse {
  pub status: String,
  pub student: StudentRecord,
}

/// Response for professor create/update operations
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfessorMutationResponse {
  pub status: String,
  pub professor: ProfessorRecord,
}

/// Response for student delete operations
#[derive(Debug, Serialize, Deserialize)]
pub struct StudentRemovedResponse {
  pub status: String,
  pub removed: StudentRecord,
}

/// Response for professor delete operations
#[derive(Debug, Serialize, Deserialize)]
pub struct ProfessorRemovedResponse {
  pub status: String,
  pub removed: ProfessorRecord,
}
