//! Speech synthesis and recognition endpoint handlers

use axum::extract::State;
use axum::response::Json;

use crate::audio;
use crate::server::error::ApiError;
use crate::server::types::{RecognizeRequest, SpeakRequest, StatusResponse, TranscriptResponse};
use crate::server::SharedState;
use crate::text::clean_response;

const TEST_SENTENCE: &str = "This is a test. The assistant voice is working perfectly.";

/// POST /speak - Synthesize text into the shared output WAV
pub async fn speak(
  State(state): State<SharedState>,
  Json(request): Json<SpeakRequest>,
) -> Result<Json<StatusResponse>, ApiError> {
  let cleaned = clean_response(&request.text);
  let output_path = state.audio_dir.join("output.wav");

  state.speech.synthesize(&cleaned, &output_path).await.map_err(|e| {
    tracing::warn!("TTS failed: {e}");
    ApiError::Oracle("TTS processing failed".to_string())
  })?;

  Ok(Json(StatusResponse { status: "ok".to_string() }))
}

/// POST /recognize - Transcribe a base64 data-URL recording
pub async fn recognize(
  State(state): State<SharedState>,
  Json(request): Json<RecognizeRequest>,
) -> Result<Json<TranscriptResponse>, ApiError> {
  let audio_data = request
    .audio
    .filter(|data| !data.is_empty())
    .ok_or_else(|| ApiError::MissingInput("No audio data provided".to_string()))?;

  let audio_bytes = audio::decode_audio_data_url(&audio_data)
    .map_err(|e| ApiError::Oracle(format!("Speech recognition failed: {e}")))?;

  let wav = audio::convert_to_wav(&audio_bytes).await.map_err(|e| {
    tracing::warn!("audio conversion failed: {e}");
    ApiError::Oracle("Audio conversion failed".to_string())
  })?;

  let transcript = state
    .speech
    .transcribe(wav.path())
    .await
    .map_err(|e| ApiError::Oracle(format!("Speech recognition failed: {e}")))?;

  Ok(Json(TranscriptResponse { transcript: transcript.trim().to_string() }))
}

/// GET /test - Synthesize a fixed sentence to verify the voice path
pub async fn test_synthesis(
  State(state): State<SharedState>,
) -> Result<Json<StatusResponse>, ApiError> {
  let output_path = state.audio_dir.join("output.wav");

  state.speech.synthesize(TEST_SENTENCE, &output_path).await.map_err(|e| {
    tracing::warn!("TTS test failed: {e}");
    ApiError::Oracle("TTS test failed".to_string())
  })?;

  Ok(Json(StatusResponse { status: "TTS test complete".to_string() }))
}
