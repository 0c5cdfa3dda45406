//! Audio intake for speech recognition.
//!
//! Browsers send recordings as base64 data URLs, usually webm/opus. The
//! speech engine wants mono 16kHz WAV, so the payload is decoded to a temp
//! file and converted with ffmpeg before transcription.

use anyhow::{anyhow, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::io::Write;
use tempfile::NamedTempFile;
use tokio::process::Command;

/// Decode the payload of a base64 data URL (`data:...;base64,<payload>`).
///
/// A bare base64 string without the data-URL prefix is accepted too.
pub fn decode_audio_data_url(data: &str) -> Result<Vec<u8>> {
  let payload = match data.split_once(',') {
    Some((_, payload)) => payload,
    None => data,
  };
  STANDARD.decode(payload.trim()).map_err(|e| anyhow!("invalid base64 audio payload: {e}"))
}

/// Convert raw audio bytes to a mono 16kHz WAV temp file via ffmpeg.
///
/// Both temp files live as long as the returned handle.
pub async fn convert_to_wav(input: &[u8]) -> Result<NamedTempFile> {
  let mut source = tempfile::Builder::new().suffix(".webm").tempfile()?;
  source.write_all(input)?;
  source.flush()?;

  let wav = tempfile::Builder::new().suffix(".wav").tempfile()?;

  let status = Command::new("ffmpeg")
    .arg("-y")
    .arg("-loglevel")
    .arg("error")
    .arg("-i")
    .arg(source.path())
    .arg("-ac")
    .arg("1")
    .arg("-ar")
    .arg("16000")
    .arg(wav.path())
    .status()
    .await
    .map_err(|e| anyhow!("could not run ffmpeg: {e}"))?;

  if !status.success() {
    return Err(anyhow!("ffmpeg exited with {status}"));
  }

  Ok(wav)
}
