//! Client for the speech sidecar daemon (text-to-speech and transcription).
//!
//! The daemon owns the heavyweight speech models and is reached over a local
//! socket with a newline-delimited JSON protocol. If the socket is not up,
//! the client spawns the daemon once and retries after a short delay.

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::process::Stdio;
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tokio::process::Command;
use tokio::time::{sleep, Duration};

#[cfg(windows)]
use tokio::net::TcpStream;
#[cfg(unix)]
use tokio::net::UnixStream;

#[cfg(unix)]
const SOCKET_PATH: &str = "/tmp/campus_speech.sock";
#[cfg(windows)]
const TCP_ADDRESS: &str = "127.0.0.1:47362";

const STARTUP_DELAY_MS: u64 = 500;

enum SpeechStream {
  #[cfg(unix)]
  Unix(UnixStream),
  #[cfg(windows)]
  Tcp(TcpStream),
}

impl SpeechStream {
  async fn write_all(&mut self, buf: &[u8]) -> Result<(), std::io::Error> {
    match self {
      #[cfg(unix)]
      SpeechStream::Unix(stream) => stream.write_all(buf).await,
      #[cfg(windows)]
      SpeechStream::Tcp(stream) => stream.write_all(buf).await,
    }
  }
}

#[derive(Serialize)]
#[serde(tag = "op", rename_all = "snake_case")]
enum SpeechRequest {
  Synthesize { text: String, output_path: String, id: String },
  Transcribe { input_path: String, id: String },
}

#[derive(Deserialize)]
struct SpeechResponse {
  #[allow(dead_code)]
  id: String,
  transcript: Option<String>,
  error: Option<String>,
}

/// Stateless handle to the speech daemon.
#[derive(Clone, Default)]
pub struct SpeechClient;

impl SpeechClient {
  pub fn new() -> Self {
    Self
  }

  /// Synthesize `text` into a WAV file at `output_path`.
  pub async fn synthesize(&self, text: &str, output_path: &Path) -> Result<()> {
    let request = SpeechRequest::Synthesize {
      text: text.to_string(),
      output_path: output_path.to_string_lossy().to_string(),
      id: uuid::Uuid::new_v4().to_string(),
    };
    self.roundtrip(&request).await?;
    Ok(())
  }

  /// Transcribe a mono 16kHz WAV file into text.
  pub async fn transcribe(&self, wav_path: &Path) -> Result<String> {
    let request = SpeechRequest::Transcribe {
      input_path: wav_path.to_string_lossy().to_string(),
      id: uuid::Uuid::new_v4().to_string(),
    };
    let response = self.roundtrip(&request).await?;
    response.transcript.ok_or_else(|| anyhow!("daemon returned no transcript"))
  }

  async fn roundtrip(&self, request: &SpeechRequest) -> Result<SpeechResponse> {
    match send(request).await {
      Ok(response) => Ok(response),
      Err(_) => {
        // Daemon may not be running yet; start it and try once more
        start_daemon().await?;
        sleep(Duration::from_millis(STARTUP_DELAY_MS)).await;
        send(request).await
      }
    }
  }
}

async fn send(request: &SpeechRequest) -> Result<SpeechResponse> {
  let mut stream = connect_to_daemon().await?;

  let json = serde_json::to_string(request)?;
  stream.write_all(json.as_bytes()).await?;
  stream.write_all(b"\n").await?;

  let response = read_response(stream).await?;
  if let Some(error) = response.error {
    return Err(anyhow!("speech daemon error: {error}"));
  }
  Ok(response)
}

async fn read_response(stream: SpeechStream) -> Result<SpeechResponse> {
  let mut line = String::new();
  match stream {
    #[cfg(unix)]
    SpeechStream::Unix(stream) => {
      BufReader::new(stream).read_line(&mut line).await?;
    }
    #[cfg(windows)]
    SpeechStream::Tcp(stream) => {
      BufReader::new(stream).read_line(&mut line).await?;
    }
  }

  serde_json::from_str(line.trim()).map_err(|e| anyhow!("invalid daemon response: {e}"))
}

#[cfg(unix)]
async fn connect_to_daemon() -> Result<SpeechStream> {
  let stream =
    UnixStream::connect(SOCKET_PATH).await.map_err(|_| anyhow!("speech daemon not running"))?;
  Ok(SpeechStream::Unix(stream))
}

#[cfg(windows)]
async fn connect_to_daemon() -> Result<SpeechStream> {
  let stream =
    TcpStream::connect(TCP_ADDRESS).await.map_err(|_| anyhow!("speech daemon not running"))?;
  Ok(SpeechStream::Tcp(stream))
}

async fn start_daemon() -> Result<()> {
  let daemon = daemon_command()?;

  Command::new(daemon)
    .stdout(Stdio::null())
    .stderr(Stdio::null())
    .stdin(Stdio::null())
    .spawn()
    .map_err(|e| anyhow!("failed to start speech daemon: {e}"))?;

  Ok(())
}

/// Daemon executable: `CAMPUS_SPEECH_DAEMON` override, or `campus_speech_daemon`
/// next to the current executable.
fn daemon_command() -> Result<std::path::PathBuf> {
  if let Ok(custom) = std::env::var("CAMPUS_SPEECH_DAEMON") {
    return Ok(std::path::PathBuf::from(custom));
  }

  let current_exe = std::env::current_exe()?;
  let exe_dir =
    current_exe.parent().ok_or_else(|| anyhow!("could not find executable directory"))?;

  #[cfg(windows)]
  return Ok(exe_dir.join("campus_speech_daemon.exe"));
  #[cfg(unix)]
  Ok(exe_dir.join("campus_speech_daemon"))
}
