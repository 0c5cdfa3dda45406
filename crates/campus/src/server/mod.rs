//! REST API module for the campus assistant
//!
//! Provides the HTTP endpoints for question answering, speech synthesis and
//! recognition, and roster administration. Uses axum for routing.

pub mod error;
pub mod handlers;
pub mod middleware;
pub mod routing;
pub mod startup;
pub mod types;

use std::path::PathBuf;
use std::sync::Arc;

use crate::assistant::Assistant;
use crate::oracle::SpeechClient;

/// Shared state handed to every handler.
pub struct AppState {
  pub assistant: Assistant,
  pub speech: SpeechClient,
  pub audio_dir: PathBuf,
}

pub type SharedState = Arc<AppState>;
