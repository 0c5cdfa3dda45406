//! Language-model oracle over the Ollama chat API.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicUsize, Ordering};

pub const DEFAULT_OLLAMA_URL: &str = "http://127.0.0.1:11434";
pub const DEFAULT_MODEL: &str = "gemma3:1b";

/// An opaque prompt-in/text-out completion service.
///
/// No retry, no streaming, no timeout: a slow model call blocks its request,
/// and failures are the caller's to absorb.
#[async_trait]
pub trait LanguageOracle: Send + Sync {
  async fn complete(&self, prompt: &str) -> Result<String>;
}

#[derive(Serialize)]
struct ChatMessage {
  role: &'static str,
  content: String,
}

#[derive(Serialize)]
struct ChatRequest {
  model: String,
  messages: Vec<ChatMessage>,
  stream: bool,
}

#[derive(Deserialize)]
struct ChatResponseMessage {
  content: String,
}

#[derive(Deserialize)]
struct ChatResponse {
  message: ChatResponseMessage,
}

/// Production oracle talking to a local Ollama server.
pub struct OllamaOracle {
  client: reqwest::Client,
  base_url: String,
  model: String,
}

impl OllamaOracle {
  pub fn new(base_url: impl Into<String>, model: impl Into<String>) -> Self {
    Self { client: reqwest::Client::new(), base_url: base_url.into(), model: model.into() }
  }
}

impl Default for OllamaOracle {
  fn default() -> Self {
    Self::new(DEFAULT_OLLAMA_URL, DEFAULT_MODEL)
  }
}

#[async_trait]
impl LanguageOracle for OllamaOracle {
  async fn complete(&self, prompt: &str) -> Result<String> {
    let request = ChatRequest {
      model: self.model.clone(),
      messages: vec![ChatMessage { role: "user", content: prompt.to_string() }],
      stream: false,
    };

    let response = self
      .client
      .post(format!("{}/api/chat", self.base_url))
      .json(&request)
      .send()
      .await
      .map_err(|e| anyhow!("could not reach language model: {e}"))?;

    let chat: ChatResponse =
      response.json().await.map_err(|e| anyhow!("invalid language model response: {e}"))?;

    Ok(chat.message.content)
  }
}

/// Oracle returning a fixed reply, for tests and dry runs. Tracks how often
/// it was invoked so tests can assert the rule cascade bypassed the model.
#[derive(Default)]
pub struct CannedOracle {
  pub reply: String,
  calls: AtomicUsize,
}

impl CannedOracle {
  pub fn replying(reply: &str) -> Self {
    Self { reply: reply.to_string(), calls: AtomicUsize::new(0) }
  }

  pub fn call_count(&self) -> usize {
    self.calls.load(Ordering::SeqCst)
  }
}

#[async_trait]
impl LanguageOracle for CannedOracle {
  async fn complete(&self, _prompt: &str) -> Result<String> {
    self.calls.fetch_add(1, Ordering::SeqCst);
    Ok(self.reply.clone())
  }
}

/// Oracle that always fails, for exercising fallback paths in tests.
#[derive(Default)]
pub struct FailingOracle;

#[async_trait]
impl LanguageOracle for FailingOracle {
  async fn complete(&self, _prompt: &str) -> Result<String> {
    Err(anyhow!("oracle offline"))
  }
}
