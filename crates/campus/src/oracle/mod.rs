//! Clients for the external oracles the assistant leans on.
//!
//! The language model, text-to-speech, and speech-to-text engines all live
//! outside this process and are treated as opaque text-in/text-out (or
//! audio-in/audio-out) functions.

pub mod language;
pub mod speech;

pub use language::{CannedOracle, FailingOracle, LanguageOracle, OllamaOracle};
pub use speech::SpeechClient;
