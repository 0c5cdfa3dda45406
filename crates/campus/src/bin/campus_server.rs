//! Campus REST Server
//!
//! HTTP API for the campus assistant: question answering, speech synthesis
//! and recognition, and roster administration.

use anyhow::Result;
use clap::Parser;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{filter::EnvFilter, fmt, prelude::*};

use campus::oracle::{OllamaOracle, SpeechClient};
use campus::server::startup::start_server;
use campus::server::AppState;
use campus::Assistant;
use roster::{ProfessorRecord, RosterStore, StudentRecord};

#[derive(Parser)]
#[command(name = "campus_server")]
#[command(about = "Campus Assistant REST API Server")]
#[command(version)]
struct Args {
  /// Server bind address
  #[arg(long, default_value = "127.0.0.1:5000")]
  bind: SocketAddr,

  /// Data directory holding the roster JSON files
  #[arg(long, env = "CAMPUS_DATA_DIR")]
  data_dir: Option<PathBuf>,

  /// Directory synthesized audio is written to and served from
  #[arg(long)]
  audio_dir: Option<PathBuf>,

  /// Base URL of the Ollama server
  #[arg(long, default_value = campus::oracle::language::DEFAULT_OLLAMA_URL)]
  ollama_url: String,

  /// Language model to query
  #[arg(long, default_value = campus::oracle::language::DEFAULT_MODEL)]
  model: String,

  /// Enable verbose logging
  #[arg(short, long)]
  verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
  let args = Args::parse();

  let filter = if args.verbose {
    EnvFilter::new("debug,hyper=info,reqwest=info")
  } else {
    EnvFilter::new("campus=info,roster=info,tower_http=warn")
  };
  tracing_subscriber::registry().with(fmt::layer()).with(filter).init();

  let data_dir = match args.data_dir {
    Some(dir) => dir,
    None => roster::data_root()?,
  };
  let audio_dir = args.audio_dir.unwrap_or_else(|| data_dir.join("audio"));

  let students: RosterStore<StudentRecord> = RosterStore::open(data_dir.join("students.json"));
  let professors: RosterStore<ProfessorRecord> =
    RosterStore::open(data_dir.join("professors.json"));
  tracing::info!(
    "loaded {} student and {} professor records from {}",
    students.len(),
    professors.len(),
    data_dir.display()
  );

  let oracle = Arc::new(OllamaOracle::new(args.ollama_url, args.model));
  let assistant = Assistant::new(students, professors, oracle);

  let state = Arc::new(AppState { assistant, speech: SpeechClient::new(), audio_dir });

  start_server(args.bind, state).await
}
