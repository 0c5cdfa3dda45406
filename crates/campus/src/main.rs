use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

use campus::oracle::OllamaOracle;
use campus::{resolve_student, Assistant};
use roster::{ProfessorRecord, RosterStore, StudentRecord};

#[derive(Parser)]
#[command(name = "campus")]
#[command(about = "Campus Assistant\nAsk questions about the student and professor rosters from the terminal")]
#[command(version)]
struct Cli {
  /// Data directory holding the roster JSON files
  #[arg(long, env = "CAMPUS_DATA_DIR", global = true)]
  data_dir: Option<PathBuf>,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Ask the assistant one question
  Ask {
    /// The question to ask
    question: String,
    /// Session identifier to group follow-up questions
    #[arg(long, default_value = "cli")]
    session: String,
    /// Base URL of the Ollama server
    #[arg(long, default_value = campus::oracle::language::DEFAULT_OLLAMA_URL)]
    ollama_url: String,
    /// Language model to query
    #[arg(long, default_value = campus::oracle::language::DEFAULT_MODEL)]
    model: String,
  },
  /// Try the fuzzy name resolver against the student roster
  Resolve {
    /// Candidate name to resolve
    name: String,
  },
}

#[tokio::main]
async fn main() -> Result<()> {
  tracing_subscriber::fmt().with_env_filter(
    tracing_subscriber::EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("campus=warn")),
  )
  .init();

  let cli = Cli::parse();

  let data_dir = match cli.data_dir {
    Some(dir) => dir,
    None => roster::data_root()?,
  };
  let students: RosterStore<StudentRecord> = RosterStore::open(data_dir.join("students.json"));
  let professors: RosterStore<ProfessorRecord> =
    RosterStore::open(data_dir.join("professors.json"));

  match cli.command {
    Command::Ask { question, session, ollama_url, model } => {
      let oracle = Arc::new(OllamaOracle::new(ollama_url, model));
      let assistant = Assistant::new(students, professors, oracle);
      let answer = assistant.answer(&session, &question).await;
      println!("{answer}");
    }
    Command::Resolve { name } => {
      let roster = students.all();
      match resolve_student(&name, &roster) {
        Some(student) => println!("Matched: {}", student.name),
        None => println!("No match for \"{name}\""),
      }
    }
  }

  Ok(())
}
