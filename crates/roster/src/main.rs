use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use roster::{import, ProfessorRecord, RosterStore, StudentRecord};

#[derive(Parser)]
#[command(name = "roster")]
#[command(about = "Roster - campus record store tooling\nConvert legacy text rosters and inspect the JSON stores")]
#[command(version)]
struct Cli {
  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Convert the legacy text rosters into JSON data files
  Import {
    /// Legacy student roster text file
    #[arg(long, default_value = "student.txt")]
    students: PathBuf,
    /// Legacy professor roster text file
    #[arg(long, default_value = "professor.txt")]
    professors: PathBuf,
    /// Output directory for the JSON files
    #[arg(long)]
    out: Option<PathBuf>,
  },
  /// List the records currently in the stores
  List {
    /// Show every field, not just names
    #[arg(short, long)]
    verbose: bool,
  },
}

fn main() -> Result<()> {
  tracing_subscriber::fmt().with_env_filter(
    tracing_subscriber::EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("roster=info")),
  )
  .init();

  let cli = Cli::parse();

  match cli.command {
    Command::Import { students, professors, out } => {
      let out = match out {
        Some(out) => out,
        None => roster::data_root()?,
      };
      let (student_count, professor_count) = import::run(&students, &professors, &out)?;
      println!("Converted {student_count} student and {professor_count} professor records");
      println!("Data written to {}", out.display());
    }
    Command::List { verbose } => {
      let students: RosterStore<StudentRecord> = RosterStore::open(roster::store::students_path()?);
      let professors: RosterStore<ProfessorRecord> =
        RosterStore::open(roster::store::professors_path()?);

      println!("Students ({}):", students.len());
      for student in students.all() {
        if verbose {
          println!("  {}", serde_json::to_string(&student)?);
        } else {
          println!("  {}", student.name);
        }
      }

      println!("Professors ({}):", professors.len());
      for professor in professors.all() {
        if verbose {
          println!("  {}", serde_json::to_string(&professor)?);
        } else {
          println!("  {} ({})", professor.name, professor.subject);
        }
      }
    }
  }

  Ok(())
}
