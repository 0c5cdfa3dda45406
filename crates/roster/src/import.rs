//! One-time migration of the legacy plain-text rosters into JSON.
//!
//! The source files are loosely structured `Key: Value` blocks, one per
//! record, with a nested `Marks:` list for students and free-running
//! continuation lines for remarks. The parser is deliberately forgiving:
//! unknown keys are kept as-is (lowercased, spaces to underscores).

use anyhow::{Context, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Number, Value};
use std::fs;
use std::path::Path;

use crate::record::{ProfessorRecord, StudentRecord};

static STUDENT_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"Student \d+:\s*\n").unwrap());
static PROFESSOR_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"Professor \d+:\n").unwrap());
static KEY_VALUE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^([^:]+):\s*(.*)$").unwrap());
static MARK_ITEM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\s*-\s*([^:]+):\s*(\d+)").unwrap());

fn clean_key(key: &str) -> String {
  key.trim().to_lowercase().replace(' ', "_")
}

/// Parse the legacy `student.txt` format into student records.
pub fn parse_students(content: &str) -> Vec<StudentRecord> {
  let mut students = Vec::new();

  for block in STUDENT_BLOCK.split(content.trim()) {
    if block.trim().is_empty() {
      continue;
    }

    let mut fields: Map<String, Value> = Map::new();
    // Tracks whether we are inside a Marks: list or a multi-line remark
    let mut current_key: Option<&str> = None;

    for line in block.trim().lines() {
      // Mark items must win over the generic Key: Value form, which would
      // otherwise swallow them as a "-_subject" field
      if line.trim_start().starts_with('-') && fields.contains_key("marks") {
        if let Some(caps) = MARK_ITEM.captures(line) {
          let subject = caps[1].trim().to_string();
          let score: i64 = caps[2].parse().unwrap_or(0);
          if let Some(Value::Object(marks)) = fields.get_mut("marks") {
            marks.insert(subject, Value::Number(Number::from(score)));
          }
        }
      } else if let Some(caps) = KEY_VALUE.captures(line) {
        let key = clean_key(&caps[1]);
        let value = caps[2].trim();

        if key == "marks" && value.is_empty() {
          fields.insert("marks".to_string(), Value::Object(Map::new()));
          current_key = Some("marks");
        } else if key == "remarks" && !value.is_empty() {
          fields.insert("remarks".to_string(), Value::String(value.to_string()));
          current_key = Some("remarks");
        } else if !value.is_empty() {
          fields.insert(key, Value::String(value.to_string()));
          current_key = None;
        }
      } else if current_key == Some("remarks") && !line.trim().is_empty() {
        if let Some(Value::String(remarks)) = fields.get_mut("remarks") {
          remarks.push(' ');
          remarks.push_str(line.trim());
        }
      }
    }

    // Standardize key variants seen across the legacy files
    if let Some(roll) = fields.remove("roll_number") {
      fields.insert("roll_no".to_string(), roll);
    }
    if let Some(summary) = fields.remove("performance_summary") {
      fields.insert("remarks".to_string(), summary);
    }

    if !fields.is_empty() {
      let name = match fields.remove("name") {
        Some(Value::String(name)) => name,
        _ => String::new(),
      };
      students.push(StudentRecord { name, extra: fields });
    }
  }

  students
}

/// Parse the legacy `professor.txt` format into professor records.
pub fn parse_professors(content: &str) -> Vec<ProfessorRecord> {
  let mut professors = Vec::new();

  for block in PROFESSOR_BLOCK.split(content.trim()) {
    if block.trim().is_empty() {
      continue;
    }

    let mut fields: Map<String, Value> = Map::new();
    for line in block.trim().lines() {
      if let Some((key, value)) = line.split_once(':') {
        fields.insert(clean_key(key), Value::String(value.trim().to_string()));
      }
    }

    let take = |fields: &mut Map<String, Value>, key: &str| match fields.remove(key) {
      Some(Value::String(s)) => Some(s),
      _ => None,
    };

    let name = take(&mut fields, "name").unwrap_or_default();
    let subject = take(&mut fields, "subject").unwrap_or_default();
    let email = take(&mut fields, "email");

    professors.push(ProfessorRecord { name, subject, email, extra: fields });
  }

  professors
}

/// Convert both legacy text files and write the JSON rosters.
///
/// Returns the number of student and professor records written.
pub fn run(
  students_txt: &Path,
  professors_txt: &Path,
  output_dir: &Path,
) -> Result<(usize, usize)> {
  fs::create_dir_all(output_dir)?;

  let student_content = fs::read_to_string(students_txt)
    .with_context(|| format!("could not read {}", students_txt.display()))?;
  let students = parse_students(&student_content);
  let students_out = output_dir.join("students.json");
  fs::write(&students_out, serde_json::to_string_pretty(&students)?)?;
  tracing::info!("converted {} student records to {}", students.len(), students_out.display());

  let professor_content = fs::read_to_string(professors_txt)
    .with_context(|| format!("could not read {}", professors_txt.display()))?;
  let professors = parse_professors(&professor_content);
  let professors_out = output_dir.join("professors.json");
  fs::write(&professors_out, serde_json::to_string_pretty(&professors)?)?;
  tracing::info!(
    "converted {} professor records to {}",
    professors.len(),
    professors_out.display()
  );

  Ok((students.len(), professors.len()))
}
