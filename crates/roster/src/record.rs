use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A student entry in the roster.
///
/// The only field the assistant relies on is `name`; everything else in the
/// source JSON (marks, attendance, remarks, roll numbers) is carried in the
/// flattened `extra` map so round-trips through the store never drop data.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StudentRecord {
  #[serde(default)]
  pub name: String,

  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl StudentRecord {
  pub fn named(name: &str) -> Self {
    Self { name: name.to_string(), extra: Map::new() }
  }
}

/// A professor entry in the roster.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfessorRecord {
  #[serde(default)]
  pub name: String,

  #[serde(default)]
  pub subject: String,

  #[serde(skip_serializing_if = "Option::is_none")]
  pub email: Option<String>,

  #[serde(flatten)]
  pub extra: Map<String, Value>,
}

impl ProfessorRecord {
  pub fn teaching(name: &str, subject: &str) -> Self {
    Self {
      name: name.to_string(),
      subject: subject.to_string(),
      email: None,
      extra: Map::new(),
    }
  }
}
