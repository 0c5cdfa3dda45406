use dirs::home_dir;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;

/// Errors surfaced by roster store operations.
#[derive(Debug, Error)]
pub enum StoreError {
  #[error("record at index {0} not found")]
  NotFound(usize),

  #[error("could not find home directory")]
  NoHomeDir,

  #[error(transparent)]
  Io(#[from] std::io::Error),

  #[error(transparent)]
  Serde(#[from] serde_json::Error),
}

/// A JSON-file-backed record collection.
///
/// The whole file is read once at open and held in memory; every mutation
/// rewrites the whole file while the lock is held, so there is exactly one
/// writer per file at a time. Record identity is positional - there are no
/// stable ids in the data.
pub struct RosterStore<T> {
  path: PathBuf,
  records: Mutex<Vec<T>>,
}

impl<T: Clone + Serialize + DeserializeOwned> RosterStore<T> {
  /// Open a store over the given JSON file.
  ///
  /// A missing or unparseable file yields an empty roster rather than an
  /// error, matching how the data files are bootstrapped.
  pub fn open(path: impl Into<PathBuf>) -> Self {
    let path = path.into();
    let records = match fs::read_to_string(&path) {
      Ok(content) => match serde_json::from_str::<Vec<T>>(&content) {
        Ok(records) => records,
        Err(e) => {
          tracing::warn!("could not parse {}: {e}, starting empty", path.display());
          Vec::new()
        }
      },
      Err(_) => Vec::new(),
    };

    Self { path, records: Mutex::new(records) }
  }

  /// Path of the backing file.
  pub fn path(&self) -> &Path {
    &self.path
  }

  /// Snapshot of every record, in roster order.
  pub fn all(&self) -> Vec<T> {
    self.lock().clone()
  }

  pub fn len(&self) -> usize {
    self.lock().len()
  }

  pub fn is_empty(&self) -> bool {
    self.lock().is_empty()
  }

  /// Append a record and rewrite the backing file.
  pub fn add(&self, record: T) -> Result<(), StoreError> {
    let mut records = self.lock();
    records.push(record);
    self.persist(&records)
  }

  /// Replace the record at `index` and rewrite the backing file.
  pub fn update(&self, index: usize, record: T) -> Result<T, StoreError> {
    let mut records = self.lock();
    if index >= records.len() {
      return Err(StoreError::NotFound(index));
    }
    records[index] = record.clone();
    self.persist(&records)?;
    Ok(record)
  }

  /// Remove and return the record at `index`, rewriting the backing file.
  pub fn remove(&self, index: usize) -> Result<T, StoreError> {
    let mut records = self.lock();
    if index >= records.len() {
      return Err(StoreError::NotFound(index));
    }
    let removed = records.remove(index);
    self.persist(&records)?;
    Ok(removed)
  }

  fn persist(&self, records: &[T]) -> Result<(), StoreError> {
    if let Some(parent) = self.path.parent() {
      fs::create_dir_all(parent)?;
    }
    let json = serde_json::to_string_pretty(records)?;
    fs::write(&self.path, json)?;
    Ok(())
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, Vec<T>> {
    self.records.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

/// Root directory for the assistant's data files (~/.campus/data).
///
/// `CAMPUS_DATA_DIR` overrides the default so tests and deployments can
/// relocate the roster files.
pub fn data_root() -> Result<PathBuf, StoreError> {
  if let Ok(custom_root) = std::env::var("CAMPUS_DATA_DIR") {
    return Ok(PathBuf::from(custom_root));
  }

  let home = home_dir().ok_or(StoreError::NoHomeDir)?;
  Ok(home.join(".campus").join("data"))
}

/// Default location of the student roster file.
pub fn students_path() -> Result<PathBuf, StoreError> {
  Ok(data_root()?.join("students.json"))
}

/// Default location of the professor roster file.
pub fn professors_path() -> Result<PathBuf, StoreError> {
  Ok(data_root()?.join("professors.json"))
}
