//! Bounded per-session conversation history.
//!
//! The source system let histories grow without limit; here each session is
//! capped and the oldest turns are evicted ring-buffer style. The cap is a
//! documented deviation.

use std::collections::{HashMap, VecDeque};
use std::sync::{Mutex, PoisonError};

/// One question/answer exchange within a session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
  pub user: String,
  pub assistant: String,
}

/// Default number of turns retained per session.
pub const MAX_TURNS_PER_SESSION: usize = 50;

/// In-memory conversation store keyed by caller-supplied session ids.
pub struct SessionStore {
  sessions: Mutex<HashMap<String, VecDeque<Turn>>>,
  max_turns: usize,
}

impl SessionStore {
  pub fn new() -> Self {
    Self::with_limit(MAX_TURNS_PER_SESSION)
  }

  pub fn with_limit(max_turns: usize) -> Self {
    Self { sessions: Mutex::new(HashMap::new()), max_turns }
  }

  /// Snapshot of a session's turns, oldest first. Unknown sessions are empty.
  pub fn history(&self, session_id: &str) -> Vec<Turn> {
    let sessions = self.lock();
    sessions.get(session_id).map(|turns| turns.iter().cloned().collect()).unwrap_or_default()
  }

  /// Append a turn, evicting the oldest once the session is at capacity.
  pub fn append(&self, session_id: &str, turn: Turn) {
    let mut sessions = self.lock();
    let turns = sessions.entry(session_id.to_string()).or_default();
    if turns.len() >= self.max_turns {
      turns.pop_front();
    }
    turns.push_back(turn);
  }

  pub fn session_count(&self) -> usize {
    self.lock().len()
  }

  fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<String, VecDeque<Turn>>> {
    self.sessions.lock().unwrap_or_else(PoisonError::into_inner)
  }
}

impl Default for SessionStore {
  fn default() -> Self {
    Self::new()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn turn(n: usize) -> Turn {
    Turn { user: format!("question {n}"), assistant: format!("answer {n}") }
  }

  #[test]
  fn history_is_append_only_and_ordered() {
    let store = SessionStore::new();
    store.append("s1", turn(1));
    store.append("s1", turn(2));

    let history = store.history("s1");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].user, "question 1");
    assert_eq!(history[1].user, "question 2");
  }

  #[test]
  fn sessions_are_isolated() {
    let store = SessionStore::new();
    store.append("s1", turn(1));
    assert!(store.history("s2").is_empty());
  }

  #[test]
  fn oldest_turns_are_evicted_at_capacity() {
    let store = SessionStore::with_limit(2);
    store.append("s1", turn(1));
    store.append("s1", turn(2));
    store.append("s1", turn(3));

    let history = store.history("s1");
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].user, "question 2");
    assert_eq!(history[1].user, "question 3");
  }
}
