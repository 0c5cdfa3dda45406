//! The question-answering engine tying rosters, sessions, and the language
//! oracle together.

use roster::{ProfessorRecord, RosterStore, StudentRecord};
use std::sync::Arc;

use crate::intent::{classify, subject_fact, ResolvedIntent};
use crate::oracle::LanguageOracle;
use crate::session::{SessionStore, Turn};
use crate::text::clean_response;

/// Clarification sent when a personal question arrives with no identifiable
/// student.
pub const IDENTIFY_CLARIFICATION: &str = "I'd be happy to help you with your information! Could you please tell me your name or student ID so I can look up your specific details?";

/// Clarification sent when marks are requested without naming a student.
pub const MARKS_CLARIFICATION: &str = "Which student's marks would you like to know?";

/// Fixed reply when the language oracle fails for any reason.
pub const ORACLE_FALLBACK: &str = "I'm sorry, I couldn't find an answer at the moment.";

pub struct Assistant {
  students: RosterStore<StudentRecord>,
  professors: RosterStore<ProfessorRecord>,
  sessions: SessionStore,
  oracle: Arc<dyn LanguageOracle>,
}

impl Assistant {
  pub fn new(
    students: RosterStore<StudentRecord>,
    professors: RosterStore<ProfessorRecord>,
    oracle: Arc<dyn LanguageOracle>,
  ) -> Self {
    Self { students, professors, sessions: SessionStore::new(), oracle }
  }

  pub fn students(&self) -> &RosterStore<StudentRecord> {
    &self.students
  }

  pub fn professors(&self) -> &RosterStore<ProfessorRecord> {
    &self.professors
  }

  /// Answer one question within a session.
  ///
  /// The rule cascade answers identification, who-teaches, and ambiguous
  /// marks questions without touching the oracle; everything else goes
  /// through the grounding prompt. Oracle failures never propagate - callers
  /// always get a string.
  pub async fn answer(&self, session_id: &str, question: &str) -> String {
    let question = question.trim();
    let students = self.students.all();
    let professors = self.professors.all();
    let history = self.sessions.history(session_id);

    let answer = match classify(question, &students, &professors, &history) {
      ResolvedIntent::NeedsIdentification => IDENTIFY_CLARIFICATION.to_string(),
      ResolvedIntent::SubjectTeacherQuery { subject } => subject_fact(&subject, &professors),
      ResolvedIntent::AmbiguousMarksQuery => MARKS_CLARIFICATION.to_string(),
      ResolvedIntent::GroundedPrompt { prompt } => match self.oracle.complete(&prompt).await {
        Ok(reply) => clean_response(&reply),
        Err(e) => {
          tracing::warn!("language oracle failed: {e}");
          ORACLE_FALLBACK.to_string()
        }
      },
    };

    self
      .sessions
      .append(session_id, Turn { user: question.to_string(), assistant: answer.clone() });

    answer
  }
}
