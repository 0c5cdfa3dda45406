//! Rule-based intent classification for incoming questions.
//!
//! The rules run in a fixed precedence and the first one that fires decides
//! the outcome. Keyword checks are plain substring tests against the
//! lowercased question, matching the original system's behavior.

use roster::{ProfessorRecord, StudentRecord};

use crate::prompt::{build_prompt, render_history};
use crate::resolver::resolve_student;
use crate::session::Turn;

/// Phrases that signal the caller is asking about themselves.
const SELF_REFERENCES: [&str; 6] = ["my", "i", "me", "myself", "i am", "my name"];

/// Keywords that mark a question as general-academic rather than personal.
const ACADEMIC_KEYWORDS: [&str; 12] = [
  "teaches",
  "teach",
  "professor",
  "teacher",
  "subject",
  "subjects",
  "physics",
  "math",
  "chemistry",
  "biology",
  "computer",
  "engineering",
];

/// Subjects recognized for direct who-teaches-what answers, scanned in order.
const KNOWN_SUBJECTS: [&str; 5] = ["physics", "mathematics", "math", "chemistry", "biology"];

/// Keywords that make a question about marks or grades.
const MARK_KEYWORDS: [&str; 6] = ["mark", "marks", "score", "scores", "grade", "grades"];

/// Outcome of classifying one question. Computed per request, never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedIntent {
  /// Personal question with no identifiable student; ask who they are.
  NeedsIdentification,
  /// Who-teaches-X question answerable straight from the professor roster.
  SubjectTeacherQuery { subject: String },
  /// Marks question naming no student; ask which one.
  AmbiguousMarksQuery,
  /// Everything else: a fully assembled prompt for the language oracle.
  GroundedPrompt { prompt: String },
}

/// Classify a question against the rosters and the session's history.
pub fn classify(
  question: &str,
  students: &[StudentRecord],
  professors: &[ProfessorRecord],
  history: &[Turn],
) -> ResolvedIntent {
  let lowered = question.to_lowercase();
  let history_text = render_history(history);

  let is_self_reference = SELF_REFERENCES.iter().any(|phrase| lowered.contains(phrase));
  let is_academic = ACADEMIC_KEYWORDS.iter().any(|keyword| lowered.contains(keyword));

  // A student already named earlier in the session counts as identified
  let mut active_student = if history.is_empty() {
    None
  } else {
    let lowered_history = history_text.to_lowercase();
    students.iter().find(|student| {
      let name = student.name.to_lowercase();
      !name.is_empty() && lowered_history.contains(&name)
    })
  };

  if is_self_reference && !is_academic && !students.is_empty() && active_student.is_none() {
    // Maybe the caller just told us their name in this very question
    active_student = lowered
      .split_whitespace()
      .filter(|word| word.chars().count() > 2)
      .find_map(|word| resolve_student(word, students));

    if active_student.is_none() {
      return ResolvedIntent::NeedsIdentification;
    }
  }

  if lowered.contains("teaches") || lowered.contains("teacher") {
    if let Some(subject) = KNOWN_SUBJECTS.iter().find(|subject| lowered.contains(*subject)) {
      return ResolvedIntent::SubjectTeacherQuery { subject: subject.to_string() };
    }
  }

  if MARK_KEYWORDS.iter().any(|keyword| lowered.contains(keyword)) {
    let student_mentioned = students.iter().any(|student| {
      let name = student.name.to_lowercase();
      !name.is_empty() && lowered.contains(&name)
    });
    if !student_mentioned {
      return ResolvedIntent::AmbiguousMarksQuery;
    }
  }

  ResolvedIntent::GroundedPrompt {
    prompt: build_prompt(question, students, professors, &history_text),
  }
}

/// One-line fact answering "who teaches {subject}" from the roster alone.
pub fn subject_fact(subject: &str, professors: &[ProfessorRecord]) -> String {
  let subject_lower = subject.to_lowercase();
  for professor in professors {
    if professor.subject.to_lowercase() == subject_lower {
      return format!("{} teaches {}", professor.name, professor.subject);
    }
  }
  format!("No professor found for {subject}")
}

#[cfg(test)]
mod tests {
  use super::*;

  fn students_of(names: &[&str]) -> Vec<StudentRecord> {
    names.iter().map(|n| StudentRecord::named(n)).collect()
  }

  #[test]
  fn subject_fact_uses_stored_capitalization() {
    let professors = vec![ProfessorRecord::teaching("Dr. X", "Physics")];
    assert_eq!(subject_fact("physics", &professors), "Dr. X teaches Physics");
  }

  #[test]
  fn subject_fact_reports_missing_professor() {
    let professors = vec![ProfessorRecord::teaching("Dr. X", "Physics")];
    assert_eq!(subject_fact("biology", &professors), "No professor found for biology");
  }

  #[test]
  fn teaches_question_resolves_first_listed_subject() {
    let students = students_of(&["Jane Doe"]);
    let professors = vec![ProfessorRecord::teaching("Dr. X", "Physics")];
    let intent = classify("who teaches physics", &students, &professors, &[]);
    assert_eq!(intent, ResolvedIntent::SubjectTeacherQuery { subject: "physics".to_string() });
  }

  #[test]
  fn teaches_question_without_subject_falls_through_to_prompt() {
    let students = students_of(&["Jane Doe"]);
    let intent = classify("who teaches the morning lecture", &students, &[], &[]);
    assert!(matches!(intent, ResolvedIntent::GroundedPrompt { .. }));
  }

  #[test]
  fn personal_question_without_name_needs_identification() {
    let students = students_of(&["Jane Doe"]);
    // No academic keyword, and no question word fuzzy-resolves to a student
    let intent = classify("show my marks", &students, &[], &[]);
    assert_eq!(intent, ResolvedIntent::NeedsIdentification);
  }

  #[test]
  fn name_in_question_resolves_identity() {
    let students = students_of(&["Jane Doe"]);
    // "jane" resolves against the roster, so identification is skipped
    let intent = classify("i am jane", &students, &[], &[]);
    assert!(matches!(intent, ResolvedIntent::GroundedPrompt { .. }));
  }

  #[test]
  fn personal_question_with_name_in_history_is_grounded() {
    let students = students_of(&["Jane Doe"]);
    let history = vec![Turn {
      user: "I am Jane Doe".to_string(),
      assistant: "Hello Jane Doe!".to_string(),
    }];
    let intent = classify("who am i", &students, &[], &history);
    assert!(matches!(intent, ResolvedIntent::GroundedPrompt { .. }));
  }

  #[test]
  fn marks_question_without_student_name_is_ambiguous() {
    let students = students_of(&["Jane Doe"]);
    let intent = classify("what are marks", &students, &[], &[]);
    assert_eq!(intent, ResolvedIntent::AmbiguousMarksQuery);
  }

  #[test]
  fn marks_question_naming_a_student_is_grounded() {
    let students = students_of(&["Jane Doe"]);
    let intent = classify("what are jane doe's marks", &students, &[], &[]);
    assert!(matches!(intent, ResolvedIntent::GroundedPrompt { .. }));
  }

  #[test]
  fn academic_self_reference_skips_identification() {
    let students = students_of(&["Jane Doe"]);
    let professors = vec![ProfessorRecord::teaching("Dr. X", "Physics")];
    // Self-referential wording, but an academic keyword is present
    let intent = classify("who teaches my physics class", &students, &professors, &[]);
    assert_eq!(intent, ResolvedIntent::SubjectTeacherQuery { subject: "physics".to_string() });
  }

  #[test]
  fn empty_roster_never_asks_for_identification() {
    let intent = classify("show my attendance", &[], &[], &[]);
    assert!(matches!(intent, ResolvedIntent::GroundedPrompt { .. }));
  }
}
