//! Grounding-prompt assembly for the language-model oracle.

use roster::{ProfessorRecord, StudentRecord};

use crate::session::Turn;

/// Render a session's turns the way the prompt expects them.
pub fn render_history(history: &[Turn]) -> String {
  if history.is_empty() {
    return "No conversation history yet.".to_string();
  }

  history
    .iter()
    .map(|turn| format!("User: {}\nAssistant: {}", turn.user, turn.assistant))
    .collect::<Vec<_>>()
    .join("\n")
}

/// Assemble the full instruction prompt: persona, behavioral rules, the
/// complete rosters as pretty-printed JSON, the conversation so far, and the
/// current question. The oracle sees nothing else.
pub fn build_prompt(
  question: &str,
  students: &[StudentRecord],
  professors: &[ProfessorRecord],
  history_text: &str,
) -> String {
  let student_data = serde_json::to_string_pretty(students).unwrap_or_else(|_| "[]".to_string());
  let professor_data =
    serde_json::to_string_pretty(professors).unwrap_or_else(|_| "[]".to_string());

  format!(
    r#"You are Jarvisha, a helpful AI assistant for students and professors. Give simple, direct answers.

IMPORTANT RULES:
1. ONLY provide specific student information when a student name is clearly identified
2. If someone asks about "students" in general, provide general information about the student body
3. If someone asks about a specific student without naming them, ask for clarification
4. Do NOT default to any specific student unless their name is mentioned
5. Be precise and accurate with student data
6. Keep answers SHORT and DIRECT - no long paragraphs or formal language
7. Use simple, conversational language
8. For questions about professors, subjects, or general academic info, provide the information directly
9. ALWAYS use the exact data provided - do NOT make up or guess information
10. Check the professor data carefully for subject assignments
11. Be professional and helpful - no sarcastic or inappropriate responses
12. If someone asks about marks without specifying a student name, ask them to provide the student name

EXACT PROFESSOR DATA (use this exactly):
{professor_data}

If the question is about education, student life, or academic topics, provide a helpful answer using the information provided below.

If the question is completely unrelated to education or academic topics, reply with: "I'm here to assist with educational and college-related topics only."

---
Student Information:
{student_data}

Previous Conversation:
{history_text}
---

User Question: "{question}"

IMPORTANT:
- When someone asks about their own information (marks, attendance, etc.), look for their name in the student data. The system will automatically match names with variations and misspellings. If you find a matching student, provide their specific information. If you can't find their name, ask them to clarify their name.
- For professor questions, use ONLY the exact professor data provided above.
- Do NOT change professor names or subjects.
- If someone asks about marks without specifying which student, ask "Which student's marks would you like to know?"

Give a simple, direct answer. No long explanations or formal language. Just the facts.
"#
  )
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_history_renders_placeholder() {
    assert_eq!(render_history(&[]), "No conversation history yet.");
  }

  #[test]
  fn turns_render_as_user_assistant_lines() {
    let history = vec![
      Turn { user: "hi".to_string(), assistant: "hello".to_string() },
      Turn { user: "bye".to_string(), assistant: "goodbye".to_string() },
    ];
    assert_eq!(
      render_history(&history),
      "User: hi\nAssistant: hello\nUser: bye\nAssistant: goodbye"
    );
  }

  #[test]
  fn prompt_contains_rosters_history_and_question() {
    let students = vec![StudentRecord::named("Jane Doe")];
    let professors = vec![ProfessorRecord::teaching("Dr. X", "Physics")];
    let prompt = build_prompt("who is jane?", &students, &professors, "No conversation history yet.");

    assert!(prompt.contains("Jane Doe"));
    assert!(prompt.contains("Dr. X"));
    assert!(prompt.contains("No conversation history yet."));
    assert!(prompt.contains(r#"User Question: "who is jane?""#));
  }
}
