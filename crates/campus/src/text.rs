//! Cleanup of raw language-model output before it reaches callers.

use once_cell::sync::Lazy;
use regex::Regex;

static EMPHASIS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\*+").unwrap());
static MARKUP: Lazy<Regex> = Lazy::new(|| Regex::new(r"[_`>#\-]+").unwrap());
static BLANK_LINES: Lazy<Regex> = Lazy::new(|| Regex::new(r"\n{2,}").unwrap());

/// Strip markdown emphasis and markup characters, collapse runs of blank
/// lines, and trim. Idempotent: cleaning already-clean text is a no-op.
pub fn clean_response(text: &str) -> String {
  let cleaned = EMPHASIS.replace_all(text, "");
  let cleaned = MARKUP.replace_all(&cleaned, "");
  let cleaned = BLANK_LINES.replace_all(&cleaned, "\n");
  cleaned.trim().to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn strips_markdown_artifacts() {
    assert_eq!(clean_response("**bold** and _underlined_"), "bold and underlined");
    assert_eq!(clean_response("# heading\n> quote"), "heading\n quote");
  }

  #[test]
  fn collapses_blank_lines() {
    assert_eq!(clean_response("a\n\n\nb"), "a\nb");
  }

  #[test]
  fn cleaning_is_idempotent() {
    let messy = "**Hi!**\n\n\n- item_one\n`code`  ";
    let once = clean_response(messy);
    assert_eq!(clean_response(&once), once);
  }
}
