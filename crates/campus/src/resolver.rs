//! Fuzzy student-name resolution against the roster.

use roster::StudentRecord;

use crate::similarity::similarity;

/// Scores at or below this are never accepted as a match.
const MATCH_THRESHOLD: f64 = 0.75;
/// Floor applied when one name substantially contains the other.
const SUBSTRING_SCORE: f64 = 0.85;
/// Word-level similarity above this raises the overall score.
const WORD_MATCH_THRESHOLD: f64 = 0.8;

/// Find the roster student best matching `candidate`, if any match is good
/// enough.
///
/// An exact case-insensitive match wins immediately. Otherwise each entry is
/// scored by character overlap, boosted for substring containment and for
/// strong word-level matches, and the best strictly-above-threshold score
/// wins. Ties keep the first-seen entry. Candidates shorter than three
/// characters never match.
pub fn resolve_student<'a>(
  candidate: &str,
  students: &'a [StudentRecord],
) -> Option<&'a StudentRecord> {
  let candidate = candidate.trim().to_lowercase();
  if candidate.chars().count() < 3 {
    return None;
  }

  let mut best: Option<&StudentRecord> = None;
  let mut best_score = MATCH_THRESHOLD;

  for student in students {
    let name = student.name.to_lowercase();
    if name.is_empty() {
      continue;
    }

    if candidate == name {
      return Some(student);
    }

    let mut score = similarity(&candidate, &name);

    // Substring containment counts as a strong signal, but only when the
    // shorter string covers at least 60% of the longer one
    let candidate_len = candidate.chars().count() as f64;
    let name_len = name.chars().count() as f64;
    if name.contains(&candidate) && candidate_len >= name_len * 0.6 {
      score = score.max(SUBSTRING_SCORE);
    } else if candidate.contains(&name) && name_len >= candidate_len * 0.6 {
      score = score.max(SUBSTRING_SCORE);
    }

    // Word-level comparison catches first-name/surname matches inside
    // longer phrases
    for word in candidate.split_whitespace() {
      if word.chars().count() > 3 {
        for name_word in name.split_whitespace() {
          let word_score = similarity(word, name_word);
          if word_score > WORD_MATCH_THRESHOLD {
            score = score.max(word_score * 0.9);
          }
        }
      }
    }

    if score > best_score {
      best_score = score;
      best = Some(student);
    }
  }

  best
}
