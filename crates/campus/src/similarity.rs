/// Character-overlap similarity between two strings, in `[0, 1]`.
///
/// Counts how many characters of `a` (duplicates included) appear anywhere
/// in `b`, divided by the length of the longer string. Case-insensitive,
/// order-insensitive, and deliberately cruder than edit distance: anagrams
/// score 1.0 and short strings can score high on little evidence. Name
/// matching downstream is tuned around exactly this formula, so it must not
/// be swapped for a "better" metric.
pub fn similarity(a: &str, b: &str) -> f64 {
  if a.is_empty() || b.is_empty() {
    return 0.0;
  }

  let a = a.to_lowercase();
  let b = b.to_lowercase();
  let b_chars: Vec<char> = b.chars().collect();

  let common = a.chars().filter(|c| b_chars.contains(c)).count();
  let longest = a.chars().count().max(b_chars.len());

  common as f64 / longest as f64
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn empty_input_scores_zero() {
    assert_eq!(similarity("", "john"), 0.0);
    assert_eq!(similarity("john", ""), 0.0);
  }

  #[test]
  fn identical_strings_score_one() {
    assert_eq!(similarity("jane", "jane"), 1.0);
    assert_eq!(similarity("Jane", "jane"), 1.0);
  }

  #[test]
  fn anagrams_score_one() {
    // Inherent to the character-overlap formula
    assert_eq!(similarity("stop", "pots"), 1.0);
  }

  #[test]
  fn partial_overlap_is_fractional() {
    let score = similarity("john", "jon");
    assert!(score > 0.0 && score <= 1.0);
    assert_eq!(score, 3.0 / 4.0);
  }
}
