//! Answer matching for quiz mode.
//!
//! The check is deliberately lenient: containment or any single shared word
//! counts as a match, and the character-level ratio only runs when both of
//! those fail.

use serde::{Deserialize, Serialize};

/// Minimum character-sequence ratio at which two answers are deemed
/// equivalent, used only when the cheaper rules fail.
pub const DEFAULT_SIMILARITY_THRESHOLD: f64 = 0.6;

/// Which rule decided that two answers match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchRule {
    /// One normalized string contains the other (including exact equality,
    /// and trivially any comparison involving an empty string).
    Containment,
    /// The whitespace-token sets share at least one word.
    WordOverlap,
    /// The character-sequence ratio reached the threshold.
    Fuzzy,
}

/// Result of comparing a user's answer to the reference answer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    /// Whether the answer is considered correct.
    pub is_match: bool,
    /// The first rule that fired, if any.
    pub rule: Option<MatchRule>,
    /// Character-sequence ratio between the normalized strings (0.0 to 1.0),
    /// reported regardless of which rule decided the outcome.
    pub similarity: f64,
    /// Normalized user answer (for display).
    pub user_normalized: String,
    /// Normalized reference answer (for display).
    pub reference_normalized: String,
}

/// Compare a user's answer to the reference answer.
///
/// Both strings are trimmed and lowercased, then the rules run in order,
/// short-circuiting on the first hit: containment, word overlap, character
/// ratio against `threshold`. Total over all string pairs; two empty inputs
/// match, as does an empty input against anything (the empty string is a
/// substring of everything).
pub fn check_answer(user_input: &str, reference: &str, threshold: f64) -> MatchResult {
    let user = user_input.trim().to_lowercase();
    let reference = reference.trim().to_lowercase();
    let similarity = sequence_ratio(&user, &reference);

    let rule = if user.contains(reference.as_str()) || reference.contains(user.as_str()) {
        Some(MatchRule::Containment)
    } else if words_overlap(&user, &reference) {
        Some(MatchRule::WordOverlap)
    } else if similarity >= threshold {
        Some(MatchRule::Fuzzy)
    } else {
        None
    };

    MatchResult {
        is_match: rule.is_some(),
        rule,
        similarity,
        user_normalized: user,
        reference_normalized: reference,
    }
}

/// Boolean form of [`check_answer`].
pub fn is_similar(user_input: &str, reference: &str, threshold: f64) -> bool {
    check_answer(user_input, reference, threshold).is_match
}

fn words_overlap(a: &str, b: &str) -> bool {
    let words: std::collections::HashSet<&str> = a.split_whitespace().collect();
    b.split_whitespace().any(|word| words.contains(word))
}

/// Character-level similarity ratio between two strings (0.0 to 1.0).
///
/// Ratcliff/Obershelp: twice the total length of matching blocks divided by
/// the combined length, where blocks are found by recursively matching the
/// longest common substring. Two empty strings are identical.
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let combined = a.len() + b.len();
    if combined == 0 {
        return 1.0;
    }

    2.0 * matching_total(&a, &b) as f64 / combined as f64
}

fn matching_total(a: &[char], b: &[char]) -> usize {
    if a.is_empty() || b.is_empty() {
        return 0;
    }

    let (a_start, b_start, len) = longest_common_block(a, b);
    if len == 0 {
        return 0;
    }

    len + matching_total(&a[..a_start], &b[..b_start])
        + matching_total(&a[a_start + len..], &b[b_start + len..])
}

/// Longest common contiguous block, earliest occurrence on ties.
/// Returns (start in a, start in b, length).
fn longest_common_block(a: &[char], b: &[char]) -> (usize, usize, usize) {
    let mut best = (0, 0, 0);
    // Two rows of run lengths instead of a full matrix.
    let mut prev = vec![0usize; b.len() + 1];
    let mut curr = vec![0usize; b.len() + 1];

    for i in 0..a.len() {
        for j in 0..b.len() {
            if a[i] == b[j] {
                let run = prev[j] + 1;
                curr[j + 1] = run;
                if run > best.2 {
                    best = (i + 1 - run, j + 1 - run, run);
                }
            } else {
                curr[j + 1] = 0;
            }
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn substring_match() {
        assert!(is_similar("paris", "Paris is the capital", 0.6));
    }

    #[test]
    fn exact_match_after_normalization() {
        assert!(is_similar("  Hello World ", "hello world", 0.6));
    }

    #[test]
    fn no_match_for_unrelated_words() {
        assert!(!is_similar("dog", "cat", 0.6));
    }

    #[test]
    fn single_shared_word_matches() {
        let result = check_answer("the mitochondria", "powerhouse of the cell", 0.6);
        assert!(result.is_match);
        assert_eq!(result.rule, Some(MatchRule::WordOverlap));
    }

    #[test]
    fn empty_input_matches_anything() {
        assert!(is_similar("", "anything", 0.6));
        assert!(is_similar("anything", "", 0.6));
        assert!(is_similar("", "", 0.6));
    }

    #[test]
    fn fuzzy_match_on_close_spelling() {
        let result = check_answer("fotosynthesis", "photosynthesis", 0.6);
        assert!(result.is_match);
        assert_eq!(result.rule, Some(MatchRule::Fuzzy));
    }

    #[test]
    fn fuzzy_respects_threshold() {
        // Blocks "hel" and "o": ratio 8/10.
        assert!(is_similar("helo", "helxlo", 0.6));
        assert!(!is_similar("abcd", "wxyz", 0.6));
    }

    #[test]
    fn sequence_ratio_known_values() {
        assert_eq!(sequence_ratio("abc", "abc"), 1.0);
        assert_eq!(sequence_ratio("", ""), 1.0);
        assert_eq!(sequence_ratio("abc", "xyz"), 0.0);
        // Blocks "itt" and "n": 2 * 4 / 13.
        let ratio = sequence_ratio("kitten", "sitting");
        assert!((ratio - 8.0 / 13.0).abs() < 1e-9);
    }

    #[test]
    fn ratio_reported_even_when_containment_decides() {
        let result = check_answer("paris", "paris", 0.6);
        assert_eq!(result.rule, Some(MatchRule::Containment));
        assert_eq!(result.similarity, 1.0);
    }
}
