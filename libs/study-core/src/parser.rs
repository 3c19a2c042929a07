//! Parser for generated flashcard text.
//!
//! # Format
//! ```text
//! ---
//! Q: One-line question
//! A: One-line answer
//! Explanation: Brief explanation,
//! possibly spanning lines.
//!
//! ---
//! ```
//! Units are separated by a `---` delimiter line; no delimiter is required
//! after the final unit.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::types::Flashcard;

// Dot-matches-newline and non-greedy so explanations may span lines. The
// terminator consumes the next delimiter or the end of input, so matching
// never requires a trailing delimiter.
static FLASHCARD_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?s)Q:\s*(.*?)\s*A:\s*(.*?)\s*Explanation:\s*(.*?)\s*(?:\n---|\z)")
        .expect("flashcard pattern is valid")
});

/// Extract flashcards from generated text, returning at most `requested`
/// of them in their original order.
///
/// Total over all inputs: malformed text yields fewer records (possibly
/// none), never an error. Units with empty fields still count as parsed;
/// callers filter with [`Flashcard::is_complete`] before display. Retry
/// of an under-producing generation lives in [`crate::generate`], not here.
pub fn parse_flashcards(raw_text: &str, requested: usize) -> Vec<Flashcard> {
    let mut cards: Vec<Flashcard> = FLASHCARD_RE
        .captures_iter(raw_text)
        .map(|unit| {
            Flashcard::new(
                unit[1].trim(),
                unit[2].trim(),
                unit[3].trim(),
            )
        })
        .collect();

    cards.truncate(requested);
    cards
}
