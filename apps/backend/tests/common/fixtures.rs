//! Test fixtures and factory functions for generator output.

/// Generate well-formed flashcard output with `num_cards` units, in the
/// delimited format the parser expects.
pub fn sample_flashcard_output(num_cards: usize) -> String {
    (0..num_cards)
        .map(|i| {
            format!(
                "---\nQ: Question {}?\nA: Answer {}.\nExplanation: Explanation {}.\n",
                i + 1,
                i + 1,
                i + 1
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// A topic-sectioned summary with two headings.
pub fn sample_summary() -> String {
    "Photosynthesis\nInputs: light, water, CO2\n- happens in chloroplasts\nCell Respiration\nOutput: ATP"
        .to_string()
}

/// Slide-content output with the Bullets/Keywords markers.
pub fn sample_slide_content() -> String {
    "Bullets:\n- point one\n- point two\n\nKeywords: alpha, beta".to_string()
}
