//! Text generation orchestration.
//!
//! The generator itself is an injected capability; everything here is
//! prompt construction, delegation, and the flashcard retry loop.

use async_trait::async_trait;

use crate::error::GenerateError;
use crate::parser::parse_flashcards;
use crate::prompts;
use crate::types::Flashcard;

/// How many full generation-and-parse cycles to run before settling for an
/// under-produced batch.
pub const DEFAULT_GENERATION_ATTEMPTS: usize = 2;

/// A black-box text generation service.
///
/// Implementations own transport, timeouts, and rate limiting; the core only
/// sees prompt in, text out. Passed explicitly into each operation so tests
/// can substitute scripted doubles.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerateError>;
}

/// Generate `count` flashcards from `source_text`.
///
/// Each attempt runs a full generation-and-parse cycle: an under-producing
/// attempt discards its output and re-invokes the generator with the same
/// prompt, not just the parser, up to `attempts` cycles (at least one). If
/// the budget runs out the final attempt's records are returned as-is,
/// possibly fewer than `count` or none; callers filter for complete records
/// before display. Generator transport failures propagate immediately.
pub async fn generate_flashcards(
    generator: &dyn TextGenerator,
    source_text: &str,
    count: usize,
    attempts: usize,
) -> Result<Vec<Flashcard>, GenerateError> {
    let prompt = prompts::flashcard_prompt(source_text, count);
    let attempts = attempts.max(1);
    let mut cards = Vec::new();

    for attempt in 1..=attempts {
        let output = generator.generate(&prompt).await?;
        cards = parse_flashcards(&output, count);
        if cards.len() >= count {
            return Ok(cards);
        }
        if attempt < attempts {
            tracing::warn!(
                attempt,
                parsed = cards.len(),
                requested = count,
                "flashcard generation under-produced, regenerating"
            );
        }
    }

    tracing::warn!(
        parsed = cards.len(),
        requested = count,
        "returning under-produced flashcard batch after exhausting attempts"
    );
    Ok(cards)
}

/// Generate a topic-sectioned summary of a document.
pub async fn generate_summary(
    generator: &dyn TextGenerator,
    document_text: &str,
) -> Result<String, GenerateError> {
    generator
        .generate(&prompts::summary_prompt(document_text))
        .await
}

/// Answer a free-form question using the document as context.
pub async fn answer_question(
    generator: &dyn TextGenerator,
    question: &str,
    context: &str,
) -> Result<String, GenerateError> {
    generator
        .generate(&prompts::question_prompt(question, context))
        .await
}
