//! Request and response bodies for the API.
//!
//! Requests carry already-extracted document text; PDF/DOCX extraction is a
//! client concern.

use serde::{Deserialize, Serialize};
use study_core::{Flashcard, MatchResult, Slide};

#[derive(Debug, Deserialize)]
pub struct SummaryRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SummaryResponse {
    pub summary: String,
}

#[derive(Debug, Deserialize)]
pub struct FlashcardsRequest {
    pub text: String,
    pub count: usize,
}

#[derive(Debug, Serialize)]
pub struct FlashcardsResponse {
    pub flashcards: Vec<Flashcard>,
    /// How many cards were asked for.
    pub requested: usize,
    /// How many complete cards survived parsing and filtering; fewer than
    /// `requested` signals an under-produced generation the client may want
    /// to surface.
    pub returned: usize,
}

#[derive(Debug, Deserialize)]
pub struct AskRequest {
    pub question: String,
    pub context: String,
}

#[derive(Debug, Serialize)]
pub struct AskResponse {
    pub answer: String,
}

#[derive(Debug, Deserialize)]
pub struct SlidesRequest {
    pub summary: String,
}

#[derive(Debug, Serialize)]
pub struct SlidesResponse {
    pub slides: Vec<Slide>,
    pub estimated_count: usize,
}

#[derive(Debug, Deserialize)]
pub struct CheckAnswerRequest {
    pub answer: String,
    pub reference: String,
    /// Similarity threshold in [0, 1]; defaults to the core's 0.6.
    pub threshold: Option<f64>,
}

#[derive(Debug, Serialize)]
pub struct CheckAnswerResponse {
    #[serde(flatten)]
    pub result: MatchResult,
}
