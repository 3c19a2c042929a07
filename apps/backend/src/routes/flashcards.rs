//! Flashcard generation endpoint

use axum::{extract::State, Json};
use study_core::DEFAULT_GENERATION_ATTEMPTS;

use crate::error::{ApiError, Result};
use crate::models::{FlashcardsRequest, FlashcardsResponse};
use crate::AppState;

/// POST /api/flashcards
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<FlashcardsRequest>,
) -> Result<Json<FlashcardsResponse>> {
    if payload.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }
    if payload.count == 0 {
        return Err(ApiError::BadRequest("count must be at least 1".to_string()));
    }

    let cards = study_core::generate_flashcards(
        state.generator.as_ref(),
        &payload.text,
        payload.count,
        DEFAULT_GENERATION_ATTEMPTS,
    )
    .await?;

    // Syntactically valid units can still carry empty fields; those are
    // useless as quiz cards and are dropped here.
    let flashcards: Vec<_> = cards.into_iter().filter(|card| card.is_complete()).collect();

    if flashcards.len() < payload.count {
        tracing::warn!(
            requested = payload.count,
            returned = flashcards.len(),
            "serving under-produced flashcard batch"
        );
    }

    Ok(Json(FlashcardsResponse {
        requested: payload.count,
        returned: flashcards.len(),
        flashcards,
    }))
}
