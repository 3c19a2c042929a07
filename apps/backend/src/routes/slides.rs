//! Slide deck planning endpoint

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::{SlidesRequest, SlidesResponse};
use crate::AppState;

/// POST /api/slides
pub async fn plan(
    State(state): State<AppState>,
    Json(payload): Json<SlidesRequest>,
) -> Result<Json<SlidesResponse>> {
    if payload.summary.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "summary must not be empty".to_string(),
        ));
    }

    let outline = study_core::build_outline(&payload.summary)?;
    let estimated_count = outline.estimated_slide_count();
    let deck = study_core::plan_deck(state.generator.as_ref(), &outline, None).await?;

    Ok(Json(SlidesResponse {
        slides: deck.slides,
        estimated_count,
    }))
}
