//! Summary endpoint

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::{SummaryRequest, SummaryResponse};
use crate::AppState;

/// POST /api/summary
pub async fn generate(
    State(state): State<AppState>,
    Json(payload): Json<SummaryRequest>,
) -> Result<Json<SummaryResponse>> {
    if payload.text.trim().is_empty() {
        return Err(ApiError::BadRequest("text must not be empty".to_string()));
    }

    let summary = study_core::generate_summary(state.generator.as_ref(), &payload.text).await?;

    Ok(Json(SummaryResponse { summary }))
}
