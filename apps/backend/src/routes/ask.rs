//! Free-form question endpoint

use axum::{extract::State, Json};

use crate::error::{ApiError, Result};
use crate::models::{AskRequest, AskResponse};
use crate::AppState;

/// POST /api/ask
pub async fn ask(
    State(state): State<AppState>,
    Json(payload): Json<AskRequest>,
) -> Result<Json<AskResponse>> {
    if payload.question.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "question must not be empty".to_string(),
        ));
    }

    let answer = study_core::answer_question(
        state.generator.as_ref(),
        &payload.question,
        &payload.context,
    )
    .await?;

    Ok(Json(AskResponse { answer }))
}
