//! Quiz answer checking endpoint

use axum::Json;
use study_core::DEFAULT_SIMILARITY_THRESHOLD;

use crate::error::{ApiError, Result};
use crate::models::{CheckAnswerRequest, CheckAnswerResponse};

/// POST /api/quiz/check
///
/// Pure comparison, no generator involved.
pub async fn check(Json(payload): Json<CheckAnswerRequest>) -> Result<Json<CheckAnswerResponse>> {
    let threshold = payload.threshold.unwrap_or(DEFAULT_SIMILARITY_THRESHOLD);
    if !(0.0..=1.0).contains(&threshold) {
        return Err(ApiError::BadRequest(format!(
            "threshold must be within [0, 1], got {threshold}"
        )));
    }

    let result = study_core::check_answer(&payload.answer, &payload.reference, threshold);

    Ok(Json(CheckAnswerResponse { result }))
}
