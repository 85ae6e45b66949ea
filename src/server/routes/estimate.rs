//! Story estimation endpoint

use std::sync::Arc;

use axum::{extract::State, http::StatusCode, Json};

use crate::error::EstimateError;
use crate::estimation::{ScoreResult, Story};
use crate::server::state::AppState;
use crate::server::types::ErrorResponse;

type ApiError = (StatusCode, Json<ErrorResponse>);

/// POST /estimate - Estimate complexity and story points for one story
pub async fn estimate_story(
    State(state): State<Arc<AppState>>,
    Json(story): Json<Story>,
) -> Result<Json<ScoreResult>, ApiError> {
    let estimator = Arc::clone(&state.estimator);

    // Analysis is CPU-bound; keep it off the async workers
    let outcome = tokio::task::spawn_blocking(move || estimator.estimate(&story))
        .await
        .map_err(|e| {
            tracing::error!("Estimation task failed: {}", e);
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Estimation task failed".to_string(),
                    code: "INTERNAL_ERROR".to_string(),
                }),
            )
        })?;

    outcome.map(Json).map_err(processing_error)
}

fn processing_error(err: EstimateError) -> ApiError {
    tracing::error!("Error processing story: {}", err);
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ErrorResponse {
            error: format!("Error processing text: {}", err),
            code: err.code().to_string(),
        }),
    )
}
