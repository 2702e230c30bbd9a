//! Handler for `/recommendations/suggest`.

use std::collections::HashSet;

use axum::extract::State;
use axum::Json;
use courtside_core::catalog::Position;
use courtside_core::recommendation::{
    recommend_candidates, Recommendation, RecommendationWeights, DEFAULT_LIMIT,
};
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /recommendations/suggest`.
#[derive(Debug, Deserialize)]
pub struct SuggestRequest {
    pub position: Position,
    #[serde(default)]
    pub current_character_ids: Vec<String>,
    /// Omitted weights use the documented defaults.
    pub weights: Option<RecommendationWeights>,
    pub limit: Option<usize>,
}

/// POST /api/v1/recommendations/suggest
///
/// Weights outside `[0, 5]` or a limit outside `[1, 50]` are rejected with 400.
pub async fn suggest(
    State(state): State<AppState>,
    Json(input): Json<SuggestRequest>,
) -> AppResult<Json<DataResponse<Vec<Recommendation>>>> {
    let current: HashSet<String> = input.current_character_ids.into_iter().collect();
    let weights = input.weights.unwrap_or_default();
    let limit = input.limit.unwrap_or(DEFAULT_LIMIT);

    let recommendations = recommend_candidates(
        input.position,
        &current,
        &weights,
        limit,
        state.catalog.characters(),
        state.catalog.synergies(),
        &state.config.scoring,
    )?;

    tracing::debug!(
        position = input.position.as_str(),
        current = current.len(),
        returned = recommendations.len(),
        "Recommendations computed"
    );

    Ok(Json(DataResponse {
        data: recommendations,
    }))
}
