//! Handlers for the `/synergies` resource.
//!
//! Listing and lookup read the database; the evaluation endpoints run the
//! pure evaluator against the in-memory catalog.

use std::collections::HashSet;

use axum::extract::{Path, State};
use axum::Json;
use courtside_core::catalog::Synergy;
use courtside_core::synergy::{
    active_synergies, aggregate_stat_bonuses, evaluate_synergies, potential_synergies,
    PotentialSynergy, StatBonusSummary, SynergyEvaluation,
};
use courtside_db::repositories::SynergyRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body shared by the evaluation endpoints.
#[derive(Debug, Deserialize)]
pub struct CharacterIdsRequest {
    pub character_ids: Vec<String>,
}

impl CharacterIdsRequest {
    fn id_set(self) -> HashSet<String> {
        self.character_ids.into_iter().collect()
    }
}

/// GET /api/v1/synergies
pub async fn list(State(state): State<AppState>) -> AppResult<Json<DataResponse<Vec<Synergy>>>> {
    let synergies = SynergyRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: synergies }))
}

/// GET /api/v1/synergies/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Option<Synergy>>>> {
    let synergy = SynergyRepo::find_by_id(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: synergy }))
}

/// POST /api/v1/synergies/evaluate
pub async fn evaluate(
    State(state): State<AppState>,
    Json(input): Json<CharacterIdsRequest>,
) -> Json<DataResponse<SynergyEvaluation>> {
    let evaluation = evaluate_synergies(&input.id_set(), state.catalog.synergies());
    Json(DataResponse { data: evaluation })
}

/// POST /api/v1/synergies/active
pub async fn active(
    State(state): State<AppState>,
    Json(input): Json<CharacterIdsRequest>,
) -> Json<DataResponse<Vec<Synergy>>> {
    let active = active_synergies(&input.id_set(), state.catalog.synergies())
        .into_iter()
        .cloned()
        .collect();
    Json(DataResponse { data: active })
}

/// POST /api/v1/synergies/potential
pub async fn potential(
    State(state): State<AppState>,
    Json(input): Json<CharacterIdsRequest>,
) -> Json<DataResponse<Vec<PotentialSynergy>>> {
    let potential = potential_synergies(&input.id_set(), state.catalog.synergies());
    Json(DataResponse { data: potential })
}

/// POST /api/v1/synergies/stat-bonuses
pub async fn stat_bonuses(
    State(state): State<AppState>,
    Json(input): Json<CharacterIdsRequest>,
) -> Json<DataResponse<StatBonusSummary>> {
    let summary = aggregate_stat_bonuses(&input.id_set(), state.catalog.synergies());
    Json(DataResponse { data: summary })
}
