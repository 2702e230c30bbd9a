//! Handlers for the `/teams` resource.
//!
//! Teams are persisted; validation and synergy evaluation of a stored team
//! read its deployed slots and run against the in-memory catalog.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use courtside_core::error::CoreError;
use courtside_core::synergy::{evaluate_synergies, SynergyEvaluation};
use courtside_core::team::{resolve_references, validate_team_name, SlotData, TeamPositions};
use courtside_core::team_validation::{validate_team, TeamValidation};
use courtside_core::types::DbId;
use courtside_db::models::team::{CreateTeam, Team, UpdateTeam};
use courtside_db::repositories::TeamRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /teams`.
#[derive(Debug, Deserialize)]
pub struct TeamListParams {
    pub user_id: String,
}

/// Request body for `POST /teams/{id}/duplicate`.
#[derive(Debug, Deserialize)]
pub struct DuplicateTeamRequest {
    pub new_name: String,
}

/// Request body for `POST /teams/validate`.
#[derive(Debug, Deserialize)]
pub struct ValidateTeamRequest {
    pub positions: TeamPositions,
}

/// Rebuild the supplied slots from catalog records.
fn resolve_slots(
    state: &AppState,
    positions: Option<&mut TeamPositions>,
    bench: Option<&mut Vec<SlotData>>,
) -> AppResult<()> {
    let mut empty = TeamPositions::empty();
    resolve_references(
        &state.catalog,
        positions.unwrap_or(&mut empty),
        bench.map(Vec::as_mut_slice).unwrap_or_default(),
    )?;
    Ok(())
}

fn require_user_id(user_id: &str) -> AppResult<()> {
    if user_id.trim().is_empty() {
        return Err(AppError::BadRequest("user_id must not be empty".to_string()));
    }
    Ok(())
}

fn team_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Team",
        id: id.to_string(),
    })
}

/// GET /api/v1/teams?user_id=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<TeamListParams>,
) -> AppResult<Json<DataResponse<Vec<Team>>>> {
    require_user_id(&params.user_id)?;
    let teams = TeamRepo::list_by_user(&state.pool, &params.user_id).await?;
    Ok(Json(DataResponse { data: teams }))
}

/// POST /api/v1/teams
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateTeam>,
) -> AppResult<impl IntoResponse> {
    require_user_id(&input.user_id)?;
    validate_team_name(&input.name)?;
    input.name = input.name.trim().to_string();
    resolve_slots(&state, input.positions.as_mut(), input.bench.as_mut())?;

    let team = TeamRepo::create(&state.pool, &input).await?;

    tracing::info!(team_id = team.id, user_id = %team.user_id, "Team created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: team })))
}

/// GET /api/v1/teams/{id}
///
/// Responds `{ "data": null }` when the team does not exist.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Option<Team>>>> {
    let team = TeamRepo::find_by_id(&state.pool, id).await?;
    Ok(Json(DataResponse { data: team }))
}

/// PUT /api/v1/teams/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(mut input): Json<UpdateTeam>,
) -> AppResult<Json<DataResponse<Team>>> {
    if let Some(name) = input.name.as_mut() {
        validate_team_name(name)?;
        *name = name.trim().to_string();
    }
    resolve_slots(&state, input.positions.as_mut(), input.bench.as_mut())?;

    let team = TeamRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| team_not_found(id))?;

    tracing::info!(team_id = id, "Team updated");

    Ok(Json(DataResponse { data: team }))
}

/// DELETE /api/v1/teams/{id}
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    let deleted = TeamRepo::delete(&state.pool, id).await?;
    if !deleted {
        return Err(team_not_found(id));
    }

    tracing::info!(team_id = id, "Team deleted");

    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/teams/{id}/duplicate
pub async fn duplicate(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<DuplicateTeamRequest>,
) -> AppResult<impl IntoResponse> {
    validate_team_name(&input.new_name)?;

    let team = TeamRepo::duplicate(&state.pool, id, input.new_name.trim())
        .await?
        .ok_or_else(|| team_not_found(id))?;

    tracing::info!(source_id = id, team_id = team.id, "Team duplicated");

    Ok((StatusCode::CREATED, Json(DataResponse { data: team })))
}

/// POST /api/v1/teams/validate
///
/// Slots are resolved against the catalog first, so roles are checked
/// against catalog positions rather than the labels the client sent.
pub async fn validate(
    State(state): State<AppState>,
    Json(mut input): Json<ValidateTeamRequest>,
) -> AppResult<Json<DataResponse<TeamValidation>>> {
    resolve_slots(&state, Some(&mut input.positions), None)?;
    Ok(Json(DataResponse {
        data: validate_team(&input.positions),
    }))
}

/// GET /api/v1/teams/{id}/validation
pub async fn stored_validation(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<TeamValidation>>> {
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| team_not_found(id))?;
    Ok(Json(DataResponse {
        data: validate_team(&team.positions),
    }))
}

/// GET /api/v1/teams/{id}/synergies
///
/// Only deployed slots count; bench characters never activate synergies.
pub async fn stored_synergies(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<SynergyEvaluation>>> {
    let team = TeamRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| team_not_found(id))?;
    let deployed = team.positions.deployed_character_ids();
    Ok(Json(DataResponse {
        data: evaluate_synergies(&deployed, state.catalog.synergies()),
    }))
}
