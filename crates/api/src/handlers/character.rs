//! Handlers for the `/characters` catalog resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use courtside_core::catalog::{Character, CharacterFilter};
use courtside_db::repositories::CharacterRepo;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/characters?position=&school=&rarity=&search=
pub async fn list(
    State(state): State<AppState>,
    Query(filter): Query<CharacterFilter>,
) -> AppResult<Json<DataResponse<Vec<Character>>>> {
    let characters = CharacterRepo::list(&state.pool, &filter).await?;
    Ok(Json(DataResponse { data: characters }))
}

/// GET /api/v1/characters/schools
pub async fn list_schools(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<String>>>> {
    let schools = CharacterRepo::list_schools(&state.pool).await?;
    Ok(Json(DataResponse { data: schools }))
}

/// GET /api/v1/characters/{id}
///
/// Responds `{ "data": null }` when the id is unknown.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Option<Character>>>> {
    let character = CharacterRepo::find_by_id(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: character }))
}
