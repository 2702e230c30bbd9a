//! Handlers for the `/items` catalog resource.

use axum::extract::{Path, Query, State};
use axum::Json;
use courtside_core::catalog::{Item, ItemType};
use courtside_db::repositories::ItemRepo;
use serde::Deserialize;

use crate::error::AppResult;
use crate::response::DataResponse;
use crate::state::AppState;

/// Query parameters for `GET /items`.
#[derive(Debug, Deserialize)]
pub struct ItemListParams {
    #[serde(rename = "type")]
    pub item_type: Option<ItemType>,
}

/// GET /api/v1/items?type=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ItemListParams>,
) -> AppResult<Json<DataResponse<Vec<Item>>>> {
    let items = ItemRepo::list(&state.pool, params.item_type).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/items/memories
pub async fn list_memories(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Item>>>> {
    let items = ItemRepo::list(&state.pool, Some(ItemType::Memory)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/items/potential-sets
pub async fn list_potential_sets(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<Item>>>> {
    let items = ItemRepo::list(&state.pool, Some(ItemType::PotentialSet)).await?;
    Ok(Json(DataResponse { data: items }))
}

/// GET /api/v1/items/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<DataResponse<Option<Item>>>> {
    let item = ItemRepo::find_by_id(&state.pool, &id).await?;
    Ok(Json(DataResponse { data: item }))
}
