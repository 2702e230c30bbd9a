//! Route definitions for the `/items` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::item;
use crate::state::AppState;

/// Routes mounted at `/items`.
///
/// ```text
/// GET    /                  -> list
/// GET    /memories          -> list_memories
/// GET    /potential-sets    -> list_potential_sets
/// GET    /{id}              -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(item::list))
        .route("/memories", get(item::list_memories))
        .route("/potential-sets", get(item::list_potential_sets))
        .route("/{id}", get(item::get_by_id))
}
