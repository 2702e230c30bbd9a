//! Route definitions for the `/teams` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes mounted at `/teams`.
///
/// ```text
/// GET    /                  -> list (?user_id=)
/// POST   /                  -> create
/// POST   /validate          -> validate
/// GET    /{id}              -> get_by_id
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// POST   /{id}/duplicate    -> duplicate
/// GET    /{id}/validation   -> stored_validation
/// GET    /{id}/synergies    -> stored_synergies
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(team::list).post(team::create))
        .route("/validate", post(team::validate))
        .route(
            "/{id}",
            get(team::get_by_id).put(team::update).delete(team::delete),
        )
        .route("/{id}/duplicate", post(team::duplicate))
        .route("/{id}/validation", get(team::stored_validation))
        .route("/{id}/synergies", get(team::stored_synergies))
}
