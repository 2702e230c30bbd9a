//! Route definitions for the `/synergies` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::synergy;
use crate::state::AppState;

/// Routes mounted at `/synergies`.
///
/// ```text
/// GET    /                  -> list
/// POST   /evaluate          -> evaluate
/// POST   /active            -> active
/// POST   /potential         -> potential
/// POST   /stat-bonuses      -> stat_bonuses
/// GET    /{id}              -> get_by_id
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(synergy::list))
        .route("/evaluate", post(synergy::evaluate))
        .route("/active", post(synergy::active))
        .route("/potential", post(synergy::potential))
        .route("/stat-bonuses", post(synergy::stat_bonuses))
        .route("/{id}", get(synergy::get_by_id))
}
