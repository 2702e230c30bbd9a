pub mod character;
pub mod health;
pub mod item;
pub mod recommendation;
pub mod synergy;
pub mod team;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /characters                                list (filterable)
/// /characters/schools                        distinct schools
/// /characters/{id}                           lookup
///
/// /items                                     list (filterable by type)
/// /items/memories                            memories only
/// /items/potential-sets                      potential sets only
/// /items/{id}                                lookup
///
/// /synergies                                 list
/// /synergies/{id}                            lookup
/// /synergies/evaluate                        active + potential + bonuses (POST)
/// /synergies/active                          active subset (POST)
/// /synergies/potential                       potential subset (POST)
/// /synergies/stat-bonuses                    aggregated bonuses (POST)
///
/// /recommendations/suggest                   ranked candidates (POST)
///
/// /teams                                     list by user, create
/// /teams/validate                            validate unsaved slots (POST)
/// /teams/{id}                                get, update, delete
/// /teams/{id}/duplicate                      copy under a new name (POST)
/// /teams/{id}/validation                     validate stored team
/// /teams/{id}/synergies                      evaluate stored team
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Reference catalog.
        .nest("/characters", character::router())
        .nest("/items", item::router())
        .nest("/synergies", synergy::router())
        // Team builder.
        .nest("/recommendations", recommendation::router())
        .nest("/teams", team::router())
}
