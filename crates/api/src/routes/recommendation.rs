use axum::routing::post;
use axum::Router;

use crate::handlers::recommendation;
use crate::state::AppState;

/// Routes mounted at `/recommendations`.
///
/// ```text
/// POST   /suggest           -> suggest
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/suggest", post(recommendation::suggest))
}
