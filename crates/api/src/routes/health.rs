use axum::extract::State;
use axum::{routing::get, Json, Router};
use serde::Serialize;

use crate::state::AppState;

/// Health check response payload.
#[derive(Serialize)]
pub struct HealthResponse {
    /// `ok`, or `degraded` when the database is unreachable.
    pub status: &'static str,
    pub version: &'static str,
    pub db_healthy: bool,
    /// Record counts of the catalog loaded at startup.
    pub catalog: CatalogCounts,
}

#[derive(Serialize)]
pub struct CatalogCounts {
    pub characters: usize,
    pub items: usize,
    pub synergies: usize,
}

/// GET /health -- service, database and catalog health.
async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let db_healthy = courtside_db::health_check(&state.pool).await.is_ok();
    if !db_healthy {
        tracing::warn!("Health check could not reach the database");
    }

    Json(HealthResponse {
        status: if db_healthy { "ok" } else { "degraded" },
        version: env!("CARGO_PKG_VERSION"),
        db_healthy,
        catalog: CatalogCounts {
            characters: state.catalog.characters().len(),
            items: state.catalog.items().len(),
            synergies: state.catalog.synergies().len(),
        },
    })
}

/// Mounted at the root, outside `/api/v1`.
pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}
