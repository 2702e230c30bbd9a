use std::sync::Arc;

use courtside_core::catalog::Catalog;

use crate::config::ServerConfig;

/// Handler state, cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub pool: courtside_db::DbPool,
    pub config: Arc<ServerConfig>,
    /// Loaded once at startup and never mutated. Synergy evaluation and
    /// recommendations read from here instead of the database.
    pub catalog: Arc<Catalog>,
}
