//! Startup loading of the immutable reference catalog.

use courtside_core::catalog::Catalog;
use courtside_core::error::CoreError;
use sqlx::PgPool;

use crate::repositories::{CharacterRepo, ItemRepo, SynergyRepo};

/// Errors raised while importing or loading the catalog.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Stored or bundled data violates a catalog invariant.
    #[error("Invalid catalog: {0}")]
    Invalid(#[from] CoreError),

    #[error("Malformed seed file: {0}")]
    Seed(serde_json::Error),
}

/// Read characters, items and synergies and build a validated [`Catalog`].
pub async fn load_catalog(pool: &PgPool) -> Result<Catalog, CatalogError> {
    let characters = CharacterRepo::list(pool, &Default::default()).await?;
    let items = ItemRepo::list(pool, None).await?;
    let synergies = SynergyRepo::list(pool).await?;

    let catalog = Catalog::new(characters, items, synergies)?;
    tracing::info!(
        characters = catalog.characters().len(),
        items = catalog.items().len(),
        synergies = catalog.synergies().len(),
        "Catalog loaded"
    );
    Ok(catalog)
}
