//! Bundled reference data and the import that writes it to the database.

use courtside_core::catalog::{Catalog, Character, Item, Synergy};
use serde::Deserialize;
use sqlx::PgPool;

use crate::catalog::CatalogError;
use crate::repositories::{CharacterRepo, ItemRepo, SynergyRepo};

/// The game data set shipped with the crate.
const BUNDLED_CATALOG: &str = include_str!("../seed/catalog.json");

/// Raw seed file contents before catalog validation.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedCatalog {
    pub characters: Vec<Character>,
    pub items: Vec<Item>,
    pub synergies: Vec<Synergy>,
}

impl SeedCatalog {
    /// Parse the bundled seed file.
    pub fn bundled() -> Result<Self, serde_json::Error> {
        serde_json::from_str(BUNDLED_CATALOG)
    }

    /// Validate into an in-memory [`Catalog`] without touching the database.
    pub fn into_catalog(self) -> Result<Catalog, CatalogError> {
        Ok(Catalog::new(self.characters, self.items, self.synergies)?)
    }
}

/// Row counts written by [`seed_catalog`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub characters: usize,
    pub items: usize,
    pub synergies: usize,
}

/// Validate the bundled catalog and upsert every record in one transaction.
///
/// Existing rows with the same ids are overwritten, so running this twice
/// is harmless.
pub async fn seed_catalog(pool: &PgPool) -> Result<SeedReport, CatalogError> {
    let seed = SeedCatalog::bundled().map_err(CatalogError::Seed)?;
    let catalog = seed.into_catalog()?;

    let mut tx = pool.begin().await?;
    for character in catalog.characters() {
        CharacterRepo::upsert(&mut *tx, character).await?;
    }
    for item in catalog.items() {
        ItemRepo::upsert(&mut *tx, item).await?;
    }
    for synergy in catalog.synergies() {
        SynergyRepo::upsert(&mut *tx, synergy).await?;
    }
    tx.commit().await?;

    let report = SeedReport {
        characters: catalog.characters().len(),
        items: catalog.items().len(),
        synergies: catalog.synergies().len(),
    };
    tracing::info!(
        characters = report.characters,
        items = report.items,
        synergies = report.synergies,
        "Seed catalog imported"
    );
    Ok(report)
}
