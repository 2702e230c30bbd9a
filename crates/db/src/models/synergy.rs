//! Synergy row model.

use courtside_core::catalog::Synergy;
use courtside_core::stats::StatBonus;
use courtside_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `synergies` table.
#[derive(Debug, Clone, FromRow)]
pub struct SynergyRow {
    pub id: String,
    pub name: String,
    pub description: String,
    pub required_characters: Vec<String>,
    pub stat_bonus: Json<StatBonus>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<SynergyRow> for Synergy {
    fn from(row: SynergyRow) -> Self {
        Synergy {
            id: row.id,
            name: row.name,
            description: row.description,
            required_characters: row.required_characters,
            stat_bonus: row.stat_bonus.0,
        }
    }
}
