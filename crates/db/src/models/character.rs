//! Character row model.

use chrono::NaiveDate;
use courtside_core::catalog::{Character, Position, Rarity, Skill};
use courtside_core::error::CoreError;
use courtside_core::stats::CharacterStats;
use courtside_core::types::Timestamp;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `characters` table.
#[derive(Debug, Clone, FromRow)]
pub struct CharacterRow {
    pub id: String,
    pub name: String,
    pub rarity: String,
    pub position: String,
    pub school: String,
    pub image_url: Option<String>,
    pub release_date: Option<NaiveDate>,
    pub stats: Json<CharacterStats>,
    pub skills: Json<Vec<Skill>>,
    pub bonds: Vec<String>,
    pub symbols: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<CharacterRow> for Character {
    type Error = CoreError;

    fn try_from(row: CharacterRow) -> Result<Self, Self::Error> {
        Ok(Character {
            rarity: Rarity::from_str_value(&row.rarity).map_err(CoreError::Validation)?,
            position: Position::from_str_value(&row.position).map_err(CoreError::Validation)?,
            id: row.id,
            name: row.name,
            school: row.school,
            image_url: row.image_url,
            release_date: row.release_date,
            stats: row.stats.0,
            skills: row.skills.0,
            bonds: row.bonds,
            symbols: row.symbols,
        })
    }
}
