//! Repository for the `synergies` table.

use courtside_core::catalog::Synergy;
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};

use crate::models::synergy::SynergyRow;

const COLUMNS: &str =
    "id, name, description, required_characters, stat_bonus, created_at, updated_at";

/// Read and upsert operations for catalog synergies.
pub struct SynergyRepo;

impl SynergyRepo {
    /// Find a synergy by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Synergy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM synergies WHERE id = $1");
        let row = sqlx::query_as::<_, SynergyRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row.map(Synergy::from))
    }

    /// List all synergies ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Synergy>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM synergies ORDER BY name, id");
        let rows = sqlx::query_as::<_, SynergyRow>(&query)
            .fetch_all(pool)
            .await?;
        Ok(rows.into_iter().map(Synergy::from).collect())
    }

    /// Insert or fully replace a synergy keyed by id.
    pub async fn upsert<'e>(
        executor: impl PgExecutor<'e>,
        synergy: &Synergy,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO synergies (id, name, description, required_characters, stat_bonus)
             VALUES ($1, $2, $3, $4, $5)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                description = EXCLUDED.description,
                required_characters = EXCLUDED.required_characters,
                stat_bonus = EXCLUDED.stat_bonus",
        )
        .bind(&synergy.id)
        .bind(&synergy.name)
        .bind(&synergy.description)
        .bind(&synergy.required_characters)
        .bind(Json(&synergy.stat_bonus))
        .execute(executor)
        .await?;
        Ok(())
    }
}
