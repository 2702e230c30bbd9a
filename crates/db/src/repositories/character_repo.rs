//! Repository for the `characters` table.

use courtside_core::catalog::{Character, CharacterFilter};
use sqlx::types::Json;
use sqlx::{PgExecutor, PgPool};

use crate::decode_error;
use crate::models::character::CharacterRow;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, rarity, position, school, image_url, release_date, \
    stats, skills, bonds, symbols, created_at, updated_at";

/// Highest rarity first, then name.
const ORDER_BY: &str =
    "array_position(ARRAY['UR', 'SP', 'SSR', 'SR', 'R']::text[], rarity), name, id";

/// Read and upsert operations for catalog characters.
pub struct CharacterRepo;

impl CharacterRepo {
    /// Find a character by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Character>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM characters WHERE id = $1");
        sqlx::query_as::<_, CharacterRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Character::try_from)
            .transpose()
            .map_err(decode_error)
    }

    /// List characters matching every supplied filter field.
    ///
    /// `search` is a case-insensitive substring match on the name.
    pub async fn list(
        pool: &PgPool,
        filter: &CharacterFilter,
    ) -> Result<Vec<Character>, sqlx::Error> {
        let search = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(|s| format!("%{}%", escape_like(s)));

        let query = format!(
            "SELECT {COLUMNS} FROM characters
             WHERE ($1::text IS NULL OR position = $1)
               AND ($2::text IS NULL OR school = $2)
               AND ($3::text IS NULL OR rarity = $3)
               AND ($4::text IS NULL OR name ILIKE $4)
             ORDER BY {ORDER_BY}"
        );
        sqlx::query_as::<_, CharacterRow>(&query)
            .bind(filter.position.map(|p| p.as_str()))
            .bind(filter.school.as_deref())
            .bind(filter.rarity.map(|r| r.as_str()))
            .bind(search)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Character::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(decode_error)
    }

    /// Distinct school names, ascending.
    pub async fn list_schools(pool: &PgPool) -> Result<Vec<String>, sqlx::Error> {
        sqlx::query_scalar::<_, String>("SELECT DISTINCT school FROM characters ORDER BY school")
            .fetch_all(pool)
            .await
    }

    /// Insert or fully replace a character keyed by id.
    pub async fn upsert<'e>(
        executor: impl PgExecutor<'e>,
        character: &Character,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO characters
                (id, name, rarity, position, school, image_url, release_date,
                 stats, skills, bonds, symbols)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                rarity = EXCLUDED.rarity,
                position = EXCLUDED.position,
                school = EXCLUDED.school,
                image_url = EXCLUDED.image_url,
                release_date = EXCLUDED.release_date,
                stats = EXCLUDED.stats,
                skills = EXCLUDED.skills,
                bonds = EXCLUDED.bonds,
                symbols = EXCLUDED.symbols",
        )
        .bind(&character.id)
        .bind(&character.name)
        .bind(character.rarity.as_str())
        .bind(character.position.as_str())
        .bind(&character.school)
        .bind(&character.image_url)
        .bind(character.release_date)
        .bind(Json(&character.stats))
        .bind(Json(&character.skills))
        .bind(&character.bonds)
        .bind(&character.symbols)
        .execute(executor)
        .await?;
        Ok(())
    }
}

/// Escape `LIKE` metacharacters so user input matches literally.
fn escape_like(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        if matches!(ch, '%' | '_' | '\\') {
            out.push('\\');
        }
        out.push(ch);
    }
    out
}
