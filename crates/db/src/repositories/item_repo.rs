//! Repository for the `items` table.

use courtside_core::catalog::{Item, ItemType};
use sqlx::{PgExecutor, PgPool};

use crate::decode_error;
use crate::models::item::ItemRow;

const COLUMNS: &str =
    "id, name, item_type, effects, image_url, thumbnail_url, created_at, updated_at";

/// Read and upsert operations for catalog items.
pub struct ItemRepo;

impl ItemRepo {
    /// Find an item by id.
    pub async fn find_by_id(pool: &PgPool, id: &str) -> Result<Option<Item>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM items WHERE id = $1");
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Item::try_from)
            .transpose()
            .map_err(decode_error)
    }

    /// List items, optionally restricted to one type, ordered by type then name.
    pub async fn list(
        pool: &PgPool,
        item_type: Option<ItemType>,
    ) -> Result<Vec<Item>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM items
             WHERE ($1::text IS NULL OR item_type = $1)
             ORDER BY item_type, name"
        );
        sqlx::query_as::<_, ItemRow>(&query)
            .bind(item_type.map(|t| t.as_str()))
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Item::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(decode_error)
    }

    /// Insert or fully replace an item keyed by id.
    pub async fn upsert<'e>(executor: impl PgExecutor<'e>, item: &Item) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO items (id, name, item_type, effects, image_url, thumbnail_url)
             VALUES ($1, $2, $3, $4, $5, $6)
             ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                item_type = EXCLUDED.item_type,
                effects = EXCLUDED.effects,
                image_url = EXCLUDED.image_url,
                thumbnail_url = EXCLUDED.thumbnail_url",
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(item.item_type.as_str())
        .bind(&item.effects)
        .bind(&item.image_url)
        .bind(&item.thumbnail_url)
        .execute(executor)
        .await?;
        Ok(())
    }
}
