//! Item row model.

use courtside_core::catalog::{Item, ItemType};
use courtside_core::error::CoreError;
use courtside_core::types::Timestamp;
use sqlx::FromRow;

/// A row from the `items` table.
#[derive(Debug, Clone, FromRow)]
pub struct ItemRow {
    pub id: String,
    pub name: String,
    pub item_type: String,
    pub effects: Vec<String>,
    pub image_url: Option<String>,
    pub thumbnail_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<ItemRow> for Item {
    type Error = CoreError;

    fn try_from(row: ItemRow) -> Result<Self, Self::Error> {
        Ok(Item {
            item_type: ItemType::from_str_value(&row.item_type).map_err(CoreError::Validation)?,
            id: row.id,
            name: row.name,
            effects: row.effects,
            image_url: row.image_url,
            thumbnail_url: row.thumbnail_url,
        })
    }
}
