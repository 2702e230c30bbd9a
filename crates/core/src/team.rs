//! Team composition state: seven positional slots plus a bench.
//!
//! Slots hold lightweight references to catalog records (id plus the few
//! attributes needed to render and validate a lineup), never the full
//! character data. The model deliberately permits incomplete or mismatched
//! lineups; those are reported by [`crate::team_validation`], not rejected
//! on mutation.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Catalog, Character, Item, ItemType, Position, Rarity};
use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum team name length in characters.
pub const MAX_TEAM_NAME_LENGTH: usize = 50;

// ---------------------------------------------------------------------------
// TeamType
// ---------------------------------------------------------------------------

/// Play-style classification, also used as a recommendation preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TeamType {
    Quick,
    Power,
    Block,
    Reception,
}

impl TeamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Quick => "Quick",
            Self::Power => "Power",
            Self::Block => "Block",
            Self::Reception => "Reception",
        }
    }

    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "Quick" => Ok(Self::Quick),
            "Power" => Ok(Self::Power),
            "Block" => Ok(Self::Block),
            "Reception" => Ok(Self::Reception),
            _ => Err(format!(
                "Invalid team type '{s}'. Must be one of: Quick, Power, Block, Reception"
            )),
        }
    }

    /// Character symbol tags that indicate fitness for this play style.
    pub fn relevant_symbols(&self) -> &'static [&'static str] {
        match self {
            Self::Quick => &["quick", "setter"],
            Self::Power => &["power", "serve"],
            Self::Block => &["block"],
            Self::Reception => &["receive"],
        }
    }
}

// ---------------------------------------------------------------------------
// Slot references
// ---------------------------------------------------------------------------

/// Reference to a catalog character placed in a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotCharacter {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub position: Position,
    pub school: String,
}

impl From<&Character> for SlotCharacter {
    fn from(character: &Character) -> Self {
        Self {
            id: character.id.clone(),
            name: character.name.clone(),
            rarity: character.rarity,
            position: character.position,
            school: character.school.clone(),
        }
    }
}

/// Reference to a catalog item attached to a slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SlotItem {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
}

impl From<&Item> for SlotItem {
    fn from(item: &Item) -> Self {
        Self {
            id: item.id.clone(),
            name: item.name.clone(),
            item_type: item.item_type,
        }
    }
}

/// One slot: an optional character and its attached items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SlotData {
    pub character: Option<SlotCharacter>,
    #[serde(default)]
    pub items: Vec<SlotItem>,
}

impl SlotData {
    pub fn is_empty(&self) -> bool {
        self.character.is_none()
    }
}

// ---------------------------------------------------------------------------
// SlotKey
// ---------------------------------------------------------------------------

/// The seven named starting slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlotKey {
    Setter,
    MiddleBlocker1,
    MiddleBlocker2,
    WingSpiker1,
    WingSpiker2,
    Libero,
    Opposite,
}

impl SlotKey {
    /// Slots in lineup order.
    pub const ALL: [SlotKey; 7] = [
        SlotKey::Setter,
        SlotKey::MiddleBlocker1,
        SlotKey::MiddleBlocker2,
        SlotKey::WingSpiker1,
        SlotKey::WingSpiker2,
        SlotKey::Libero,
        SlotKey::Opposite,
    ];

    /// The role a character in this slot is expected to play.
    pub fn expected_position(&self) -> Position {
        match self {
            Self::Setter => Position::Setter,
            Self::MiddleBlocker1 | Self::MiddleBlocker2 => Position::MiddleBlocker,
            Self::WingSpiker1 | Self::WingSpiker2 => Position::WingSpiker,
            Self::Libero => Position::Libero,
            Self::Opposite => Position::Opposite,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Setter => "Setter",
            Self::MiddleBlocker1 => "Middle Blocker 1",
            Self::MiddleBlocker2 => "Middle Blocker 2",
            Self::WingSpiker1 => "Wing Spiker 1",
            Self::WingSpiker2 => "Wing Spiker 2",
            Self::Libero => "Libero",
            Self::Opposite => "Opposite",
        }
    }
}

// ---------------------------------------------------------------------------
// TeamPositions
// ---------------------------------------------------------------------------

/// The starting lineup.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamPositions {
    pub setter: SlotData,
    pub middle_blocker1: SlotData,
    pub middle_blocker2: SlotData,
    pub wing_spiker1: SlotData,
    pub wing_spiker2: SlotData,
    pub libero: SlotData,
    pub opposite: SlotData,
}

impl TeamPositions {
    /// All seven slots empty.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn slot(&self, key: SlotKey) -> &SlotData {
        match key {
            SlotKey::Setter => &self.setter,
            SlotKey::MiddleBlocker1 => &self.middle_blocker1,
            SlotKey::MiddleBlocker2 => &self.middle_blocker2,
            SlotKey::WingSpiker1 => &self.wing_spiker1,
            SlotKey::WingSpiker2 => &self.wing_spiker2,
            SlotKey::Libero => &self.libero,
            SlotKey::Opposite => &self.opposite,
        }
    }

    pub fn slot_mut(&mut self, key: SlotKey) -> &mut SlotData {
        match key {
            SlotKey::Setter => &mut self.setter,
            SlotKey::MiddleBlocker1 => &mut self.middle_blocker1,
            SlotKey::MiddleBlocker2 => &mut self.middle_blocker2,
            SlotKey::WingSpiker1 => &mut self.wing_spiker1,
            SlotKey::WingSpiker2 => &mut self.wing_spiker2,
            SlotKey::Libero => &mut self.libero,
            SlotKey::Opposite => &mut self.opposite,
        }
    }

    /// Place (or clear, with `None`) a character. Returns the previous occupant.
    ///
    /// No role check happens here; mismatches surface as validation warnings.
    pub fn assign(&mut self, key: SlotKey, character: Option<SlotCharacter>) -> Option<SlotCharacter> {
        std::mem::replace(&mut self.slot_mut(key).character, character)
    }

    pub fn attach_item(&mut self, key: SlotKey, item: SlotItem) {
        self.slot_mut(key).items.push(item);
    }

    /// Slots paired with their keys, in lineup order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotKey, &SlotData)> + '_ {
        SlotKey::ALL.into_iter().map(move |key| (key, self.slot(key)))
    }

    /// How many slots whose expected role is `position` are filled.
    pub fn filled_count(&self, position: Position) -> usize {
        self.iter()
            .filter(|(key, slot)| key.expected_position() == position && !slot.is_empty())
            .count()
    }

    /// Ids of every character in the starting lineup. The bench never counts.
    pub fn deployed_character_ids(&self) -> HashSet<String> {
        self.iter()
            .filter_map(|(_, slot)| slot.character.as_ref().map(|c| c.id.clone()))
            .collect()
    }
}

/// Replace every slot reference with the catalog's own record.
///
/// Only ids are taken from the caller; name, rarity, position and school
/// always come from the catalog, so role checks see the real position.
/// Fails on the first id the catalog does not know.
pub fn resolve_references(
    catalog: &Catalog,
    positions: &mut TeamPositions,
    bench: &mut [SlotData],
) -> Result<(), CoreError> {
    for key in SlotKey::ALL {
        resolve_slot(catalog, positions.slot_mut(key))?;
    }
    for slot in bench {
        resolve_slot(catalog, slot)?;
    }
    Ok(())
}

fn resolve_slot(catalog: &Catalog, slot: &mut SlotData) -> Result<(), CoreError> {
    if let Some(character) = slot.character.as_mut() {
        let record = catalog.character(&character.id).ok_or_else(|| {
            CoreError::Validation(format!("unknown character '{}'", character.id))
        })?;
        *character = SlotCharacter::from(record);
    }
    for item in &mut slot.items {
        let record = catalog
            .item(&item.id)
            .ok_or_else(|| CoreError::Validation(format!("unknown item '{}'", item.id)))?;
        *item = SlotItem::from(record);
    }
    Ok(())
}

/// Validate a team name: 1 to [`MAX_TEAM_NAME_LENGTH`] characters after trimming.
pub fn validate_team_name(name: &str) -> Result<(), CoreError> {
    let len = name.trim().chars().count();
    if len == 0 {
        return Err(CoreError::Validation(
            "Team name must not be empty".to_string(),
        ));
    }
    if len > MAX_TEAM_NAME_LENGTH {
        return Err(CoreError::Validation(format!(
            "Team name must be at most {MAX_TEAM_NAME_LENGTH} characters"
        )));
    }
    Ok(())
}
