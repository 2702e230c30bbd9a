//! Immutable reference catalog: characters, items and synergies.
//!
//! The catalog is validated once when it is built and then shared read-only
//! (typically as `Arc<Catalog>`). Evaluators receive it explicitly rather
//! than reaching for global state.

use std::collections::{BTreeSet, HashMap, HashSet};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::stats::{CharacterStats, StatBonus};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Smallest number of characters a synergy can require.
pub const MIN_SYNERGY_MEMBERS: usize = 2;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// The five on-court roles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Position {
    #[serde(rename = "S")]
    Setter,
    #[serde(rename = "MB")]
    MiddleBlocker,
    #[serde(rename = "WS")]
    WingSpiker,
    #[serde(rename = "L")]
    Libero,
    #[serde(rename = "OP")]
    Opposite,
}

impl Position {
    pub const ALL: [Position; 5] = [
        Position::Setter,
        Position::MiddleBlocker,
        Position::WingSpiker,
        Position::Libero,
        Position::Opposite,
    ];

    /// Short code used in storage and on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Setter => "S",
            Self::MiddleBlocker => "MB",
            Self::WingSpiker => "WS",
            Self::Libero => "L",
            Self::Opposite => "OP",
        }
    }

    pub fn from_str_value(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| format!("Invalid position '{s}'. Must be one of: S, MB, WS, L, OP"))
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Setter => "Setter",
            Self::MiddleBlocker => "Middle Blocker",
            Self::WingSpiker => "Wing Spiker",
            Self::Libero => "Libero",
            Self::Opposite => "Opposite",
        }
    }

    /// How many of this role a full starting lineup fields.
    pub fn required_count(&self) -> usize {
        match self {
            Self::MiddleBlocker | Self::WingSpiker => 2,
            Self::Setter | Self::Libero | Self::Opposite => 1,
        }
    }
}

/// Character rarity. Declaration order is the rarity order (R lowest).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    R,
    SR,
    SSR,
    SP,
    UR,
}

impl Rarity {
    pub const ALL: [Rarity; 5] = [Rarity::R, Rarity::SR, Rarity::SSR, Rarity::SP, Rarity::UR];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::R => "R",
            Self::SR => "SR",
            Self::SSR => "SSR",
            Self::SP => "SP",
            Self::UR => "UR",
        }
    }

    pub fn from_str_value(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| format!("Invalid rarity '{s}'. Must be one of: R, SR, SSR, SP, UR"))
    }
}

/// Equipment category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemType {
    Memory,
    #[serde(rename = "Potential Set")]
    PotentialSet,
}

impl ItemType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Memory => "Memory",
            Self::PotentialSet => "Potential Set",
        }
    }

    pub fn from_str_value(s: &str) -> Result<Self, String> {
        match s {
            "Memory" => Ok(Self::Memory),
            "Potential Set" => Ok(Self::PotentialSet),
            _ => Err(format!(
                "Invalid item type '{s}'. Must be one of: Memory, Potential Set"
            )),
        }
    }
}

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,
    pub description: String,
    /// Free-form power range such as `"120% - 150%"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub power: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Character {
    pub id: String,
    pub name: String,
    pub rarity: Rarity,
    pub position: Position,
    pub school: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub release_date: Option<NaiveDate>,
    pub stats: CharacterStats,
    #[serde(default)]
    pub skills: Vec<Skill>,
    /// Bond-group names. Informal; synergies are keyed by character id.
    #[serde(default)]
    pub bonds: Vec<String>,
    /// Symbol tags such as `quick`, `power`, `setter`.
    #[serde(default)]
    pub symbols: Vec<String>,
}

impl Character {
    pub fn has_symbol(&self, symbol: &str) -> bool {
        self.symbols.iter().any(|s| s == symbol)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub item_type: ItemType,
    pub effects: Vec<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Synergy {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Order is irrelevant; only membership matters.
    pub required_characters: Vec<String>,
    pub stat_bonus: StatBonus,
}

impl Synergy {
    pub fn requires(&self, character_id: &str) -> bool {
        self.required_characters.iter().any(|id| id == character_id)
    }
}

// ---------------------------------------------------------------------------
// Filtering
// ---------------------------------------------------------------------------

/// Conjunctive character filter. `None` fields match everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CharacterFilter {
    pub position: Option<Position>,
    pub school: Option<String>,
    pub rarity: Option<Rarity>,
    /// Case-insensitive substring of the character name.
    pub search: Option<String>,
}

impl CharacterFilter {
    pub fn matches(&self, character: &Character) -> bool {
        if self.position.is_some_and(|p| p != character.position) {
            return false;
        }
        if self.rarity.is_some_and(|r| r != character.rarity) {
            return false;
        }
        if let Some(school) = &self.school {
            if &character.school != school {
                return false;
            }
        }
        if let Some(search) = &self.search {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() && !character.name.to_lowercase().contains(&needle) {
                return false;
            }
        }
        true
    }
}

// ---------------------------------------------------------------------------
// Catalog
// ---------------------------------------------------------------------------

/// The validated, read-only reference data set.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    characters: Vec<Character>,
    items: Vec<Item>,
    synergies: Vec<Synergy>,
    character_index: HashMap<String, usize>,
    item_index: HashMap<String, usize>,
    synergy_index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting data that breaks catalog invariants:
    ///
    /// - ids are unique within each collection and non-empty
    /// - every synergy requires at least two distinct, known characters
    /// - every synergy bonus value is positive
    pub fn new(
        characters: Vec<Character>,
        items: Vec<Item>,
        synergies: Vec<Synergy>,
    ) -> Result<Self, CoreError> {
        let character_index = build_index("character", characters.iter().map(|c| c.id.as_str()))?;
        let item_index = build_index("item", items.iter().map(|i| i.id.as_str()))?;
        let synergy_index = build_index("synergy", synergies.iter().map(|s| s.id.as_str()))?;

        for synergy in &synergies {
            validate_synergy(synergy, &character_index)?;
        }

        Ok(Self {
            characters,
            items,
            synergies,
            character_index,
            item_index,
            synergy_index,
        })
    }

    pub fn characters(&self) -> &[Character] {
        &self.characters
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn synergies(&self) -> &[Synergy] {
        &self.synergies
    }

    pub fn character(&self, id: &str) -> Option<&Character> {
        self.character_index.get(id).map(|&i| &self.characters[i])
    }

    pub fn item(&self, id: &str) -> Option<&Item> {
        self.item_index.get(id).map(|&i| &self.items[i])
    }

    pub fn synergy(&self, id: &str) -> Option<&Synergy> {
        self.synergy_index.get(id).map(|&i| &self.synergies[i])
    }

    /// Characters matching `filter`, in catalog order.
    pub fn filter_characters<'a>(
        &'a self,
        filter: &'a CharacterFilter,
    ) -> impl Iterator<Item = &'a Character> + 'a {
        self.characters.iter().filter(move |c| filter.matches(c))
    }

    /// Distinct schools, ascending.
    pub fn schools(&self) -> Vec<&str> {
        let set: BTreeSet<&str> = self.characters.iter().map(|c| c.school.as_str()).collect();
        set.into_iter().collect()
    }
}

fn build_index<'a>(
    entity: &str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<HashMap<String, usize>, CoreError> {
    let mut index = HashMap::new();
    for (i, id) in ids.enumerate() {
        if id.trim().is_empty() {
            return Err(CoreError::Validation(format!(
                "{entity} at position {i} has an empty id"
            )));
        }
        if index.insert(id.to_string(), i).is_some() {
            return Err(CoreError::Conflict(format!(
                "duplicate {entity} id '{id}'"
            )));
        }
    }
    Ok(index)
}

fn validate_synergy(
    synergy: &Synergy,
    character_index: &HashMap<String, usize>,
) -> Result<(), CoreError> {
    let distinct: HashSet<&str> = synergy
        .required_characters
        .iter()
        .map(String::as_str)
        .collect();
    if distinct.len() != synergy.required_characters.len() {
        return Err(CoreError::Validation(format!(
            "synergy '{}' lists a required character more than once",
            synergy.id
        )));
    }
    if distinct.len() < MIN_SYNERGY_MEMBERS {
        return Err(CoreError::Validation(format!(
            "synergy '{}' must require at least {MIN_SYNERGY_MEMBERS} characters",
            synergy.id
        )));
    }
    if let Some(unknown) = synergy
        .required_characters
        .iter()
        .find(|id| !character_index.contains_key(id.as_str()))
    {
        return Err(CoreError::Validation(format!(
            "synergy '{}' requires unknown character '{unknown}'",
            synergy.id
        )));
    }
    synergy
        .stat_bonus
        .validate()
        .map_err(|e| CoreError::Validation(format!("synergy '{}': {e}", synergy.id)))
}

// ---------------------------------------------------------------------------
// Test fixtures
// ---------------------------------------------------------------------------
