//! Synergy activation and stat-bonus aggregation.
//!
//! A synergy is **active** for a set of deployed character ids when every
//! required character is present, and **potential** when some but not all
//! are present. Activation is a pure set-membership check, so results depend
//! only on the id set and never on the order ids were supplied in.

use std::collections::HashSet;

use serde::Serialize;

use crate::catalog::Synergy;
use crate::stats::CharacterStats;

// ---------------------------------------------------------------------------
// Types
// ---------------------------------------------------------------------------

/// Where a single synergy stands relative to a set of character ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SynergyStatus<'a> {
    Active,
    /// At least one member present, at least one missing.
    Potential { missing: Vec<&'a str> },
    Inactive,
}

/// A partially assembled synergy and what it still needs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PotentialSynergy {
    #[serde(flatten)]
    pub synergy: Synergy,
    /// Required ids not in the evaluated set, in requirement order.
    pub missing_characters: Vec<String>,
    /// `round(100 * present / required)`.
    pub completion_percentage: u8,
}

/// Full breakdown for one character-id set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SynergyEvaluation {
    pub active: Vec<Synergy>,
    pub potential: Vec<PotentialSynergy>,
    /// Per-stat sum of the bonuses of every active synergy.
    pub bonuses: CharacterStats,
    pub active_count: usize,
}

/// Bonus totals without the potential breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatBonusSummary {
    pub total_bonuses: CharacterStats,
    pub active_synergy_count: usize,
    pub active_synergies: Vec<Synergy>,
}

// ---------------------------------------------------------------------------
// Predicates
// ---------------------------------------------------------------------------

/// Classify `synergy` against `character_ids`.
pub fn classify<'a>(synergy: &'a Synergy, character_ids: &HashSet<String>) -> SynergyStatus<'a> {
    let missing: Vec<&str> = synergy
        .required_characters
        .iter()
        .map(String::as_str)
        .filter(|id| !character_ids.contains(*id))
        .collect();

    if missing.is_empty() {
        SynergyStatus::Active
    } else if missing.len() < synergy.required_characters.len() {
        SynergyStatus::Potential { missing }
    } else {
        SynergyStatus::Inactive
    }
}

/// `required_characters ⊆ character_ids`.
pub fn is_active(synergy: &Synergy, character_ids: &HashSet<String>) -> bool {
    synergy
        .required_characters
        .iter()
        .all(|id| character_ids.contains(id))
}

/// Rounded percentage of required members already present.
///
/// Halves round up. Returns 0 when `required` is 0.
pub fn completion_percentage(required: usize, missing: usize) -> u8 {
    if required == 0 {
        return 0;
    }
    let present = required.saturating_sub(missing);
    let pct = (200 * present + required) / (2 * required);
    pct.min(100) as u8
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Active synergies in catalog order.
pub fn active_synergies<'a>(
    character_ids: &HashSet<String>,
    synergies: &'a [Synergy],
) -> Vec<&'a Synergy> {
    synergies
        .iter()
        .filter(|s| is_active(s, character_ids))
        .collect()
}

/// Potential synergies in catalog order, with missing members and completion.
pub fn potential_synergies(
    character_ids: &HashSet<String>,
    synergies: &[Synergy],
) -> Vec<PotentialSynergy> {
    synergies
        .iter()
        .filter_map(|synergy| match classify(synergy, character_ids) {
            SynergyStatus::Potential { missing } => Some(PotentialSynergy {
                completion_percentage: completion_percentage(
                    synergy.required_characters.len(),
                    missing.len(),
                ),
                missing_characters: missing.into_iter().map(str::to_string).collect(),
                synergy: synergy.clone(),
            }),
            SynergyStatus::Active | SynergyStatus::Inactive => None,
        })
        .collect()
}

/// Active, potential and aggregated bonuses in a single pass over the catalog.
pub fn evaluate_synergies(
    character_ids: &HashSet<String>,
    synergies: &[Synergy],
) -> SynergyEvaluation {
    let mut active = Vec::new();
    let mut potential = Vec::new();
    let mut bonuses = CharacterStats::default();

    for synergy in synergies {
        match classify(synergy, character_ids) {
            SynergyStatus::Active => {
                bonuses.add_bonus(&synergy.stat_bonus);
                active.push(synergy.clone());
            }
            SynergyStatus::Potential { missing } => potential.push(PotentialSynergy {
                completion_percentage: completion_percentage(
                    synergy.required_characters.len(),
                    missing.len(),
                ),
                missing_characters: missing.into_iter().map(str::to_string).collect(),
                synergy: synergy.clone(),
            }),
            SynergyStatus::Inactive => {}
        }
    }

    SynergyEvaluation {
        active_count: active.len(),
        active,
        potential,
        bonuses,
    }
}

/// Sum the bonuses of every active synergy.
pub fn aggregate_stat_bonuses(
    character_ids: &HashSet<String>,
    synergies: &[Synergy],
) -> StatBonusSummary {
    let active: Vec<Synergy> = active_synergies(character_ids, synergies)
        .into_iter()
        .cloned()
        .collect();

    let mut total_bonuses = CharacterStats::default();
    for synergy in &active {
        total_bonuses.add_bonus(&synergy.stat_bonus);
    }

    StatBonusSummary {
        total_bonuses,
        active_synergy_count: active.len(),
        active_synergies: active,
    }
}
