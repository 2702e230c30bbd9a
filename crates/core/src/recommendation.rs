//! Candidate ranking for an open slot.
//!
//! Each eligible character gets four sub-scores in `[0, 1]`, combined
//! linearly with caller-supplied weights. Candidates are sorted by total
//! score descending with a stable sort, so ties keep catalog order.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::catalog::{Character, Position, Synergy};
use crate::error::CoreError;
use crate::team::TeamType;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

pub const DEFAULT_LIMIT: usize = 10;
pub const MAX_LIMIT: usize = 50;

/// Upper bound for every weight.
pub const MAX_WEIGHT: f64 = 5.0;

/// Team-type score used when the caller states no preference.
pub const NEUTRAL_TEAM_TYPE_SCORE: f64 = 0.5;

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Normalization constants for the synergy and stats sub-scores.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoringConstants {
    /// Raw synergy credit is divided by this before clamping to 1.0.
    pub synergy_divisor: f64,
    /// Stat total that maps to a stats score of 1.0.
    pub stats_ceiling: f64,
}

impl Default for ScoringConstants {
    fn default() -> Self {
        Self {
            synergy_divisor: 3.0,
            stats_ceiling: 11000.0,
        }
    }
}

impl ScoringConstants {
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in [
            ("synergy_divisor", self.synergy_divisor),
            ("stats_ceiling", self.stats_ceiling),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(CoreError::Validation(format!(
                    "{name} must be a positive number, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Weighting of the four sub-scores plus eligibility options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommendationWeights {
    pub synergy: f64,
    pub anchor: f64,
    pub team_type: f64,
    pub stats: f64,
    /// Consider characters of any role. Ignored for Libero.
    pub allow_cross_role: bool,
    pub preferred_types: Vec<TeamType>,
}

impl Default for RecommendationWeights {
    fn default() -> Self {
        Self {
            synergy: 3.0,
            anchor: 1.0,
            team_type: 1.5,
            stats: 1.0,
            allow_cross_role: false,
            preferred_types: Vec::new(),
        }
    }
}

impl RecommendationWeights {
    /// Every weight must be finite and within `[0, MAX_WEIGHT]`.
    pub fn validate(&self) -> Result<(), CoreError> {
        for (name, value) in [
            ("synergy", self.synergy),
            ("anchor", self.anchor),
            ("team_type", self.team_type),
            ("stats", self.stats),
        ] {
            if !value.is_finite() || !(0.0..=MAX_WEIGHT).contains(&value) {
                return Err(CoreError::Validation(format!(
                    "weight '{name}' must be between 0 and {MAX_WEIGHT}, got {value}"
                )));
            }
        }
        Ok(())
    }
}

/// Validate a result limit against `[1, MAX_LIMIT]`.
pub fn validate_limit(limit: usize) -> Result<(), CoreError> {
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(CoreError::Validation(format!(
            "limit must be between 1 and {MAX_LIMIT}, got {limit}"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Results
// ---------------------------------------------------------------------------

/// Per-component scores, each in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub synergy_score: f64,
    pub anchor_score: f64,
    pub team_type_score: f64,
    pub stats_score: f64,
}

impl ScoreBreakdown {
    pub fn weighted_total(&self, weights: &RecommendationWeights) -> f64 {
        weights.synergy * self.synergy_score
            + weights.anchor * self.anchor_score
            + weights.team_type * self.team_type_score
            + weights.stats * self.stats_score
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub character: Character,
    pub score: f64,
    pub reasoning: ScoreBreakdown,
    /// Synergies this candidate would complete with the current selection.
    pub potential_synergies: Vec<Synergy>,
}

// ---------------------------------------------------------------------------
// Sub-scores
// ---------------------------------------------------------------------------

/// True when every other member of `synergy` is already in `current`.
fn would_complete(synergy: &Synergy, candidate_id: &str, current: &HashSet<String>) -> bool {
    synergy
        .required_characters
        .iter()
        .filter(|id| id.as_str() != candidate_id)
        .all(|id| current.contains(id))
}

/// Synergy relevance of `candidate_id` given the current selection.
///
/// A synergy the candidate completes earns 1.0; one it joins with at least
/// one other member present earns `matching / required`. The sum is divided
/// by `divisor` and clamped to 1.0.
pub fn synergy_score(
    candidate_id: &str,
    current: &HashSet<String>,
    synergies: &[Synergy],
    divisor: f64,
) -> f64 {
    let raw: f64 = synergies
        .iter()
        .filter(|s| s.requires(candidate_id))
        .map(|synergy| {
            if would_complete(synergy, candidate_id, current) {
                return 1.0;
            }
            let matching = synergy
                .required_characters
                .iter()
                .filter(|id| id.as_str() != candidate_id && current.contains(*id))
                .count();
            matching as f64 / synergy.required_characters.len() as f64
        })
        .sum();

    (raw / divisor).min(1.0)
}

/// Average fraction of each preferred type's symbols the candidate carries.
pub fn team_type_score(character: &Character, preferred: &[TeamType]) -> f64 {
    if preferred.is_empty() {
        return NEUTRAL_TEAM_TYPE_SCORE;
    }

    let total: f64 = preferred
        .iter()
        .map(|team_type| {
            let relevant = team_type.relevant_symbols();
            let matching = relevant.iter().filter(|s| character.has_symbol(s)).count();
            matching as f64 / relevant.len() as f64
        })
        .sum();

    (total / preferred.len() as f64).min(1.0)
}

/// Stat total over `ceiling`, clamped to 1.0.
pub fn stats_score(character: &Character, ceiling: f64) -> f64 {
    (character.stats.total() as f64 / ceiling).min(1.0)
}

/// Score one candidate.
pub fn score_candidate(
    character: &Character,
    current: &HashSet<String>,
    preferred: &[TeamType],
    synergies: &[Synergy],
    constants: &ScoringConstants,
) -> ScoreBreakdown {
    let synergy_score = synergy_score(&character.id, current, synergies, constants.synergy_divisor);
    ScoreBreakdown {
        synergy_score,
        anchor_score: if synergy_score > 0.0 { 1.0 } else { 0.0 },
        team_type_score: team_type_score(character, preferred),
        stats_score: stats_score(character, constants.stats_ceiling),
    }
}

// ---------------------------------------------------------------------------
// Ranking
// ---------------------------------------------------------------------------

/// Whether `character` may fill `position`. Libero never accepts other roles.
pub fn is_eligible(character: &Character, position: Position, allow_cross_role: bool) -> bool {
    if !allow_cross_role || position == Position::Libero {
        character.position == position
    } else {
        true
    }
}

/// Rank the best `limit` candidates for `position`.
///
/// Characters already in `current` are never recommended. Rejects invalid
/// weights, constants or limits before scoring anything.
pub fn recommend_candidates(
    position: Position,
    current: &HashSet<String>,
    weights: &RecommendationWeights,
    limit: usize,
    characters: &[Character],
    synergies: &[Synergy],
    constants: &ScoringConstants,
) -> Result<Vec<Recommendation>, CoreError> {
    weights.validate()?;
    constants.validate()?;
    validate_limit(limit)?;

    let mut ranked: Vec<Recommendation> = characters
        .iter()
        .filter(|c| is_eligible(c, position, weights.allow_cross_role))
        .filter(|c| !current.contains(&c.id))
        .map(|character| {
            let reasoning = score_candidate(
                character,
                current,
                &weights.preferred_types,
                synergies,
                constants,
            );
            let potential_synergies = synergies
                .iter()
                .filter(|s| s.requires(&character.id) && would_complete(s, &character.id, current))
                .cloned()
                .collect();
            Recommendation {
                character: character.clone(),
                score: reasoning.weighted_total(weights),
                reasoning,
                potential_synergies,
            }
        })
        .collect();

    ranked.sort_by(|left, right| right.score.total_cmp(&left.score));
    ranked.truncate(limit);
    Ok(ranked)
}
