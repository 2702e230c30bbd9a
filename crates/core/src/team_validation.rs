//! Structural lineup checks.
//!
//! Errors block submission; warnings are advisory. Validation only reads the
//! seven starting slots, never the bench or the catalog.

use serde::Serialize;

use crate::catalog::Position;
use crate::team::{SlotKey, TeamPositions};

/// Outcome of [`validate_team`]. `is_valid` is true iff `errors` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TeamValidation {
    pub is_valid: bool,
    pub errors: Vec<String>,
    pub warnings: Vec<String>,
}

/// Validate a lineup.
///
/// Errors, in order: setter, libero and opposite missing, then zero middle
/// blockers, then zero wing spikers. Warnings: a lone middle blocker, a lone
/// wing spiker, then one entry per slot whose character plays another role.
pub fn validate_team(positions: &TeamPositions) -> TeamValidation {
    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    for key in [SlotKey::Setter, SlotKey::Libero, SlotKey::Opposite] {
        if positions.slot(key).is_empty() {
            errors.push(format!("{} position is required", key.label()));
        }
    }

    for position in [Position::MiddleBlocker, Position::WingSpiker] {
        match positions.filled_count(position) {
            0 => errors.push(format!(
                "At least one {} is required",
                position.display_name()
            )),
            1 => warnings.push(format!(
                "Consider adding a second {}",
                position.display_name()
            )),
            _ => {}
        }
    }

    for (key, slot) in positions.iter() {
        let Some(character) = &slot.character else {
            continue;
        };
        let expected = key.expected_position();
        if character.position != expected {
            warnings.push(format!(
                "{} has character with position {} instead of {}",
                key.label(),
                character.position.as_str(),
                expected.as_str()
            ));
        }
    }

    TeamValidation {
        is_valid: errors.is_empty(),
        errors,
        warnings,
    }
}
