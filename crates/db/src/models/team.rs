//! Team entity model and DTOs.

use courtside_core::error::CoreError;
use courtside_core::team::{SlotData, TeamPositions, TeamType};
use courtside_core::types::{DbId, Timestamp};
use serde::{Deserialize, Deserializer, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `teams` table.
#[derive(Debug, Clone, FromRow)]
pub struct TeamRow {
    pub id: DbId,
    pub user_id: String,
    pub name: String,
    pub positions: Json<TeamPositions>,
    pub bench: Json<Vec<SlotData>>,
    pub team_type: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A stored team with its JSONB columns decoded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: DbId,
    pub user_id: String,
    pub name: String,
    pub positions: TeamPositions,
    pub bench: Vec<SlotData>,
    pub team_type: Option<TeamType>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TryFrom<TeamRow> for Team {
    type Error = CoreError;

    fn try_from(row: TeamRow) -> Result<Self, Self::Error> {
        let team_type = row
            .team_type
            .as_deref()
            .map(TeamType::from_str_value)
            .transpose()
            .map_err(CoreError::Validation)?;
        Ok(Team {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            positions: row.positions.0,
            bench: row.bench.0,
            team_type,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// DTO for creating a team. Slots default to empty.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTeam {
    pub user_id: String,
    pub name: String,
    pub positions: Option<TeamPositions>,
    pub bench: Option<Vec<SlotData>>,
    pub team_type: Option<TeamType>,
}

/// DTO for updating a team. Absent fields are left untouched.
///
/// `team_type` distinguishes "absent" (`None`) from an explicit `null`
/// (`Some(None)`), which clears the stored value.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeam {
    pub name: Option<String>,
    pub positions: Option<TeamPositions>,
    pub bench: Option<Vec<SlotData>>,
    #[serde(default, deserialize_with = "present")]
    pub team_type: Option<Option<TeamType>>,
}

/// Deserialize a field that is present in the payload, even when `null`.
fn present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}
