//! Repository for the `teams` table.

use courtside_core::team::TeamPositions;
use courtside_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::decode_error;
use crate::models::team::{CreateTeam, Team, TeamRow, UpdateTeam};

const COLUMNS: &str = "id, user_id, name, positions, bench, team_type, created_at, updated_at";

/// Provides CRUD operations for teams plus duplication.
pub struct TeamRepo;

impl TeamRepo {
    /// Insert a new team, returning the created row.
    ///
    /// Missing `positions` default to seven empty slots; missing `bench`
    /// defaults to an empty list.
    pub async fn create(pool: &PgPool, input: &CreateTeam) -> Result<Team, sqlx::Error> {
        let positions = input.positions.clone().unwrap_or_else(TeamPositions::empty);
        let bench = input.bench.clone().unwrap_or_default();

        let query = format!(
            "INSERT INTO teams (user_id, name, positions, bench, team_type)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let row = sqlx::query_as::<_, TeamRow>(&query)
            .bind(&input.user_id)
            .bind(&input.name)
            .bind(Json(&positions))
            .bind(Json(&bench))
            .bind(input.team_type.map(|t| t.as_str()))
            .fetch_one(pool)
            .await?;
        Team::try_from(row).map_err(decode_error)
    }

    /// Find a team by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Team>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM teams WHERE id = $1");
        sqlx::query_as::<_, TeamRow>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await?
            .map(Team::try_from)
            .transpose()
            .map_err(decode_error)
    }

    /// List a user's teams, most recently updated first.
    pub async fn list_by_user(pool: &PgPool, user_id: &str) -> Result<Vec<Team>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM teams
             WHERE user_id = $1
             ORDER BY updated_at DESC, id DESC"
        );
        sqlx::query_as::<_, TeamRow>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?
            .into_iter()
            .map(Team::try_from)
            .collect::<Result<Vec<_>, _>>()
            .map_err(decode_error)
    }

    /// Update a team. Only fields present in `input` are applied; an
    /// explicit `team_type: null` clears the stored type.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTeam,
    ) -> Result<Option<Team>, sqlx::Error> {
        let query = format!(
            "UPDATE teams SET
                name = COALESCE($2, name),
                positions = COALESCE($3, positions),
                bench = COALESCE($4, bench),
                team_type = CASE WHEN $5::boolean THEN $6::text ELSE team_type END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamRow>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(input.positions.as_ref().map(Json))
            .bind(input.bench.as_ref().map(Json))
            .bind(input.team_type.is_some())
            .bind(input.team_type.flatten().map(|t| t.as_str()))
            .fetch_optional(pool)
            .await?
            .map(Team::try_from)
            .transpose()
            .map_err(decode_error)
    }

    /// Delete a team. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM teams WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Copy a team's owner, slots, bench and type under a new id and name.
    ///
    /// Returns `None` if the source team does not exist.
    pub async fn duplicate(
        pool: &PgPool,
        id: DbId,
        new_name: &str,
    ) -> Result<Option<Team>, sqlx::Error> {
        let query = format!(
            "INSERT INTO teams (user_id, name, positions, bench, team_type)
             SELECT user_id, $2, positions, bench, team_type FROM teams WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TeamRow>(&query)
            .bind(id)
            .bind(new_name)
            .fetch_optional(pool)
            .await?
            .map(Team::try_from)
            .transpose()
            .map_err(decode_error)
    }
}
