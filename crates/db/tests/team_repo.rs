//! Integration tests for team persistence.
//!
//! - Create with default and explicit slots
//! - Partial update, including clearing the team type
//! - Delete and duplicate semantics

use courtside_core::catalog::{Position, Rarity};
use courtside_core::team::{SlotCharacter, SlotKey, TeamPositions, TeamType};
use courtside_db::models::team::{CreateTeam, UpdateTeam};
use courtside_db::repositories::TeamRepo;
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_team(user_id: &str, name: &str) -> CreateTeam {
    CreateTeam {
        user_id: user_id.to_string(),
        name: name.to_string(),
        positions: None,
        bench: None,
        team_type: None,
    }
}

fn setter() -> SlotCharacter {
    SlotCharacter {
        id: "kageyama-ur".to_string(),
        name: "Kageyama".to_string(),
        rarity: Rarity::UR,
        position: Position::Setter,
        school: "Karasuno".to_string(),
    }
}

// ---------------------------------------------------------------------------
// Create / read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_defaults_to_empty_slots(pool: PgPool) {
    let team = TeamRepo::create(&pool, &new_team("user-1", "Karasuno A"))
        .await
        .unwrap();

    assert_eq!(team.name, "Karasuno A");
    assert_eq!(team.positions, TeamPositions::empty());
    assert!(team.bench.is_empty());
    assert_eq!(team.team_type, None);

    let found = TeamRepo::find_by_id(&pool, team.id).await.unwrap().unwrap();
    assert_eq!(found, team);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_list_by_user_is_scoped(pool: PgPool) {
    TeamRepo::create(&pool, &new_team("user-1", "First")).await.unwrap();
    TeamRepo::create(&pool, &new_team("user-1", "Second")).await.unwrap();
    TeamRepo::create(&pool, &new_team("user-2", "Other")).await.unwrap();

    let teams = TeamRepo::list_by_user(&pool, "user-1").await.unwrap();
    assert_eq!(teams.len(), 2);
    assert!(teams.iter().all(|t| t.user_id == "user-1"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_name_length_check_constraint(pool: PgPool) {
    let result = TeamRepo::create(&pool, &new_team("user-1", &"x".repeat(51))).await;
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_applies_only_present_fields(pool: PgPool) {
    let mut input = new_team("user-1", "Quick Set");
    input.team_type = Some(TeamType::Quick);
    let team = TeamRepo::create(&pool, &input).await.unwrap();

    let mut positions = TeamPositions::empty();
    positions.assign(SlotKey::Setter, Some(setter()));
    let update = UpdateTeam {
        positions: Some(positions.clone()),
        ..Default::default()
    };
    let updated = TeamRepo::update(&pool, team.id, &update)
        .await
        .unwrap()
        .unwrap();

    assert_eq!(updated.name, "Quick Set");
    assert_eq!(updated.positions, positions);
    assert_eq!(updated.team_type, Some(TeamType::Quick));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_can_clear_team_type(pool: PgPool) {
    let mut input = new_team("user-1", "Blockers");
    input.team_type = Some(TeamType::Block);
    let team = TeamRepo::create(&pool, &input).await.unwrap();

    let update = UpdateTeam {
        team_type: Some(None),
        ..Default::default()
    };
    let updated = TeamRepo::update(&pool, team.id, &update)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.team_type, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_team_returns_none(pool: PgPool) {
    let update = UpdateTeam {
        name: Some("Ghost".to_string()),
        ..Default::default()
    };
    let result = TeamRepo::update(&pool, 999_999, &update).await.unwrap();
    assert!(result.is_none());
}

// ---------------------------------------------------------------------------
// Delete / duplicate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_reports_whether_a_row_was_removed(pool: PgPool) {
    let team = TeamRepo::create(&pool, &new_team("user-1", "Temp")).await.unwrap();

    assert!(TeamRepo::delete(&pool, team.id).await.unwrap());
    assert!(!TeamRepo::delete(&pool, team.id).await.unwrap());
    assert!(TeamRepo::find_by_id(&pool, team.id).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_copies_content_under_new_identity(pool: PgPool) {
    let mut positions = TeamPositions::empty();
    positions.assign(SlotKey::Setter, Some(setter()));
    let input = CreateTeam {
        positions: Some(positions),
        team_type: Some(TeamType::Power),
        ..new_team("user-1", "Original")
    };
    let original = TeamRepo::create(&pool, &input).await.unwrap();

    let copy = TeamRepo::duplicate(&pool, original.id, "Copy")
        .await
        .unwrap()
        .unwrap();

    assert_ne!(copy.id, original.id);
    assert_eq!(copy.name, "Copy");
    assert_eq!(copy.user_id, original.user_id);
    assert_eq!(copy.positions, original.positions);
    assert_eq!(copy.bench, original.bench);
    assert_eq!(copy.team_type, original.team_type);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_missing_team_returns_none(pool: PgPool) {
    let result = TeamRepo::duplicate(&pool, 999_999, "Copy").await.unwrap();
    assert!(result.is_none());
}
