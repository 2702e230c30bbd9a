//! HTTP tests for the database-backed catalog endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get};
use courtside_db::seed::seed_catalog;
use sqlx::PgPool;

async fn seeded_app(pool: PgPool) -> axum::Router {
    seed_catalog(&pool).await.unwrap();
    common::build_test_app(pool)
}

fn ids(json: &serde_json::Value) -> Vec<&str> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v["id"].as_str().unwrap())
        .collect()
}

// ---------------------------------------------------------------------------
// Characters
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_characters_applies_every_filter(pool: PgPool) {
    let app = seeded_app(pool).await;
    let response = get(app, "/api/v1/characters?position=MB&school=Nekoma&rarity=SSR").await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(ids(&json), ["kuroo-ssr", "lev-ssr"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn search_is_case_insensitive(pool: PgPool) {
    let app = seeded_app(pool).await;
    let response = get(app, "/api/v1/characters?search=bOkUtO").await;

    let json = body_json(response).await;
    assert_eq!(ids(&json), ["bokuto-ur", "bokuto-sp"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_rarity_is_rejected(pool: PgPool) {
    let app = seeded_app(pool).await;
    let response = get(app, "/api/v1/characters?rarity=LR").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn character_lookup_returns_data_or_null(pool: PgPool) {
    let app = seeded_app(pool.clone()).await;
    let response = get(app, "/api/v1/characters/hinata-sp").await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["position"], "MB");
    assert_eq!(json["data"]["school"], "Karasuno");

    let app = common::build_test_app(pool);
    let response = get(app, "/api/v1/characters/hinata-lr").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"], serde_json::Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn schools_are_distinct(pool: PgPool) {
    let app = seeded_app(pool).await;
    let response = get(app, "/api/v1/characters/schools").await;

    let json = body_json(response).await;
    let schools = json["data"].as_array().unwrap();
    assert_eq!(schools.len(), 6);
    assert!(schools.contains(&serde_json::json!("Date Tech")));
}

// ---------------------------------------------------------------------------
// Items
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn items_split_by_type(pool: PgPool) {
    let app = seeded_app(pool.clone()).await;
    let json = body_json(get(app, "/api/v1/items/memories").await).await;
    let memories = json["data"].as_array().unwrap();
    assert_eq!(memories.len(), 5);
    assert!(memories.iter().all(|i| i["type"] == "Memory"));

    let app = common::build_test_app(pool.clone());
    let json = body_json(get(app, "/api/v1/items/potential-sets").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 5);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/items?type=Potential%20Set").await).await;
    assert!(json["data"]
        .as_array()
        .unwrap()
        .iter()
        .all(|i| i["type"] == "Potential Set"));
}

// ---------------------------------------------------------------------------
// Synergies
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn synergy_list_and_lookup(pool: PgPool) {
    let app = seeded_app(pool.clone()).await;
    let json = body_json(get(app, "/api/v1/synergies").await).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 20);

    let app = common::build_test_app(pool);
    let json = body_json(get(app, "/api/v1/synergies/iron-wall").await).await;
    assert_eq!(
        json["data"]["required_characters"],
        serde_json::json!(["aone-sp", "futakuchi-ssr"])
    );
    assert_eq!(json["data"]["stat_bonus"]["block"], 200);
}
