//! HTTP tests for the synergy evaluation endpoints.
//!
//! These run against the bundled catalog in memory and never touch the
//! database.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

fn duo() -> serde_json::Value {
    json!({"character_ids": ["kageyama-ur", "hinata-sp"]})
}

// ---------------------------------------------------------------------------
// Test: POST /synergies/evaluate
// ---------------------------------------------------------------------------

#[tokio::test]
async fn evaluate_reports_active_potential_and_bonuses() {
    let app = common::build_offline_app();
    let response = post_json(app, "/api/v1/synergies/evaluate", duo()).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let data = &json["data"];

    assert_eq!(data["active_count"], 1);
    assert_eq!(data["active"][0]["id"], "eccentric-duo");
    assert_eq!(data["bonuses"]["spike"], 150);
    assert_eq!(data["bonuses"]["set"], 100);
    assert_eq!(data["bonuses"]["block"], 0);

    let potential: Vec<&str> = data["potential"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["id"].as_str().unwrap())
        .collect();
    assert_eq!(
        potential,
        [
            "karasuno-geniuses",
            "king-and-great-king",
            "cherry-blossom-viewing",
            "sun-vs-moon"
        ]
    );
}

#[tokio::test]
async fn evaluate_empty_selection_is_all_zero() {
    let app = common::build_offline_app();
    let response = post_json(
        app,
        "/api/v1/synergies/evaluate",
        json!({"character_ids": []}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"]["active_count"], 0);
    assert_eq!(json["data"]["potential"], json!([]));
    assert_eq!(json["data"]["bonuses"]["spike"], 0);
}

#[tokio::test]
async fn unknown_ids_are_ignored() {
    let app = common::build_offline_app();
    let response = post_json(
        app,
        "/api/v1/synergies/evaluate",
        json!({"character_ids": ["not-a-character"]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["active_count"], 0);
}

// ---------------------------------------------------------------------------
// Test: subset endpoints
// ---------------------------------------------------------------------------

#[tokio::test]
async fn active_returns_only_complete_synergies() {
    let app = common::build_offline_app();
    let response = post_json(app, "/api/v1/synergies/active", duo()).await;

    let json = body_json(response).await;
    let active = json["data"].as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["name"], "Eccentric Duo");
}

#[tokio::test]
async fn potential_lists_missing_members_and_completion() {
    let app = common::build_offline_app();
    let response = post_json(
        app,
        "/api/v1/synergies/potential",
        json!({"character_ids": ["aone-sp"]}),
    )
    .await;

    let json = body_json(response).await;
    let potential = json["data"].as_array().unwrap();

    let swimming = potential.iter().find(|p| p["id"] == "swimming").unwrap();
    assert_eq!(swimming["missing_characters"], json!(["bokuto-sp", "akaashi-sp"]));
    assert_eq!(swimming["completion_percentage"], 33);

    let iron_wall = potential.iter().find(|p| p["id"] == "iron-wall").unwrap();
    assert_eq!(iron_wall["missing_characters"], json!(["futakuchi-ssr"]));
    assert_eq!(iron_wall["completion_percentage"], 50);
}

#[tokio::test]
async fn stat_bonuses_sum_every_active_synergy() {
    let app = common::build_offline_app();
    let response = post_json(
        app,
        "/api/v1/synergies/stat-bonuses",
        json!({"character_ids": ["kageyama-ur", "hinata-sp", "nishinoya-sp", "tsukishima-sp"]}),
    )
    .await;

    let json = body_json(response).await;
    let data = &json["data"];

    // eccentric-duo + karasuno-geniuses + sun-vs-moon
    assert_eq!(data["active_synergy_count"], 3);
    assert_eq!(data["total_bonuses"]["spike"], 250);
    assert_eq!(data["total_bonuses"]["set"], 200);
    assert_eq!(data["total_bonuses"]["receive"], 150);
    assert_eq!(data["total_bonuses"]["block"], 100);
}

#[tokio::test]
async fn missing_character_ids_is_rejected() {
    let app = common::build_offline_app();
    let response = post_json(app, "/api/v1/synergies/evaluate", json!({})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
