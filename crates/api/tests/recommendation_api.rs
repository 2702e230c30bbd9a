//! HTTP tests for `POST /api/v1/recommendations/suggest`.

mod common;

use axum::http::StatusCode;
use common::{body_json, post_json};
use serde_json::json;

const SUGGEST: &str = "/api/v1/recommendations/suggest";

fn ranked_ids(json: &serde_json::Value) -> Vec<String> {
    json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["character"]["id"].as_str().unwrap().to_string())
        .collect()
}

// ---------------------------------------------------------------------------
// Test: ranking
// ---------------------------------------------------------------------------

#[tokio::test]
async fn synergy_partner_ranks_first() {
    let app = common::build_offline_app();
    let response = post_json(
        app,
        SUGGEST,
        json!({"position": "MB", "current_character_ids": ["kageyama-ur"]}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let top = &json["data"][0];

    assert_eq!(top["character"]["id"], "hinata-sp");
    assert_eq!(top["reasoning"]["anchor_score"], 1.0);
    assert_eq!(top["reasoning"]["team_type_score"], 0.5);
    assert_eq!(top["potential_synergies"][0]["id"], "eccentric-duo");

    let scores: Vec<f64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["score"].as_f64().unwrap())
        .collect();
    assert!(scores.windows(2).all(|w| w[0] >= w[1]));
}

#[tokio::test]
async fn results_stay_in_the_requested_position() {
    let app = common::build_offline_app();
    let response = post_json(app, SUGGEST, json!({"position": "OP"})).await;

    let json = body_json(response).await;
    let data = json["data"].as_array().unwrap();
    assert!(!data.is_empty());
    assert!(data.iter().all(|r| r["character"]["position"] == "OP"));
}

#[tokio::test]
async fn current_selection_is_never_recommended() {
    let app = common::build_offline_app();
    let response = post_json(
        app,
        SUGGEST,
        json!({
            "position": "S",
            "current_character_ids": ["kageyama-ur", "oikawa-ur"],
            "limit": 50
        }),
    )
    .await;

    let ids = ranked_ids(&body_json(response).await);
    assert!(!ids.contains(&"kageyama-ur".to_string()));
    assert!(!ids.contains(&"oikawa-ur".to_string()));
}

#[tokio::test]
async fn libero_ignores_cross_role() {
    let app = common::build_offline_app();
    let response = post_json(
        app,
        SUGGEST,
        json!({
            "position": "L",
            "weights": {"allow_cross_role": true},
            "limit": 50
        }),
    )
    .await;

    let mut ids = ranked_ids(&body_json(response).await);
    ids.sort();
    assert_eq!(ids, ["nishinoya-sp", "nishinoya-ssr", "yaku-ssr"]);
}

#[tokio::test]
async fn limit_truncates_results() {
    let app = common::build_offline_app();
    let response = post_json(
        app,
        SUGGEST,
        json!({"position": "WS", "weights": {"allow_cross_role": true}, "limit": 3}),
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(json["data"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn preferred_types_change_team_type_score() {
    let app = common::build_offline_app();
    let response = post_json(
        app,
        SUGGEST,
        json!({
            "position": "MB",
            "weights": {"preferred_types": ["Block"], "synergy": 0, "anchor": 0, "stats": 0},
            "limit": 50
        }),
    )
    .await;

    let json = body_json(response).await;
    let tendo = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["character"]["id"] == "tendo-ssr")
        .unwrap();
    assert!(tendo["reasoning"]["team_type_score"].as_f64().unwrap() > 0.0);
}

// ---------------------------------------------------------------------------
// Test: request validation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn weight_above_maximum_is_rejected() {
    let app = common::build_offline_app();
    let response = post_json(
        app,
        SUGGEST,
        json!({"position": "MB", "weights": {"synergy": 5.5}}),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn zero_limit_is_rejected() {
    let app = common::build_offline_app();
    let response = post_json(app, SUGGEST, json!({"position": "MB", "limit": 0})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn limit_above_maximum_is_rejected() {
    let app = common::build_offline_app();
    let response = post_json(app, SUGGEST, json!({"position": "MB", "limit": 51})).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn unknown_position_is_rejected() {
    let app = common::build_offline_app();
    let response = post_json(app, SUGGEST, json!({"position": "Coach"})).await;

    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
}
