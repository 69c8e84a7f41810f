//! Hackathon endpoint integration tests
//!
//! - POST /api/hackathons - Create hackathon
//! - GET /api/hackathons - List hackathons
//! - POST /api/hackathons/recommendations - Tag based recommendations

use axum::http::StatusCode;
use serde_json::{json, Value};

use crate::common::assertions::{assert_error, assert_ok};
use crate::common::TestApp;

fn hackathon(name: &str, tags: &[&str]) -> Value {
    json!({
        "name": name,
        "description": "48 hours of building",
        "start_date": "2025-09-01T09:00:00Z",
        "end_date": "2025-09-03T09:00:00Z",
        "location": "Online",
        "tags": tags
    })
}

async fn seeded_catalog() -> TestApp {
    let app = TestApp::new();
    for (name, tags) in [("Alpha", vec!["AI", "Web3"]), ("Beta", vec!["Blockchain"])] {
        let (status, body) = app.post("/api/hackathons", hackathon(name, &tags)).await;
        assert_eq!(status, StatusCode::CREATED, "create failed: {body}");
    }
    app
}

fn names(body: &Value) -> Vec<String> {
    body["data"]
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|h| h["name"].as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn test_create_applies_defaults() {
    let app = TestApp::new();
    let (status, body) = app.post("/api/hackathons", hackathon("Alpha", &["AI"])).await;
    assert_eq!(status, StatusCode::CREATED);

    let created = &body["data"];
    assert!(created["id"].as_str().is_some_and(|id| !id.is_empty()));
    assert_eq!(created["status"], "draft");
    assert_eq!(created["mode"], "online");
    assert_eq!(created["min_team_size"], 1);
    assert_eq!(created["max_team_size"], 4);
}

#[tokio::test]
async fn test_create_rejects_bad_dates() {
    let app = TestApp::new();
    let mut body = hackathon("Alpha", &[]);
    body["start_date"] = json!("next tuesday");

    let response = app.post("/api/hackathons", body).await;
    assert_error(&response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_list_in_creation_order() {
    let app = seeded_catalog().await;
    let body = assert_ok(app.get("/api/hackathons").await);
    assert_eq!(names(&body), vec!["Alpha", "Beta"]);
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn test_recommend_by_tag() {
    let app = seeded_catalog().await;
    let body = assert_ok(app.post("/api/hackathons/recommendations", json!(["AI"])).await);
    assert_eq!(names(&body), vec!["Alpha"]);
    assert_eq!(body["count"], 1);

    let body = assert_ok(
        app.post("/api/hackathons/recommendations", json!(["Health"]))
            .await,
    );
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn test_empty_recommendation_equals_list() {
    let app = seeded_catalog().await;
    let recommended = assert_ok(app.post("/api/hackathons/recommendations", json!([])).await);
    let listed = assert_ok(app.get("/api/hackathons").await);
    assert_eq!(recommended["data"], listed["data"]);
}

#[tokio::test]
async fn test_recommendations_need_an_array() {
    let app = seeded_catalog().await;
    let response = app
        .post("/api/hackathons/recommendations", json!({"tags": ["AI"]}))
        .await;
    assert_error(&response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
}
