//! Common test utilities and fixtures for integration tests
//!
//! This module provides shared infrastructure for all integration tests:
//! - An application router over in-memory backends
//! - Handles on the mock store and identity service for seeding and asserting
//! - JSON request helpers and envelope assertions

use std::sync::Arc;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use hackhub_common::Config;
use hackhub_docstore::{
    mock::{InMemoryStore, MockIdentityService},
    Backends,
};
use serde_json::{json, Value};
use tower::ServiceExt;

/// Test application with direct access to its backends
pub struct TestApp {
    pub router: Router,
    pub store: InMemoryStore,
    pub identities: MockIdentityService,
    pub config: Config,
}

impl TestApp {
    /// Fresh application with the given users known to the directory
    pub fn with_users(users: &[(&str, &str)]) -> Self {
        let identities = users
            .iter()
            .fold(MockIdentityService::new(), |directory, (id, name)| {
                directory.with_user(id, name)
            });
        let store = InMemoryStore::new();

        let backends = Backends {
            store: Arc::new(store.clone()),
            users: Arc::new(identities.clone()),
            identities: Arc::new(identities.clone()),
        };

        let config = Config::from_lookup(|key| match key {
            "DOCSTORE_PROVIDER" => Some("mock".to_string()),
            _ => None,
        })
        .expect("mock config");

        let router = hackhub_app::create_app(&config, backends).expect("router");

        Self {
            router,
            store,
            identities,
            config,
        }
    }

    pub fn new() -> Self {
        Self::with_users(&[])
    }

    /// Send a request and decode the JSON response body
    pub async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(body.to_string())),
            None => builder.body(Body::empty()),
        }
        .expect("request");

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        let json = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or_else(|_| {
                Value::String(String::from_utf8_lossy(&bytes).into_owned())
            })
        };
        (status, json)
    }

    pub async fn get(&self, uri: &str) -> (StatusCode, Value) {
        self.send(Method::GET, uri, None).await
    }

    pub async fn post(&self, uri: &str, body: Value) -> (StatusCode, Value) {
        self.send(Method::POST, uri, Some(body)).await
    }

    /// Create a team and return its ID
    pub async fn create_team(&self, leader: &str, members: &[&str]) -> String {
        let (status, body) = self
            .post(
                "/api/teams",
                json!({
                    "name": "Rustaceans",
                    "hackathon_id": "hack-1",
                    "leader_id": leader,
                    "members": members,
                    "looking_for": ["frontend"],
                    "tech_stack": ["rust", "axum"]
                }),
            )
            .await;
        assert_eq!(status, StatusCode::CREATED, "create team failed: {body}");
        body["data"]["id"]
            .as_str()
            .expect("team id")
            .to_string()
    }

    /// Team as the API returns it
    pub async fn team(&self, team_id: &str) -> Value {
        let (status, body) = self.get(&format!("/api/teams/{team_id}")).await;
        assert_eq!(status, StatusCode::OK, "get team failed: {body}");
        body["data"].clone()
    }
}

pub mod assertions {
    use super::*;

    /// Assert a failure envelope with the given status and error code
    pub fn assert_error(response: &(StatusCode, Value), status: StatusCode, code: &str) {
        let (actual, body) = response;
        assert_eq!(*actual, status, "unexpected status, body: {body}");
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], code, "body: {body}");
        assert!(body["error"]["message"].is_string());
    }

    /// Assert a success envelope and return it
    pub fn assert_ok(response: (StatusCode, Value)) -> Value {
        let (status, body) = response;
        assert!(status.is_success(), "unexpected status {status}, body: {body}");
        assert_eq!(body["success"], true);
        body
    }

    pub fn ids(value: &Value) -> Vec<String> {
        value
            .as_array()
            .map(|items| {
                items
                    .iter()
                    .filter_map(|v| v.as_str().map(str::to_string))
                    .collect()
            })
            .unwrap_or_default()
    }
}
