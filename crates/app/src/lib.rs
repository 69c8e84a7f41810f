//! HackHub application composition root
//!
//! Composes all domain routers into a single application.

use axum::{http::HeaderValue, Router};
use hackhub_accounts::AccountsState;
use hackhub_common::Config;
use hackhub_docstore::Backends;
use hackhub_hackathons::HackathonsState;
use hackhub_teams::TeamsState;
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    limit::RequestBodyLimitLayer,
};

/// Largest accepted request body
pub const MAX_BODY_BYTES: usize = 1024 * 1024;

/// Create the main application router with all routes
pub fn create_app(config: &Config, backends: Backends) -> Result<Router, anyhow::Error> {
    let accounts_state = AccountsState::new(&backends, config.collection_users.clone());
    let hackathons_state = HackathonsState::new(&backends, config.collection_hackathons.clone());
    let teams_state = TeamsState::new(&backends, config.collection_teams.clone());

    // Build router — compose domain routers with shared infrastructure routes
    let app = Router::new()
        .route("/health", axum::routing::get(health_check))
        .route(
            "/",
            axum::routing::get(|| async { "HackHub API is running" }),
        )
        .merge(hackhub_accounts::routes().with_state(accounts_state))
        .merge(hackhub_hackathons::routes().with_state(hackathons_state))
        .merge(hackhub_teams::routes().with_state(teams_state));

    tracing::debug!(provider = %config.docstore_provider, "Application router composed");
    Ok(app)
}

/// CORS from a comma separated origin list; `*` allows everything
pub fn build_cors_layer(origins: &str) -> CorsLayer {
    if origins.trim() == "*" {
        return CorsLayer::permissive();
    }

    let allowed: Vec<HeaderValue> = origins
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods(Any)
        .allow_headers(Any)
}

/// Reject request bodies over [`MAX_BODY_BYTES`]
pub fn body_limit_layer() -> RequestBodyLimitLayer {
    RequestBodyLimitLayer::new(MAX_BODY_BYTES)
}

/// One line summary of the document store a config points at
pub fn describe_backend(config: &Config) -> String {
    let store = if config.docstore_provider == "mock" {
        "in-memory mock store".to_string()
    } else {
        format!(
            "{} at {} (project {}, database {})",
            config.docstore_provider,
            config.appwrite_endpoint,
            config.appwrite_project_id,
            config.appwrite_database_id
        )
    };
    format!(
        "{store}; collections users={}, hackathons={}, teams={}",
        config.collection_users, config.collection_hackathons, config.collection_teams
    )
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}
