//! Route definitions for Hackathons domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::hackathons;
use super::middleware::HackathonsState;

/// Create all Hackathons domain API routes
pub fn routes() -> Router<HackathonsState> {
    Router::new()
        .route(
            "/api/hackathons",
            get(hackathons::list_hackathons).post(hackathons::create_hackathon),
        )
        .route(
            "/api/hackathons/recommendations",
            post(hackathons::recommend_hackathons),
        )
}
