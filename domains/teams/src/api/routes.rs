//! Route definitions for Teams domain API

use axum::{
    routing::{get, post},
    Router,
};

use super::handlers::{memberships, teams};
use super::middleware::TeamsState;

/// Team CRUD routes
fn team_routes() -> Router<TeamsState> {
    Router::new()
        .route(
            "/api/teams",
            get(teams::list_teams)
                .post(teams::create_team)
                .delete(teams::delete_team),
        )
        .route(
            "/api/teams/{team_id}",
            get(teams::get_team).put(teams::update_team),
        )
}

/// Membership workflow routes
fn membership_routes() -> Router<TeamsState> {
    Router::new()
        .route("/api/teams/leave", post(memberships::leave_team))
        .route("/api/teams/join", post(memberships::join_team))
        .route("/api/teams/approve", post(memberships::approve_request))
        .route("/api/teams/reject", post(memberships::reject_request))
}

/// Create all Teams domain API routes
pub fn routes() -> Router<TeamsState> {
    Router::new()
        .merge(team_routes())
        .merge(membership_routes())
}
