//! Team endpoint integration tests
//!
//! - POST /api/teams - Create team
//! - GET /api/teams - List teams (enriched)
//! - GET /api/teams/{id} - Get team (enriched)
//! - PUT /api/teams/{id} - Update team details
//! - DELETE /api/teams - Delete team
//! - POST /api/teams/join|approve|reject|leave - Membership workflow

use axum::http::{Method, StatusCode};
use serde_json::json;

use crate::common::assertions::{assert_error, assert_ok, ids};
use crate::common::TestApp;

mod test_create_team {
    use super::*;

    #[tokio::test]
    async fn test_leader_added_to_members() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &["A", "A"]).await;

        let team = app.team(&team_id).await;
        assert_eq!(ids(&team["members"]), vec!["A", "L"]);
        assert_eq!(ids(&team["join_requests"]), Vec::<String>::new());
        assert_eq!(team["status"], "open");
        assert_eq!(team["leader_id"], "L");
    }

    #[tokio::test]
    async fn test_invalid_body_is_validation_error() {
        let app = TestApp::new();
        let response = app
            .post("/api/teams", json!({"name": "", "hackathon_id": "h", "leader_id": "L"}))
            .await;
        assert_error(&response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR");

        let response = app.post("/api/teams", json!({"name": "No leader"})).await;
        assert_error(&response, StatusCode::BAD_REQUEST, "VALIDATION_ERROR");
        assert_eq!(app.store.count("teams"), 0);
    }
}

mod test_membership_workflow {
    use super::*;

    #[test_log::test(tokio::test)]
    async fn test_join_approve_then_reject_is_not_found() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &[]).await;

        let body = assert_ok(
            app.post("/api/teams/join", json!({"team_id": team_id, "user_id": "A"}))
                .await,
        );
        assert_eq!(body["message"], "Join request sent");
        assert_eq!(ids(&app.team(&team_id).await["join_requests"]), vec!["A"]);

        let body = assert_ok(
            app.post(
                "/api/teams/approve",
                json!({"team_id": team_id, "leader_id": "L", "target_user_id": "A"}),
            )
            .await,
        );
        assert_eq!(body["message"], "Member approved");

        let team = app.team(&team_id).await;
        assert_eq!(ids(&team["members"]), vec!["L", "A"]);
        assert!(ids(&team["join_requests"]).is_empty());

        let response = app
            .post(
                "/api/teams/reject",
                json!({"team_id": team_id, "leader_id": "L", "target_user_id": "A"}),
            )
            .await;
        assert_error(&response, StatusCode::NOT_FOUND, "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_duplicate_join_is_bad_request() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &["M"]).await;
        assert_ok(
            app.post("/api/teams/join", json!({"team_id": team_id, "user_id": "A"}))
                .await,
        );

        let pending = app
            .post("/api/teams/join", json!({"team_id": team_id, "user_id": "A"}))
            .await;
        assert_error(&pending, StatusCode::BAD_REQUEST, "BAD_REQUEST");
        assert_eq!(pending.1["error"]["message"], "Request already pending");

        let member = app
            .post("/api/teams/join", json!({"team_id": team_id, "user_id": "M"}))
            .await;
        assert_error(&member, StatusCode::BAD_REQUEST, "BAD_REQUEST");
        assert_eq!(member.1["error"]["message"], "Already in team");
    }

    #[tokio::test]
    async fn test_non_leader_decisions_are_forbidden() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &["M"]).await;
        assert_ok(
            app.post("/api/teams/join", json!({"team_id": team_id, "user_id": "A"}))
                .await,
        );

        for action in ["approve", "reject"] {
            let response = app
                .post(
                    &format!("/api/teams/{action}"),
                    json!({"team_id": team_id, "leader_id": "M", "target_user_id": "A"}),
                )
                .await;
            assert_error(&response, StatusCode::FORBIDDEN, "FORBIDDEN");
        }

        // Authorization is checked before the request lookup
        let response = app
            .post(
                "/api/teams/approve",
                json!({"team_id": team_id, "leader_id": "M", "target_user_id": "nobody"}),
            )
            .await;
        assert_error(&response, StatusCode::FORBIDDEN, "FORBIDDEN");

        assert_eq!(ids(&app.team(&team_id).await["join_requests"]), vec!["A"]);
    }

    #[tokio::test]
    async fn test_reject_drops_request_only() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &[]).await;
        for user in ["A", "B"] {
            assert_ok(
                app.post("/api/teams/join", json!({"team_id": team_id, "user_id": user}))
                    .await,
            );
        }

        let body = assert_ok(
            app.post(
                "/api/teams/reject",
                json!({"team_id": team_id, "leader_id": "L", "target_user_id": "A"}),
            )
            .await,
        );
        assert_eq!(body["message"], "Request rejected");

        let team = app.team(&team_id).await;
        assert_eq!(ids(&team["join_requests"]), vec!["B"]);
        assert_eq!(ids(&team["members"]), vec!["L"]);
    }

    #[tokio::test]
    async fn test_leader_leave_deletes_team() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &["A"]).await;

        let body = assert_ok(
            app.post("/api/teams/leave", json!({"team_id": team_id, "user_id": "L"}))
                .await,
        );
        assert_eq!(body["message"], "Leader left. Team disbanded.");

        let response = app.get(&format!("/api/teams/{team_id}")).await;
        assert_error(&response, StatusCode::NOT_FOUND, "NOT_FOUND");
        assert_eq!(app.store.count("teams"), 0);
    }

    #[tokio::test]
    async fn test_member_leave_removes_only_that_member() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &["A", "B"]).await;

        let body = assert_ok(
            app.post("/api/teams/leave", json!({"team_id": team_id, "user_id": "A"}))
                .await,
        );
        assert_eq!(body["message"], "Left team");
        assert_eq!(ids(&app.team(&team_id).await["members"]), vec!["B", "L"]);

        let response = app
            .post("/api/teams/leave", json!({"team_id": team_id, "user_id": "A"}))
            .await;
        assert_error(&response, StatusCode::BAD_REQUEST, "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_missing_team_is_not_found() {
        let app = TestApp::new();
        let response = app
            .post("/api/teams/join", json!({"team_id": "ghost", "user_id": "A"}))
            .await;
        assert_error(&response, StatusCode::NOT_FOUND, "NOT_FOUND");
        assert_eq!(response.1["error"]["message"], "Team not found");
    }
}

mod test_update_and_delete {
    use super::*;

    #[tokio::test]
    async fn test_leader_updates_supplied_fields_only() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &["A"]).await;

        let body = assert_ok(
            app.send(
                Method::PUT,
                &format!("/api/teams/{team_id}?user_id=L"),
                Some(json!({"name": "Crabs", "members": ["X"], "leader_id": "X"})),
            )
            .await,
        );
        assert_eq!(body["message"], "Team updated");

        let team = app.team(&team_id).await;
        assert_eq!(team["name"], "Crabs");
        assert_eq!(team["leader_id"], "L");
        assert_eq!(ids(&team["members"]), vec!["A", "L"]);
        assert_eq!(ids(&team["tech_stack"]), vec!["rust", "axum"]);
    }

    #[tokio::test]
    async fn test_empty_update_is_no_op() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &[]).await;

        let body = assert_ok(
            app.send(
                Method::PUT,
                &format!("/api/teams/{team_id}"),
                Some(json!({"user_id": "L"})),
            )
            .await,
        );
        assert_eq!(body["message"], "No changes");
    }

    #[tokio::test]
    async fn test_non_leader_update_is_forbidden() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &["A"]).await;

        let response = app
            .send(
                Method::PUT,
                &format!("/api/teams/{team_id}?user_id=A"),
                Some(json!({"name": "Hijacked"})),
            )
            .await;
        assert_error(&response, StatusCode::FORBIDDEN, "FORBIDDEN");
        assert_eq!(app.team(&team_id).await["name"], "Rustaceans");
    }

    #[tokio::test]
    async fn test_update_without_requester_is_bad_request() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &[]).await;

        let response = app
            .send(
                Method::PUT,
                &format!("/api/teams/{team_id}"),
                Some(json!({"name": "Anon"})),
            )
            .await;
        assert_error(&response, StatusCode::BAD_REQUEST, "BAD_REQUEST");
    }

    #[tokio::test]
    async fn test_only_leader_deletes() {
        let app = TestApp::new();
        let team_id = app.create_team("L", &["A"]).await;

        let response = app
            .send(
                Method::DELETE,
                "/api/teams",
                Some(json!({"team_id": team_id, "user_id": "A"})),
            )
            .await;
        assert_error(&response, StatusCode::FORBIDDEN, "FORBIDDEN");

        let body = assert_ok(
            app.send(
                Method::DELETE,
                "/api/teams",
                Some(json!({"team_id": team_id, "user_id": "L"})),
            )
            .await,
        );
        assert_eq!(body["message"], "Team deleted");
        assert_eq!(app.store.count("teams"), 0);
    }
}

mod test_enrichment {
    use super::*;

    #[tokio::test]
    async fn test_unresolvable_member_shows_unknown_user() {
        let app = TestApp::with_users(&[("U1", "Ada"), ("U2", "Grace")]);
        app.identities.fail_lookups_for("U2");
        let team_id = app.create_team("U1", &["U1", "U2"]).await;

        let team = app.team(&team_id).await;
        assert_eq!(
            team["members_enriched"],
            json!([
                {"userId": "U1", "name": "Ada", "avatar": ""},
                {"userId": "U2", "name": "Unknown User", "avatar": ""}
            ])
        );
    }

    #[tokio::test]
    async fn test_list_filters_by_member_and_enriches_requests() {
        let app = TestApp::with_users(&[("L", "Lin"), ("A", "Ann"), ("M", "Max")]);
        let first = app.create_team("L", &["A"]).await;
        app.create_team("M", &[]).await;
        assert_ok(
            app.post("/api/teams/join", json!({"team_id": first, "user_id": "M"}))
                .await,
        );

        let body = assert_ok(app.get("/api/teams").await);
        assert_eq!(body["count"], 2);

        let body = assert_ok(app.get("/api/teams?user_id=A").await);
        assert_eq!(body["count"], 1);
        let team = &body["data"][0];
        assert_eq!(team["id"], first.as_str());
        assert_eq!(
            team["join_requests_enriched"],
            json!([{"userId": "M", "name": "Max"}])
        );
        assert_eq!(team["members_enriched"][0]["name"], "Ann");
    }

    #[tokio::test]
    async fn test_list_is_empty_without_teams() {
        let app = TestApp::new();
        let body = assert_ok(app.get("/api/teams?user_id=nobody").await);
        assert_eq!(body["count"], 0);
        assert_eq!(body["data"], json!([]));
    }
}
