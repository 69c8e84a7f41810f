//! Team membership invariant tests
//!
//! Replays a long mixed sequence of workflow calls, successful and rejected,
//! and checks the stored team after every step:
//! - the leader is a member
//! - members and join requests are disjoint
//! - no ID appears twice in either list

use hackhub_docstore::DocumentStore;
use hackhub_teams::Team;
use serde_json::{json, Value};

use crate::common::TestApp;

async fn stored_team(app: &TestApp, team_id: &str) -> Option<Team> {
    let doc = app.store.get("teams", team_id).await.ok()?;
    Some(serde_json::from_value(Value::Object(doc)).expect("stored team"))
}

async fn assert_invariants(app: &TestApp, team_id: &str, step: &str) {
    if let Some(team) = stored_team(app, team_id).await {
        if let Err(violation) = team.check_invariants() {
            panic!("invariant broken after {step}: {violation}");
        }
    }
}

#[test_log::test(tokio::test)]
async fn test_invariants_hold_across_mixed_operations() {
    let app = TestApp::new();
    let team_id = app.create_team("L", &["A"]).await;
    assert_invariants(&app, &team_id, "create").await;

    let steps: Vec<(&str, Value)> = vec![
        ("join", json!({"user_id": "B"})),
        ("join", json!({"user_id": "B"})),
        ("join", json!({"user_id": "A"})),
        ("join", json!({"user_id": "L"})),
        ("join", json!({"user_id": "C"})),
        ("approve", json!({"leader_id": "A", "target_user_id": "B"})),
        ("approve", json!({"leader_id": "L", "target_user_id": "B"})),
        ("approve", json!({"leader_id": "L", "target_user_id": "B"})),
        ("join", json!({"user_id": "B"})),
        ("reject", json!({"leader_id": "L", "target_user_id": "C"})),
        ("join", json!({"user_id": "C"})),
        ("leave", json!({"user_id": "C"})),
        ("leave", json!({"user_id": "A"})),
        ("join", json!({"user_id": "A"})),
        ("approve", json!({"leader_id": "L", "target_user_id": "A"})),
        ("approve", json!({"leader_id": "L", "target_user_id": "C"})),
    ];

    for (action, mut body) in steps {
        body["team_id"] = json!(team_id);
        let (status, response) = app.post(&format!("/api/teams/{action}"), body.clone()).await;
        assert!(
            status.is_success() || status.is_client_error(),
            "{action} {body} answered {status}: {response}"
        );
        assert_invariants(&app, &team_id, &format!("{action} {body}")).await;
    }

    let team = stored_team(&app, &team_id).await.expect("team still exists");
    assert_eq!(team.members, vec!["L", "B", "A", "C"]);
    assert!(team.join_requests.is_empty());
}

#[tokio::test]
async fn test_join_then_approve_matches_direct_membership() {
    let app = TestApp::new();
    let via_workflow = app.create_team("L", &["B"]).await;
    let direct = app.create_team("L", &["B", "A"]).await;

    app.post(
        "/api/teams/join",
        json!({"team_id": via_workflow, "user_id": "A"}),
    )
    .await;
    app.post(
        "/api/teams/approve",
        json!({"team_id": via_workflow, "leader_id": "L", "target_user_id": "A"}),
    )
    .await;

    let a = stored_team(&app, &via_workflow).await.expect("workflow team");
    let b = stored_team(&app, &direct).await.expect("direct team");
    assert_eq!(a.members, vec!["B", "L", "A"]);
    assert_eq!(b.members, vec!["B", "A", "L"]);

    let mut a_sorted = a.members.clone();
    let mut b_sorted = b.members.clone();
    a_sorted.sort();
    b_sorted.sort();
    assert_eq!(a_sorted, b_sorted);
    assert_eq!(a.join_requests, b.join_requests);
}
