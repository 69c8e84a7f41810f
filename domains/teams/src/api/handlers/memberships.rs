//! Team membership workflow API handlers
//!
//! Each mutation follows the same shape: take the per-team lock, load the
//! team, run the [`TeamWorkflow`] transition and persist only the changed
//! lists. The lock is held until the write lands.

use axum::extract::State;
use hackhub_common::{validate_document_id, ApiResponse, Result, ValidatedJson};
use serde::Deserialize;
use validator::Validate;

use crate::api::middleware::TeamsState;
use crate::{LeaveOutcome, TeamWorkflow};

/// A user acting on a team (leave, join, delete)
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamActionRequest {
    #[validate(custom(function = "validate_document_id"))]
    pub team_id: String,

    #[validate(custom(function = "validate_document_id"))]
    pub user_id: String,
}

/// The leader deciding on a pending join request
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TeamRequestAction {
    #[validate(custom(function = "validate_document_id"))]
    pub team_id: String,

    #[validate(custom(function = "validate_document_id"))]
    pub leader_id: String,

    #[validate(custom(function = "validate_document_id"))]
    pub target_user_id: String,
}

/// Leave a team
///
/// **POST /api/teams/leave**
///
/// **Business Rules:**
/// - Only members can leave
/// - The leader leaving deletes the team
pub async fn leave_team(
    State(state): State<TeamsState>,
    ValidatedJson(request): ValidatedJson<TeamActionRequest>,
) -> Result<ApiResponse<()>> {
    let _guard = state.locks.acquire(&request.team_id).await;
    let team = state.teams.fetch(&request.team_id).await?;

    match TeamWorkflow::leave(&team, &request.user_id)? {
        LeaveOutcome::Disband => {
            state.teams.delete(&request.team_id).await?;
            tracing::info!(
                team_id = %request.team_id,
                leader_id = %request.user_id,
                "Leader left, team disbanded"
            );
            Ok(ApiResponse::message("Leader left. Team disbanded."))
        }
        LeaveOutcome::Departed(change) => {
            state.teams.save(&request.team_id, &change).await?;
            tracing::info!(
                team_id = %request.team_id,
                user_id = %request.user_id,
                "Member left team"
            );
            Ok(ApiResponse::message("Left team"))
        }
    }
}

/// Request to join a team
///
/// **POST /api/teams/join**
pub async fn join_team(
    State(state): State<TeamsState>,
    ValidatedJson(request): ValidatedJson<TeamActionRequest>,
) -> Result<ApiResponse<()>> {
    let _guard = state.locks.acquire(&request.team_id).await;
    let team = state.teams.fetch(&request.team_id).await?;

    let change = TeamWorkflow::join(&team, &request.user_id)?;
    state.teams.save(&request.team_id, &change).await?;

    tracing::info!(
        team_id = %request.team_id,
        user_id = %request.user_id,
        "Join request recorded"
    );
    Ok(ApiResponse::message("Join request sent"))
}

/// Approve a pending join request
///
/// **POST /api/teams/approve**
///
/// Leader only. The target moves from `join_requests` to the end of `members`.
pub async fn approve_request(
    State(state): State<TeamsState>,
    ValidatedJson(request): ValidatedJson<TeamRequestAction>,
) -> Result<ApiResponse<()>> {
    let _guard = state.locks.acquire(&request.team_id).await;
    let team = state.teams.fetch(&request.team_id).await?;

    let change = TeamWorkflow::approve(&team, &request.leader_id, &request.target_user_id)?;
    state.teams.save(&request.team_id, &change).await?;

    tracing::info!(
        team_id = %request.team_id,
        user_id = %request.target_user_id,
        "Join request approved"
    );
    Ok(ApiResponse::message("Member approved"))
}

/// Reject a pending join request
///
/// **POST /api/teams/reject**
pub async fn reject_request(
    State(state): State<TeamsState>,
    ValidatedJson(request): ValidatedJson<TeamRequestAction>,
) -> Result<ApiResponse<()>> {
    let _guard = state.locks.acquire(&request.team_id).await;
    let team = state.teams.fetch(&request.team_id).await?;

    let change = TeamWorkflow::reject(&team, &request.leader_id, &request.target_user_id)?;
    state.teams.save(&request.team_id, &change).await?;

    tracing::info!(
        team_id = %request.team_id,
        user_id = %request.target_user_id,
        "Join request rejected"
    );
    Ok(ApiResponse::message("Request rejected"))
}
