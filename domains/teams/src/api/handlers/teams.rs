//! Team management API handlers
//!
//! Team CRUD plus the enriched read endpoints. Leader checks are delegated
//! to [`TeamWorkflow`] so the rules live in one place.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
};
use hackhub_common::{validate_document_id, ApiResponse, Error, Result, ValidatedJson};
use serde::Deserialize;
use validator::{Validate, ValidationError};

use crate::api::handlers::memberships::TeamActionRequest;
use crate::api::middleware::TeamsState;
use crate::{
    enrich_team, enrich_teams, EnrichedTeam, NewTeam, Team, TeamDetails, TeamWorkflow,
    DEFAULT_TEAM_STATUS,
};

/// Every initial member ID must be a well formed document ID
fn validate_member_ids(ids: &[String]) -> std::result::Result<(), ValidationError> {
    ids.iter().try_for_each(|id| validate_document_id(id))
}

/// Request for creating a new team
#[derive(Debug, Deserialize, Validate)]
pub struct CreateTeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    #[validate(custom(function = "validate_document_id"))]
    pub hackathon_id: String,

    /// Trusted, caller supplied leader
    #[validate(custom(function = "validate_document_id"))]
    pub leader_id: String,

    /// Optional initial members; the leader is added when missing
    #[validate(custom(function = "validate_member_ids"))]
    pub members: Option<Vec<String>>,

    #[serde(default)]
    pub looking_for: Vec<String>,

    #[serde(default)]
    pub tech_stack: Vec<String>,

    #[validate(length(max = 255))]
    pub project_repo: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,
}

impl CreateTeamRequest {
    /// Build the stored document, enforcing the leader-in-members rule
    pub fn into_new_team(self) -> NewTeam {
        let members =
            TeamWorkflow::initial_members(&self.leader_id, self.members.as_deref().unwrap_or(&[]));
        NewTeam {
            name: self.name,
            description: self.description,
            hackathon_id: self.hackathon_id,
            leader_id: self.leader_id,
            members,
            join_requests: Vec::new(),
            looking_for: self.looking_for,
            tech_stack: self.tech_stack,
            project_repo: self.project_repo,
            status: self
                .status
                .unwrap_or_else(|| DEFAULT_TEAM_STATUS.to_string()),
        }
    }
}

/// Request for updating team details
///
/// Leadership and membership cannot be changed through this request.
#[derive(Debug, Default, Deserialize, Validate)]
pub struct UpdateTeamRequest {
    #[validate(length(min = 1, max = 100))]
    pub name: Option<String>,

    #[validate(length(max = 1000))]
    pub description: Option<String>,

    pub looking_for: Option<Vec<String>>,

    pub tech_stack: Option<Vec<String>>,

    #[validate(length(max = 255))]
    pub project_repo: Option<String>,

    #[validate(length(min = 1, max = 50))]
    pub status: Option<String>,

    /// Requesting user, when not given as a query parameter
    pub user_id: Option<String>,
}

impl UpdateTeamRequest {
    fn into_details(self) -> TeamDetails {
        TeamDetails {
            name: self.name,
            description: self.description,
            looking_for: self.looking_for,
            tech_stack: self.tech_stack,
            project_repo: self.project_repo,
            status: self.status,
        }
    }
}

/// Query parameters for listing teams
#[derive(Debug, Deserialize, Default)]
pub struct ListTeamsQuery {
    /// Only return teams this user is a member of
    pub user_id: Option<String>,
}

/// Query parameters identifying the requesting user
#[derive(Debug, Deserialize, Default)]
pub struct RequesterQuery {
    pub user_id: Option<String>,
}

/// List teams
///
/// **GET /api/teams?user_id=**
///
/// Returns every team, or only those containing `user_id`, with member and
/// join request names resolved.
pub async fn list_teams(
    State(state): State<TeamsState>,
    Query(query): Query<ListTeamsQuery>,
) -> Result<ApiResponse<Vec<EnrichedTeam>>> {
    let member = query.user_id.as_deref().filter(|id| !id.is_empty());
    let teams = state.teams.list(member).await?;
    let enriched = enrich_teams(state.directory.as_ref(), teams).await;

    Ok(ApiResponse::counted(enriched))
}

/// Create a new team
///
/// **POST /api/teams**
///
/// **Business Rules:**
/// - The leader is always a member
/// - Initial members are de-duplicated, order preserved
/// - A new team has no join requests
pub async fn create_team(
    State(state): State<TeamsState>,
    ValidatedJson(request): ValidatedJson<CreateTeamRequest>,
) -> Result<(StatusCode, ApiResponse<Team>)> {
    let new_team = request.into_new_team();
    let created = state.teams.create(&new_team).await?;

    tracing::info!(
        team_id = %created.id,
        leader_id = %created.leader_id,
        members = created.members.len(),
        "Team created"
    );

    Ok((StatusCode::CREATED, ApiResponse::success(created)))
}

/// Get team details
///
/// **GET /api/teams/{team_id}**
pub async fn get_team(
    State(state): State<TeamsState>,
    Path(team_id): Path<String>,
) -> Result<ApiResponse<EnrichedTeam>> {
    let team = state.teams.fetch(&team_id).await?;
    let enriched = enrich_team(state.directory.as_ref(), team).await;

    Ok(ApiResponse::success(enriched))
}

/// Update team details
///
/// **PUT /api/teams/{team_id}?user_id=**
///
/// Only the leader may update. Only supplied fields are written; an empty
/// update succeeds without touching the store.
pub async fn update_team(
    State(state): State<TeamsState>,
    Path(team_id): Path<String>,
    Query(query): Query<RequesterQuery>,
    ValidatedJson(mut request): ValidatedJson<UpdateTeamRequest>,
) -> Result<ApiResponse<Team>> {
    let user_id = query
        .user_id
        .or_else(|| request.user_id.take())
        .ok_or_else(|| Error::BadRequest("user_id is required".to_string()))?;

    let _guard = state.locks.acquire(&team_id).await;
    let team = state.teams.fetch(&team_id).await?;

    let Some(details) = TeamWorkflow::update(&team, &user_id, request.into_details())? else {
        return Ok(ApiResponse::success(team).with_message("No changes"));
    };

    let updated = state.teams.save(&team_id, &details).await?;
    tracing::info!(team_id = %team_id, "Team updated");

    Ok(ApiResponse::success(updated).with_message("Team updated"))
}

/// Delete a team
///
/// **DELETE /api/teams**
///
/// Only the leader may delete. The document is removed outright.
pub async fn delete_team(
    State(state): State<TeamsState>,
    ValidatedJson(request): ValidatedJson<TeamActionRequest>,
) -> Result<ApiResponse<()>> {
    let _guard = state.locks.acquire(&request.team_id).await;
    let team = state.teams.fetch(&request.team_id).await?;

    TeamWorkflow::delete(&team, &request.user_id)?;
    state.teams.delete(&request.team_id).await?;

    tracing::info!(team_id = %request.team_id, "Team deleted");
    Ok(ApiResponse::message("Team deleted"))
}
