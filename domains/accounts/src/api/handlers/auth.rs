//! Registration and login sync handlers

use axum::{
    extract::State,
    response::{IntoResponse, Response},
};
use hackhub_common::{validate_document_id, ApiResponse, Result, ValidatedJson};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::api::middleware::AccountsState;
use crate::{NewProfile, SyncOutcome};

/// Request for registering a new account
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, max = 128))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 256))]
    pub password: String,

    #[validate(length(min = 1, max = 50))]
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    #[serde(rename = "userId")]
    pub user_id: String,
}

/// Payload sent by the frontend after a successful login
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    /// Identity ID, used as the profile document ID
    #[validate(custom(function = "validate_document_id"))]
    pub id: String,

    #[validate(length(min = 1, max = 128))]
    pub name: String,

    /// Defaults to `name`
    #[validate(length(min = 1, max = 50))]
    pub username: Option<String>,

    /// Accepted but not stored
    #[validate(email)]
    pub email: Option<String>,

    #[validate(length(max = 1000))]
    pub bio: Option<String>,

    #[validate(length(max = 2048))]
    pub avatar_url: Option<String>,

    #[validate(length(max = 2048))]
    pub github_url: Option<String>,

    pub skills: Option<Vec<String>>,

    #[validate(range(min = 0))]
    pub xp: Option<i64>,

    #[validate(range(min = 0.0))]
    pub reputation_score: Option<f64>,
}

impl LoginRequest {
    fn into_profile(self) -> NewProfile {
        let username = self.username.unwrap_or_else(|| self.name.clone());
        let mut profile = NewProfile::fresh(self.id, username);
        profile.bio = self.bio.unwrap_or_default();
        profile.avatar_url = self.avatar_url;
        profile.github_url = self.github_url;
        profile.skills = self.skills.unwrap_or_default();
        profile.xp = self.xp.unwrap_or(0);
        profile.reputation_score = self.reputation_score.unwrap_or(0.0);
        profile
    }
}

/// Register a new account
///
/// **POST /api/auth/register**
///
/// Creates the identity, then a profile keyed by the identity ID. A duplicate
/// email is a client error.
pub async fn register(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<RegisterRequest>,
) -> Result<ApiResponse<RegisterResponse>> {
    let user_id = state
        .auth
        .register(
            &request.name,
            &request.email,
            &request.password,
            &request.username,
        )
        .await?;

    Ok(ApiResponse::success(RegisterResponse { user_id }).with_message("User registered"))
}

/// Sync the user profile after login
///
/// **POST /api/auth/login**
///
/// Idempotent: the first call creates the profile, later calls succeed
/// without writing.
pub async fn login(
    State(state): State<AccountsState>,
    ValidatedJson(request): ValidatedJson<LoginRequest>,
) -> Result<Response> {
    let user_id = request.id.clone();
    let outcome = state
        .auth
        .sync_on_login(&user_id, request.into_profile())
        .await?;

    Ok(match outcome {
        SyncOutcome::Created(profile) => ApiResponse::success(profile)
            .with_message("User profile created")
            .into_response(),
        SyncOutcome::AlreadySynced => ApiResponse::message("User already synced").into_response(),
    })
}
