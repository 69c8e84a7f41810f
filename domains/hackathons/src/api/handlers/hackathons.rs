//! Hackathon catalog API handlers

use axum::{extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use hackhub_common::{validate_document_id, ApiResponse, Result, ValidatedJson};
use serde::Deserialize;
use validator::{Validate, ValidationError, ValidationErrors};

use crate::api::middleware::HackathonsState;
use crate::domain::entities::{
    default_max_team_size, default_min_team_size, default_mode, default_status,
};
use crate::{recommend, Hackathon, NewHackathon};

const MAX_TAGS: usize = 50;
const MAX_TAG_LEN: usize = 64;

/// Request for creating a hackathon
#[derive(Debug, Deserialize, Validate)]
pub struct CreateHackathonRequest {
    #[validate(length(min = 1, max = 200))]
    pub name: String,

    #[validate(length(max = 5000))]
    pub description: String,

    pub start_date: DateTime<Utc>,

    pub end_date: DateTime<Utc>,

    #[validate(length(max = 200))]
    pub location: String,

    #[validate(length(max = 50))]
    pub tags: Vec<String>,

    #[validate(custom(function = "validate_document_id"))]
    pub organizer_id: Option<String>,

    #[validate(length(max = 100))]
    pub prize_pool: Option<String>,

    #[validate(length(max = 2048))]
    pub registration_link: Option<String>,

    #[validate(length(max = 2048))]
    pub image_url: Option<String>,

    #[serde(default = "default_status")]
    #[validate(length(min = 1, max = 50))]
    pub status: String,

    #[serde(default = "default_min_team_size")]
    #[validate(range(min = 1))]
    pub min_team_size: i64,

    #[serde(default = "default_max_team_size")]
    #[validate(range(min = 1))]
    pub max_team_size: i64,

    #[serde(default = "default_mode")]
    #[validate(length(min = 1, max = 50))]
    pub mode: String,

    #[validate(length(max = 200))]
    pub tagline: Option<String>,
}

impl From<CreateHackathonRequest> for NewHackathon {
    fn from(request: CreateHackathonRequest) -> Self {
        Self {
            name: request.name,
            description: request.description,
            start_date: request.start_date,
            end_date: request.end_date,
            location: request.location,
            tags: request.tags,
            organizer_id: request.organizer_id,
            prize_pool: request.prize_pool,
            registration_link: request.registration_link,
            image_url: request.image_url,
            status: request.status,
            min_team_size: request.min_team_size,
            max_team_size: request.max_team_size,
            mode: request.mode,
            tagline: request.tagline,
        }
    }
}

/// Tags a user is interested in, sent as a bare JSON array
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct TagQuery(pub Vec<String>);

impl Validate for TagQuery {
    fn validate(&self) -> std::result::Result<(), ValidationErrors> {
        let too_many = self.0.len() > MAX_TAGS;
        let too_long = self.0.iter().any(|tag| tag.len() > MAX_TAG_LEN);
        if !too_many && !too_long {
            return Ok(());
        }

        let mut errors = ValidationErrors::new();
        if too_many {
            errors.add("tags", ValidationError::new("too_many_tags"));
        }
        if too_long {
            errors.add("tags", ValidationError::new("tag_too_long"));
        }
        Err(errors)
    }
}

/// Create a hackathon
///
/// **POST /api/hackathons**
pub async fn create_hackathon(
    State(state): State<HackathonsState>,
    ValidatedJson(request): ValidatedJson<CreateHackathonRequest>,
) -> Result<(StatusCode, ApiResponse<Hackathon>)> {
    let created = state.hackathons.create(&request.into()).await?;

    tracing::info!(hackathon_id = %created.id, name = %created.name, "Hackathon created");
    Ok((StatusCode::CREATED, ApiResponse::success(created)))
}

/// List all hackathons
///
/// **GET /api/hackathons**
pub async fn list_hackathons(
    State(state): State<HackathonsState>,
) -> Result<ApiResponse<Vec<Hackathon>>> {
    let hackathons = state.hackathons.list().await?;
    Ok(ApiResponse::counted(hackathons))
}

/// Recommend hackathons by tag
///
/// **POST /api/hackathons/recommendations**
///
/// Body is a JSON array of tags. A hackathon matches when it shares at least
/// one tag; an empty array returns the whole catalog.
pub async fn recommend_hackathons(
    State(state): State<HackathonsState>,
    ValidatedJson(TagQuery(tags)): ValidatedJson<TagQuery>,
) -> Result<ApiResponse<Vec<Hackathon>>> {
    let catalog = state.hackathons.list().await?;
    let total = catalog.len();
    let picked = recommend(catalog, &tags);

    tracing::debug!(tags = tags.len(), total, matched = picked.len(), "Recommended hackathons");
    Ok(ApiResponse::counted(picked))
}
