//! Domain entities for the HackHub hackathons domain
//!
//! Hackathons are immutable once created. Date ordering and team size
//! ordering are not enforced.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_HACKATHON_STATUS: &str = "draft";
pub const DEFAULT_HACKATHON_MODE: &str = "online";
pub const DEFAULT_MIN_TEAM_SIZE: i64 = 1;
pub const DEFAULT_MAX_TEAM_SIZE: i64 = 4;

pub(crate) fn default_status() -> String {
    DEFAULT_HACKATHON_STATUS.to_string()
}

pub(crate) fn default_mode() -> String {
    DEFAULT_HACKATHON_MODE.to_string()
}

pub(crate) fn default_min_team_size() -> i64 {
    DEFAULT_MIN_TEAM_SIZE
}

pub(crate) fn default_max_team_size() -> i64 {
    DEFAULT_MAX_TEAM_SIZE
}

/// Hackathon entity as read from the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hackathon {
    #[serde(rename = "id", alias = "$id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub organizer_id: Option<String>,
    #[serde(default)]
    pub prize_pool: Option<String>,
    #[serde(default)]
    pub registration_link: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(default = "default_min_team_size")]
    pub min_team_size: i64,
    #[serde(default = "default_max_team_size")]
    pub max_team_size: i64,
    #[serde(default = "default_mode")]
    pub mode: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(rename = "created_at", alias = "$createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at", alias = "$updatedAt", default)]
    pub updated_at: Option<String>,
}

impl Hackathon {
    /// True when any of the hackathon's tags is in `wanted`
    pub fn matches_any(&self, wanted: &[String]) -> bool {
        self.tags.iter().any(|tag| wanted.contains(tag))
    }
}

/// Document written when a hackathon is created
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewHackathon {
    pub name: String,
    pub description: String,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    pub location: String,
    pub tags: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organizer_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prize_pool: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub registration_link: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub status: String,
    pub min_team_size: i64,
    pub max_team_size: i64,
    pub mode: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tagline: Option<String>,
}
