//! Domain entities for the HackHub accounts domain

use serde::{Deserialize, Serialize};

/// User profile as read from the document store.
///
/// The document ID is the identity ID, so a user has at most one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(rename = "id", alias = "$id")]
    pub id: String,
    pub username: String,
    #[serde(default)]
    pub account_id: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub github_url: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub xp: i64,
    #[serde(default)]
    pub reputation_score: f64,
    #[serde(rename = "created_at", alias = "$createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at", alias = "$updatedAt", default)]
    pub updated_at: Option<String>,
}

/// Profile document written on registration or first login
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProfile {
    pub username: String,
    pub account_id: String,
    pub bio: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub github_url: Option<String>,
    pub skills: Vec<String>,
    pub xp: i64,
    pub reputation_score: f64,
}

impl NewProfile {
    /// Fresh profile with zeroed progress
    pub fn fresh(account_id: impl Into<String>, username: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            account_id: account_id.into(),
            bio: String::new(),
            avatar_url: None,
            github_url: None,
            skills: Vec::new(),
            xp: 0,
            reputation_score: 0.0,
        }
    }
}

/// Result of a login sync
#[derive(Debug, Clone, PartialEq)]
pub enum SyncOutcome {
    /// First login, profile written
    Created(UserProfile),
    /// A profile already existed and was left as is
    AlreadySynced,
}
