//! Configuration management following 12-factor app principles
//!
//! All configuration is loaded from environment variables to ensure
//! clean separation between code and config.

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::env;

#[derive(Clone, Serialize, Deserialize)]
pub struct Config {
    /// Document store provider (appwrite, mock)
    pub docstore_provider: String,

    /// Appwrite configuration
    pub appwrite_endpoint: String,
    pub appwrite_project_id: String,
    pub appwrite_api_key: String,
    pub appwrite_database_id: String,

    /// Collection names
    pub collection_users: String,
    pub collection_hackathons: String,
    pub collection_teams: String,

    /// Outbound HTTP timeout for document store calls
    pub http_timeout_secs: u64,

    /// Runtime configuration
    pub port: u16,
    pub cors_allowed_origins: String,
}

impl std::fmt::Debug for Config {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Config")
            .field("docstore_provider", &self.docstore_provider)
            .field("appwrite_endpoint", &self.appwrite_endpoint)
            .field("appwrite_project_id", &self.appwrite_project_id)
            .field("appwrite_api_key", &"[REDACTED]")
            .field("appwrite_database_id", &self.appwrite_database_id)
            .field("collection_users", &self.collection_users)
            .field("collection_hackathons", &self.collection_hackathons)
            .field("collection_teams", &self.collection_teams)
            .field("http_timeout_secs", &self.http_timeout_secs)
            .field("port", &self.port)
            .field("cors_allowed_origins", &self.cors_allowed_origins)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // Load .env file if it exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let docstore_provider =
            lookup("DOCSTORE_PROVIDER").unwrap_or_else(|| "appwrite".to_string());
        let is_mock = docstore_provider == "mock";

        let required = |key: &str| -> Result<String> {
            match lookup(key) {
                Some(value) if !value.is_empty() => Ok(value),
                _ if is_mock => Ok(String::new()),
                _ => Err(anyhow::anyhow!("{} is required", key)),
            }
        };

        let config = Self {
            appwrite_endpoint: required("APPWRITE_ENDPOINT")?,
            appwrite_project_id: required("APPWRITE_PROJECT_ID")?,
            appwrite_api_key: required("APPWRITE_API_KEY")?,
            appwrite_database_id: required("APPWRITE_DATABASE_ID")?,

            collection_users: lookup("COLLECTION_USERS").unwrap_or_else(|| "users".to_string()),
            collection_hackathons: lookup("COLLECTION_HACKATHONS")
                .unwrap_or_else(|| "hackathons".to_string()),
            collection_teams: lookup("COLLECTION_TEAMS").unwrap_or_else(|| "teams".to_string()),

            http_timeout_secs: lookup("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(10),

            port: lookup("PORT").and_then(|v| v.parse().ok()).unwrap_or(8000),
            cors_allowed_origins: lookup("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "*".to_string()),

            docstore_provider,
        };

        Ok(config)
    }
}
