//! Account provisioning
//!
//! Registration creates an identity and then its profile. The two writes go
//! to different services and are not atomic: when the profile write fails
//! the identity stays behind and is logged so it can be cleaned up.

use std::sync::Arc;

use hackhub_common::{Error, Result, StoreError};
use hackhub_docstore::IdentityService;

use crate::domain::entities::{NewProfile, SyncOutcome};
use crate::repository::ProfileRepository;

#[derive(Clone)]
pub struct AuthSync {
    identities: Arc<dyn IdentityService>,
    profiles: ProfileRepository,
}

impl AuthSync {
    pub fn new(identities: Arc<dyn IdentityService>, profiles: ProfileRepository) -> Self {
        Self {
            identities,
            profiles,
        }
    }

    /// Register a new account and return its identity ID
    pub async fn register(
        &self,
        name: &str,
        email: &str,
        password: &str,
        username: &str,
    ) -> Result<String> {
        let user_id = self
            .identities
            .create_account(name, email, password)
            .await
            .map_err(|e| match e {
                StoreError::Conflict => Error::BadRequest("Email already registered".to_string()),
                other => other.into(),
            })?;

        let profile = NewProfile::fresh(&user_id, username);
        if let Err(e) = self.profiles.create(&user_id, &profile).await {
            tracing::warn!(
                user_id = %user_id,
                error = %e,
                "Profile creation failed after identity creation; identity is orphaned"
            );
            return Err(Error::Upstream(format!(
                "Account created but profile setup failed: {e}"
            )));
        }

        tracing::info!(user_id = %user_id, "User registered");
        Ok(user_id)
    }

    /// Create the profile on first login; later logins are a no-op
    pub async fn sync_on_login(&self, user_id: &str, profile: NewProfile) -> Result<SyncOutcome> {
        match self.profiles.create(user_id, &profile).await {
            Ok(created) => {
                tracing::info!(user_id, "User profile created on login");
                Ok(SyncOutcome::Created(created))
            }
            Err(Error::Conflict(_)) => {
                tracing::debug!(user_id, "User already synced");
                Ok(SyncOutcome::AlreadySynced)
            }
            Err(e) => Err(e),
        }
    }
}
