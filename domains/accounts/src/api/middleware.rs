//! Accounts domain state

use hackhub_docstore::Backends;

use crate::domain::sync::AuthSync;
use crate::repository::ProfileRepository;

/// Application state for the Accounts domain
#[derive(Clone)]
pub struct AccountsState {
    pub auth: AuthSync,
}

impl AccountsState {
    pub fn new(backends: &Backends, users_collection: impl Into<String>) -> Self {
        let profiles = ProfileRepository::new(backends.store.clone(), users_collection);
        Self {
            auth: AuthSync::new(backends.identities.clone(), profiles),
        }
    }
}
