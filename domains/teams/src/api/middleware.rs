//! Teams domain state

use std::sync::Arc;

use hackhub_docstore::{Backends, UserDirectory};

use crate::repository::{TeamLocks, TeamRepository};

/// Application state for the Teams domain
#[derive(Clone)]
pub struct TeamsState {
    pub teams: TeamRepository,
    pub directory: Arc<dyn UserDirectory>,
    pub locks: TeamLocks,
}

impl TeamsState {
    pub fn new(backends: &Backends, collection: impl Into<String>) -> Self {
        Self {
            teams: TeamRepository::new(backends.store.clone(), collection),
            directory: backends.users.clone(),
            locks: TeamLocks::new(),
        }
    }
}
