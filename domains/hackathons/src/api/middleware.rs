//! Hackathons domain state

use hackhub_docstore::Backends;

use crate::repository::HackathonRepository;

/// Application state for the Hackathons domain
#[derive(Clone)]
pub struct HackathonsState {
    pub hackathons: HackathonRepository,
}

impl HackathonsState {
    pub fn new(backends: &Backends, collection: impl Into<String>) -> Self {
        Self {
            hackathons: HackathonRepository::new(backends.store.clone(), collection),
        }
    }
}
