//! Per-team mutation locks
//!
//! Workflow operations are load-validate-save sequences against a store with
//! no compare-and-swap. Holding the team's lock for the whole sequence
//! serializes mutations of one team within this process; different teams
//! proceed in parallel.
//!
//! An entry lives only while some request holds or waits for it, so IDs of
//! missing or deleted teams never accumulate.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockMap = Arc<Mutex<HashMap<String, Arc<AsyncMutex<()>>>>>;

#[derive(Clone, Default)]
pub struct TeamLocks {
    locks: LockMap,
}

/// Exclusive access to one team, released on drop
pub struct TeamLockGuard {
    guard: Option<OwnedMutexGuard<()>>,
    team_id: String,
    locks: LockMap,
}

impl TeamLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait for exclusive access to `team_id`
    pub async fn acquire(&self, team_id: &str) -> TeamLockGuard {
        let lock = {
            let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
            locks.entry(team_id.to_string()).or_default().clone()
        };
        TeamLockGuard {
            guard: Some(lock.lock_owned().await),
            team_id: team_id.to_string(),
            locks: self.locks.clone(),
        }
    }

    /// Number of teams with a lock entry
    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.locks
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    #[cfg(test)]
    pub(crate) fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Drop for TeamLockGuard {
    fn drop(&mut self) {
        drop(self.guard.take());

        // Waiters hold a clone of the entry, so a count of one means the map is the last owner
        let mut locks = self.locks.lock().unwrap_or_else(PoisonError::into_inner);
        if locks
            .get(&self.team_id)
            .is_some_and(|lock| Arc::strong_count(lock) == 1)
        {
            locks.remove(&self.team_id);
        }
    }
}
