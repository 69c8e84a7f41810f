//! Repository implementations for the Teams domain

pub mod locks;
pub mod teams;

pub use locks::{TeamLockGuard, TeamLocks};
pub use teams::TeamRepository;
