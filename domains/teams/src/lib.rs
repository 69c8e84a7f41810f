//! Teams domain: team creation, membership workflow and enrichment

pub mod api;
pub mod domain;
pub mod repository;

// Re-export domain types at the crate root for convenience
pub use domain::enrichment::{enrich_team, enrich_teams, EnrichedTeam, UNKNOWN_USER};
pub use domain::entities::*;
pub use domain::workflow::{LeaveOutcome, TeamWorkflow};
// Re-export repository types
pub use repository::{TeamLocks, TeamRepository};

// Re-export API types
pub use api::routes;
pub use api::TeamsState;
