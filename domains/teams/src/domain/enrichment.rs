//! Display name enrichment for team responses
//!
//! All member and request IDs across the input teams are collected into one
//! set, each ID is resolved exactly once through the [`UserDirectory`]
//! concurrently, and the resulting names are broadcast back onto every team.
//! A lookup failure only affects its own ID, which renders as
//! [`UNKNOWN_USER`].

use std::collections::{HashMap, HashSet};

use futures::future::join_all;
use hackhub_docstore::UserDirectory;
use serde::Serialize;

use crate::domain::entities::Team;

/// Name shown for IDs the directory could not resolve
pub const UNKNOWN_USER: &str = "Unknown User";

/// A member with a resolved display name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MemberView {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
    pub avatar: String,
}

/// A pending requester with a resolved display name
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RequestView {
    #[serde(rename = "userId")]
    pub user_id: String,
    pub name: String,
}

/// Team plus display friendly membership projections
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnrichedTeam {
    #[serde(flatten)]
    pub team: Team,
    pub members_enriched: Vec<MemberView>,
    pub join_requests_enriched: Vec<RequestView>,
}

/// Resolve every distinct ID once; unresolvable IDs are left out of the map
pub async fn resolve_names(directory: &dyn UserDirectory, ids: &[&str]) -> HashMap<String, String> {
    let unique: HashSet<&str> = ids.iter().copied().collect();
    if unique.is_empty() {
        return HashMap::new();
    }

    let lookups = unique.into_iter().map(|id| async move {
        match directory.display_name(id).await {
            Ok(name) => Some((id.to_string(), name)),
            Err(e) => {
                tracing::warn!(user_id = id, error = %e, "Could not resolve user name");
                None
            }
        }
    });

    join_all(lookups).await.into_iter().flatten().collect()
}

fn project(team: Team, names: &HashMap<String, String>) -> EnrichedTeam {
    let name_of = |id: &String| {
        names
            .get(id)
            .cloned()
            .unwrap_or_else(|| UNKNOWN_USER.to_string())
    };

    let members_enriched = team
        .members
        .iter()
        .map(|id| MemberView {
            user_id: id.clone(),
            name: name_of(id),
            avatar: String::new(),
        })
        .collect();
    let join_requests_enriched = team
        .join_requests
        .iter()
        .map(|id| RequestView {
            user_id: id.clone(),
            name: name_of(id),
        })
        .collect();

    EnrichedTeam {
        team,
        members_enriched,
        join_requests_enriched,
    }
}

/// Enrich a batch of teams with a single round of lookups
pub async fn enrich_teams(directory: &dyn UserDirectory, teams: Vec<Team>) -> Vec<EnrichedTeam> {
    let ids: Vec<&str> = teams
        .iter()
        .flat_map(|t| t.members.iter().chain(t.join_requests.iter()))
        .map(String::as_str)
        .collect();
    let names = resolve_names(directory, &ids).await;

    tracing::debug!(
        teams = teams.len(),
        resolved = names.len(),
        "Enriched team membership"
    );

    teams.into_iter().map(|t| project(t, &names)).collect()
}

/// Enrich a single team
pub async fn enrich_team(directory: &dyn UserDirectory, team: Team) -> EnrichedTeam {
    let ids: Vec<&str> = team
        .members
        .iter()
        .chain(team.join_requests.iter())
        .map(String::as_str)
        .collect();
    let names = resolve_names(directory, &ids).await;
    project(team, &names)
}
