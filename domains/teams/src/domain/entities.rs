//! Domain entities for the HackHub teams domain
//!
//! A team is stored as a single document. Membership is two ordered ID lists
//! on that document: `members` (always holding the leader) and
//! `join_requests` (pending applications, disjoint from `members`).

use serde::{Deserialize, Deserializer, Serialize};

/// Default status assigned to newly created teams
pub const DEFAULT_TEAM_STATUS: &str = "open";

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<String>>::deserialize(deserializer)?.unwrap_or_default())
}

fn default_status() -> String {
    DEFAULT_TEAM_STATUS.to_string()
}

/// Team entity as read from the document store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "id", alias = "$id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub hackathon_id: String,
    #[serde(default)]
    pub leader_id: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub members: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub join_requests: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub looking_for: Vec<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub tech_stack: Vec<String>,
    #[serde(default)]
    pub project_repo: Option<String>,
    #[serde(default = "default_status")]
    pub status: String,
    #[serde(rename = "created_at", alias = "$createdAt", default)]
    pub created_at: Option<String>,
    #[serde(rename = "updated_at", alias = "$updatedAt", default)]
    pub updated_at: Option<String>,
}

impl Team {
    pub fn is_leader(&self, user_id: &str) -> bool {
        self.leader_id == user_id
    }

    pub fn is_member(&self, user_id: &str) -> bool {
        self.members.iter().any(|m| m == user_id)
    }

    pub fn has_pending_request(&self, user_id: &str) -> bool {
        self.join_requests.iter().any(|r| r == user_id)
    }

    /// Check the membership invariants, returning the first violation found
    pub fn check_invariants(&self) -> Result<(), String> {
        if !self.is_member(&self.leader_id) {
            return Err(format!("leader {} is not a member", self.leader_id));
        }
        if let Some(dup) = first_duplicate(&self.members) {
            return Err(format!("{dup} appears more than once in members"));
        }
        if let Some(dup) = first_duplicate(&self.join_requests) {
            return Err(format!("{dup} appears more than once in join_requests"));
        }
        if let Some(both) = self.join_requests.iter().find(|r| self.is_member(r)) {
            return Err(format!("{both} is both a member and pending"));
        }
        Ok(())
    }
}

fn first_duplicate(ids: &[String]) -> Option<&str> {
    ids.iter()
        .enumerate()
        .find(|(i, id)| ids[..*i].contains(id))
        .map(|(_, id)| id.as_str())
}

/// Document written when a team is created
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTeam {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub hackathon_id: String,
    pub leader_id: String,
    pub members: Vec<String>,
    pub join_requests: Vec<String>,
    pub looking_for: Vec<String>,
    pub tech_stack: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_repo: Option<String>,
    pub status: String,
}

/// Leader editable team details. Only supplied fields are persisted.
///
/// Leadership and membership fields are not part of this type, so the
/// update path cannot touch them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TeamDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub looking_for: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_repo: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
}

impl TeamDetails {
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the supplied fields to a team in place
    pub fn apply_to(&self, team: &mut Team) {
        if let Some(name) = &self.name {
            team.name = name.clone();
        }
        if let Some(description) = &self.description {
            team.description = Some(description.clone());
        }
        if let Some(looking_for) = &self.looking_for {
            team.looking_for = looking_for.clone();
        }
        if let Some(tech_stack) = &self.tech_stack {
            team.tech_stack = tech_stack.clone();
        }
        if let Some(project_repo) = &self.project_repo {
            team.project_repo = Some(project_repo.clone());
        }
        if let Some(status) = &self.status {
            team.status = status.clone();
        }
    }
}

/// Changed membership lists. `None` means the list is untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MembershipChange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub members: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub join_requests: Option<Vec<String>>,
}

impl MembershipChange {
    pub fn apply_to(&self, team: &mut Team) {
        if let Some(members) = &self.members {
            team.members = members.clone();
        }
        if let Some(join_requests) = &self.join_requests {
            team.join_requests = join_requests.clone();
        }
    }
}
