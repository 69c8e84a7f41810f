//! Team membership workflow
//!
//! Pure transition rules over a loaded [`Team`]. Every function validates its
//! preconditions first and only then computes the changed lists, so a
//! rejected request never yields a partial change. Persisting the result is
//! the caller's job.
//!
//! Authorization is checked before request lookup: a non-leader calling
//! approve/reject is `Forbidden` even when the target is not pending.

use hackhub_common::{Error, Result};

use crate::domain::entities::{MembershipChange, Team, TeamDetails};

/// Result of a member leaving a team
#[derive(Debug, Clone, PartialEq)]
pub enum LeaveOutcome {
    /// The leader left; the team must be deleted
    Disband,
    /// A regular member left; persist the shortened member list
    Departed(MembershipChange),
}

/// Team membership state transitions
pub struct TeamWorkflow;

impl TeamWorkflow {
    /// Initial member list: requested members in order, duplicates dropped,
    /// leader appended when absent.
    pub fn initial_members(leader_id: &str, requested: &[String]) -> Vec<String> {
        let mut members: Vec<String> = Vec::with_capacity(requested.len() + 1);
        for id in requested {
            if !members.contains(id) {
                members.push(id.clone());
            }
        }
        if !members.iter().any(|m| m == leader_id) {
            members.push(leader_id.to_string());
        }
        members
    }

    /// Only the leader may delete a team
    pub fn delete(team: &Team, requester_id: &str) -> Result<()> {
        if !team.is_leader(requester_id) {
            return Err(Error::Forbidden("Only leader can delete.".to_string()));
        }
        Ok(())
    }

    /// A member leaves. The leader leaving disbands the team.
    pub fn leave(team: &Team, user_id: &str) -> Result<LeaveOutcome> {
        if !team.is_member(user_id) {
            return Err(Error::BadRequest("Not in team".to_string()));
        }
        if team.is_leader(user_id) {
            return Ok(LeaveOutcome::Disband);
        }

        let members = team
            .members
            .iter()
            .filter(|m| *m != user_id)
            .cloned()
            .collect();
        Ok(LeaveOutcome::Departed(MembershipChange {
            members: Some(members),
            join_requests: None,
        }))
    }

    /// A non-member asks to join
    pub fn join(team: &Team, user_id: &str) -> Result<MembershipChange> {
        if team.is_member(user_id) {
            return Err(Error::BadRequest("Already in team".to_string()));
        }
        if team.has_pending_request(user_id) {
            return Err(Error::BadRequest("Request already pending".to_string()));
        }

        let mut join_requests = team.join_requests.clone();
        join_requests.push(user_id.to_string());
        Ok(MembershipChange {
            members: None,
            join_requests: Some(join_requests),
        })
    }

    /// The leader accepts a pending request; the target moves to the end of `members`
    pub fn approve(team: &Team, leader_id: &str, target_id: &str) -> Result<MembershipChange> {
        if !team.is_leader(leader_id) {
            return Err(Error::Forbidden(
                "Only leader can approve requests".to_string(),
            ));
        }
        let join_requests = Self::without_request(team, target_id)?;

        let mut members = team.members.clone();
        if !members.iter().any(|m| m == target_id) {
            members.push(target_id.to_string());
        }
        Ok(MembershipChange {
            members: Some(members),
            join_requests: Some(join_requests),
        })
    }

    /// The leader drops a pending request
    pub fn reject(team: &Team, leader_id: &str, target_id: &str) -> Result<MembershipChange> {
        if !team.is_leader(leader_id) {
            return Err(Error::Forbidden(
                "Only leader can reject requests".to_string(),
            ));
        }
        let join_requests = Self::without_request(team, target_id)?;
        Ok(MembershipChange {
            members: None,
            join_requests: Some(join_requests),
        })
    }

    /// The leader edits team details. Returns `None` when nothing was supplied.
    pub fn update(team: &Team, user_id: &str, details: TeamDetails) -> Result<Option<TeamDetails>> {
        if !team.is_leader(user_id) {
            return Err(Error::Forbidden("Only leader can update team".to_string()));
        }
        if details.is_empty() {
            return Ok(None);
        }
        Ok(Some(details))
    }

    fn without_request(team: &Team, target_id: &str) -> Result<Vec<String>> {
        if !team.has_pending_request(target_id) {
            return Err(Error::NotFound("Request not found".to_string()));
        }
        Ok(team
            .join_requests
            .iter()
            .filter(|r| *r != target_id)
            .cloned()
            .collect())
    }
}
