//! Tracked message entity - a question under vote
//!
//! A message is only tracked once the first valid reaction names it; plain
//! chat traffic never enters the ledger. Vote sets hold reaction event ids
//! in insertion order, and an id lives in at most one of the two sets.

use serde::{Deserialize, Serialize};

use crate::value_objects::{EventId, UserId, VoteKind};

/// A message tracked on the scoreboard, with its active votes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedMessage {
    pub event_id: EventId,
    pub text: String,
    pub sender_id: UserId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_http_url: Option<String>,
    #[serde(default)]
    pub active_upvote_ids: Vec<EventId>,
    #[serde(default)]
    pub active_downvote_ids: Vec<EventId>,
}

/// Resolved source data for a message about to be tracked.
///
/// Produced by the caller (event ingest) from the transport collaborator
/// before the ledger lock is taken.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedMessage {
    pub text: String,
    pub sender_id: UserId,
    pub sender_name: Option<String>,
    pub sender_http_url: Option<String>,
}

impl TrackedMessage {
    /// Create a tracked message from resolved source data
    pub fn from_resolved(event_id: EventId, resolved: ResolvedMessage) -> Self {
        Self {
            event_id,
            text: resolved.text,
            sender_id: resolved.sender_id,
            sender_name: resolved.sender_name,
            sender_http_url: resolved.sender_http_url,
            active_upvote_ids: Vec::new(),
            active_downvote_ids: Vec::new(),
        }
    }

    /// Signed score: upvotes minus downvotes
    #[inline]
    pub fn score(&self) -> i64 {
        self.active_upvote_ids.len() as i64 - self.active_downvote_ids.len() as i64
    }

    /// Check whether a reaction id is active on this message, in either set
    pub fn has_vote(&self, reaction_id: &EventId) -> bool {
        self.active_upvote_ids.contains(reaction_id)
            || self.active_downvote_ids.contains(reaction_id)
    }

    /// Record a vote. Returns `false` if the reaction id is already active
    /// (in either set), keeping the call idempotent per reaction event id.
    pub fn add_vote(&mut self, kind: VoteKind, reaction_id: EventId) -> bool {
        if self.has_vote(&reaction_id) {
            return false;
        }
        match kind {
            VoteKind::Up => self.active_upvote_ids.push(reaction_id),
            VoteKind::Down => self.active_downvote_ids.push(reaction_id),
        }
        true
    }

    /// Remove a vote by reaction id from whichever set contains it,
    /// irrespective of vote kind. Returns `false` if the id was absent.
    pub fn remove_vote(&mut self, reaction_id: &EventId) -> bool {
        if let Some(pos) = self.active_upvote_ids.iter().position(|id| id == reaction_id) {
            self.active_upvote_ids.remove(pos);
            return true;
        }
        if let Some(pos) = self
            .active_downvote_ids
            .iter()
            .position(|id| id == reaction_id)
        {
            self.active_downvote_ids.remove(pos);
            return true;
        }
        false
    }
}
