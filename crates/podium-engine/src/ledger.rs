//! Vote ledger
//!
//! Authoritative per-room vote state. One `tokio::sync::Mutex` scopes the
//! whole engine: every mutating operation runs its full
//! read-modify-write-then-persist sequence while holding it, which gives a
//! strict total order over all mutations across all rooms and keeps the
//! persisted snapshot (always the entire state) internally consistent.
//!
//! Readers never touch the lock; they are served from a cache of the most
//! recently computed scoreboard per room, which may be one mutation stale.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument};

use podium_core::{
    EventId, ResolvedMessage, RoomId, RoomState, Scoreboard, Snapshot, TrackedMessage, VoteKind,
};
use podium_store::SnapshotStore;

use crate::error::LedgerResult;
use crate::ranking::rank_room;

/// The aggregation engine's authoritative state
pub struct VoteLedger {
    rooms: Mutex<BTreeMap<RoomId, RoomState>>,
    rankings: DashMap<RoomId, Arc<Scoreboard>>,
    store: Arc<SnapshotStore>,
    via_domains: Vec<String>,
}

impl VoteLedger {
    /// Create an empty ledger backed by the given store.
    ///
    /// Call [`VoteLedger::load`] before delivering live events; events
    /// applied before the load completes would be overwritten by it.
    pub fn new(store: Arc<SnapshotStore>, via_domains: Vec<String>) -> Self {
        Self {
            rooms: Mutex::new(BTreeMap::new()),
            rankings: DashMap::new(),
            store,
            via_domains,
        }
    }

    /// Replace in-memory state from the store and recompute every room's
    /// scoreboard. Missing or unusable persisted state starts empty.
    pub async fn load(&self) -> LedgerResult<()> {
        let mut rooms = self.rooms.lock().await;
        if let Some(snapshot) = self.store.load().await? {
            *rooms = snapshot.rooms;
        }
        for (room_id, state) in rooms.iter() {
            self.rankings.insert(
                room_id.clone(),
                Arc::new(rank_room(room_id, state, &self.via_domains)),
            );
        }
        info!(rooms = rooms.len(), "Scoreboard state loaded");
        Ok(())
    }

    /// Current cached scoreboard for a room, if the room is known.
    ///
    /// Never blocks on the mutation lock.
    pub fn scoreboard(&self, room_id: &RoomId) -> Option<Arc<Scoreboard>> {
        self.rankings.get(room_id).map(|entry| Arc::clone(entry.value()))
    }

    /// Replace a room's state with an empty one (clears the countdown and
    /// all tracked messages) and persist.
    #[instrument(skip(self))]
    pub async fn reset_room(&self, room_id: &RoomId) -> LedgerResult<()> {
        let mut rooms = self.rooms.lock().await;
        rooms.insert(room_id.clone(), RoomState::default());
        info!(room = %room_id, "Room scoreboard reset");
        self.commit(room_id, &rooms).await
    }

    /// Set a room's Q&A countdown, creating the room if absent, and persist.
    #[instrument(skip(self))]
    pub async fn set_countdown(
        &self,
        room_id: &RoomId,
        starts_at: DateTime<Utc>,
    ) -> LedgerResult<()> {
        let mut rooms = self.rooms.lock().await;
        let state = rooms.entry(room_id.clone()).or_default();
        state.qa_start_time = Some(starts_at.timestamp_millis());
        info!(room = %room_id, starts_at = %starts_at, "Q&A countdown set");
        self.commit(room_id, &rooms).await
    }

    /// Record a vote on a message.
    ///
    /// If the target is already tracked the reaction id joins the matching
    /// vote set. Otherwise the message is tracked from the caller-resolved
    /// source data; when resolution failed (`resolved` is `None`) the
    /// reaction is silently dropped, which is expected behavior rather than
    /// an error. Idempotent per reaction event id.
    ///
    /// Returns whether state changed (and was persisted).
    #[instrument(skip(self, resolved))]
    pub async fn record_reaction(
        &self,
        room_id: &RoomId,
        target: &EventId,
        reaction_id: EventId,
        vote: VoteKind,
        resolved: Option<ResolvedMessage>,
    ) -> LedgerResult<bool> {
        let mut rooms = self.rooms.lock().await;

        let tracked = rooms
            .get(room_id)
            .is_some_and(|state| state.is_tracked(target));
        if !tracked && resolved.is_none() {
            debug!(
                room = %room_id,
                target = %target,
                "Reaction target could not be resolved, dropping"
            );
            return Ok(false);
        }

        let state = rooms.entry(room_id.clone()).or_default();
        let changed = if let Some(message) = state.message_mut(target) {
            message.add_vote(vote, reaction_id)
        } else if let Some(resolved) = resolved {
            let mut message = TrackedMessage::from_resolved(target.clone(), resolved);
            message.add_vote(vote, reaction_id);
            state.track(message);
            true
        } else {
            false
        };

        if !changed {
            return Ok(false);
        }
        self.commit(room_id, &rooms).await?;
        Ok(true)
    }

    /// Remove a reaction by its event id from whichever vote set contains
    /// it (at most one). No-op if absent.
    #[instrument(skip(self))]
    pub async fn remove_reaction(
        &self,
        room_id: &RoomId,
        reaction_id: &EventId,
    ) -> LedgerResult<bool> {
        let mut rooms = self.rooms.lock().await;
        let changed = rooms
            .get_mut(room_id)
            .is_some_and(|state| state.remove_reaction(reaction_id));
        if !changed {
            return Ok(false);
        }
        debug!(room = %room_id, reaction = %reaction_id, "Reaction removed");
        self.commit(room_id, &rooms).await?;
        Ok(true)
    }

    /// Remove a tracked message entirely. No-op if absent.
    #[instrument(skip(self))]
    pub async fn remove_message(
        &self,
        room_id: &RoomId,
        message_id: &EventId,
    ) -> LedgerResult<bool> {
        let mut rooms = self.rooms.lock().await;
        let changed = rooms
            .get_mut(room_id)
            .is_some_and(|state| state.remove_message(message_id));
        if !changed {
            return Ok(false);
        }
        debug!(room = %room_id, message = %message_id, "Tracked message removed");
        self.commit(room_id, &rooms).await?;
        Ok(true)
    }

    /// Recompute the mutated room's scoreboard, then persist the entire
    /// snapshot. Runs while the caller still holds the room-table lock.
    async fn commit(
        &self,
        room_id: &RoomId,
        rooms: &BTreeMap<RoomId, RoomState>,
    ) -> LedgerResult<()> {
        if let Some(state) = rooms.get(room_id) {
            self.rankings.insert(
                room_id.clone(),
                Arc::new(rank_room(room_id, state, &self.via_domains)),
            );
        }
        self.store.save(&Snapshot::new(rooms.clone())).await?;
        Ok(())
    }
}
