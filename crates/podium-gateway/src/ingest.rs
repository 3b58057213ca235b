//! Event ingest
//!
//! The single observer entry point the transport collaborator invokes per
//! room event. All auxiliary fetching (original message, sender profile)
//! happens here, before the ledger lock; failures degrade rather than
//! abort. Persistence failures are logged and swallowed so one bad disk
//! write never tears down the event subscription.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::{debug, error, info};

use podium_core::{
    ChatTransport, EventId, ResolvedMessage, RoomDirectory, RoomEvent, RoomId, UserProfile,
};
use podium_engine::VoteLedger;

use crate::classify::{classify, InboundEvent};
use crate::commands::{Command, CommandPolicy};

/// Inbound edge of the engine: classification, resolution, and dispatch
pub struct EventIngest {
    ledger: Arc<VoteLedger>,
    transport: Arc<dyn ChatTransport>,
    directory: Arc<dyn RoomDirectory>,
    commands: CommandPolicy,
}

impl EventIngest {
    /// Create a new ingest over the given collaborators.
    ///
    /// The ledger must have completed [`VoteLedger::load`] before the first
    /// call to [`EventIngest::handle_event`].
    pub fn new(
        ledger: Arc<VoteLedger>,
        transport: Arc<dyn ChatTransport>,
        directory: Arc<dyn RoomDirectory>,
        commands: CommandPolicy,
    ) -> Self {
        Self {
            ledger,
            transport,
            directory,
            commands,
        }
    }

    /// Handle one inbound room event.
    ///
    /// Events for rooms that are not tracked auditoriums are dropped before
    /// any lock is taken or any collaborator fetch is made.
    pub async fn handle_event(&self, room_id: &RoomId, event: RoomEvent) {
        if !self.directory.is_auditorium(room_id).await {
            return;
        }

        match classify(&event) {
            InboundEvent::Vote { target, vote } => {
                let resolved = self.resolve_target(room_id, &target).await;
                match self
                    .ledger
                    .record_reaction(room_id, &target, event.event_id, vote, resolved)
                    .await
                {
                    Ok(changed) => {
                        debug!(room = %room_id, target = %target, changed, "Vote processed");
                    }
                    Err(e) => {
                        error!(room = %room_id, error = %e, "Failed to persist vote");
                    }
                }
            }
            InboundEvent::Redaction { redacted } => {
                // The redacted id may have been a reaction or a tracked
                // message; its original role is unknown, so try both.
                if let Err(e) = self.ledger.remove_reaction(room_id, &redacted).await {
                    error!(room = %room_id, error = %e, "Failed to persist reaction removal");
                }
                if let Err(e) = self.ledger.remove_message(room_id, &redacted).await {
                    error!(room = %room_id, error = %e, "Failed to persist message removal");
                }
            }
            InboundEvent::Text { body } => {
                self.handle_text(room_id, &event, &body).await;
            }
            InboundEvent::Ignored => {}
        }
    }

    /// Resolve the original message behind a reaction target.
    ///
    /// Returns `None` when the event cannot be fetched or is not a plain
    /// text message; the ledger then drops the reaction unless the target
    /// is already tracked.
    async fn resolve_target(
        &self,
        room_id: &RoomId,
        target: &EventId,
    ) -> Option<ResolvedMessage> {
        let fetched = match self.transport.fetch_event(room_id, target).await {
            Ok(Some(event)) => event,
            Ok(None) => {
                debug!(room = %room_id, target = %target, "Reaction target does not exist");
                return None;
            }
            Err(e) => {
                debug!(room = %room_id, target = %target, error = %e, "Reaction target fetch failed");
                return None;
            }
        };

        let text = fetched.text_body()?.to_string();

        // Profile lookup is best-effort; a failure just means no display
        // name or avatar on the scoreboard.
        let profile = match self.transport.resolve_profile(&fetched.sender).await {
            Ok(profile) => profile,
            Err(e) => {
                debug!(user = %fetched.sender, error = %e, "Profile lookup failed");
                UserProfile::default()
            }
        };

        Some(ResolvedMessage {
            text,
            sender_id: fetched.sender,
            sender_name: profile.display_name,
            sender_http_url: profile.avatar_http_url,
        })
    }

    async fn handle_text(&self, room_id: &RoomId, event: &RoomEvent, body: &str) {
        let Some(command) = self.commands.parse(body) else {
            return;
        };
        if !self.commands.allows(&event.sender) {
            debug!(room = %room_id, sender = %event.sender, "Command from non-admin ignored");
            return;
        }

        let outcome = match command {
            Command::Reset => self.ledger.reset_room(room_id).await,
            Command::Countdown(seconds) => {
                self.ledger
                    .set_countdown(room_id, Utc::now() + Duration::seconds(seconds))
                    .await
            }
        };

        match outcome {
            Ok(()) => info!(room = %room_id, sender = %event.sender, ?command, "Command applied"),
            Err(e) => error!(room = %room_id, error = %e, "Command failed"),
        }
    }
}
