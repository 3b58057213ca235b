//! Test fixtures: mock collaborators and event builders
//!
//! Provides reusable in-memory implementations of the engine's
//! collaborator traits and builders for the wire events it consumes.

use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use async_trait::async_trait;
use serde_json::json;

use podium_core::{
    ChatTransport, EventId, RoomDirectory, RoomEvent, RoomId, TransportError, TransportResult,
    UserId, UserProfile,
};

/// In-memory chat transport: serves events and profiles that tests have
/// planted, and fails lookups for everything else.
#[derive(Default)]
pub struct FakeTransport {
    events: Mutex<HashMap<EventId, RoomEvent>>,
    profiles: Mutex<HashMap<UserId, UserProfile>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plant an event so it can be fetched by id
    pub fn add_event(&self, event: RoomEvent) {
        self.events
            .lock()
            .unwrap()
            .insert(event.event_id.clone(), event);
    }

    /// Drop an event, as if it had been redacted server-side
    pub fn remove_event(&self, event_id: &EventId) {
        self.events.lock().unwrap().remove(event_id);
    }

    /// Plant a user profile
    pub fn add_profile(&self, user_id: UserId, display_name: &str, avatar: Option<&str>) {
        self.profiles.lock().unwrap().insert(
            user_id,
            UserProfile {
                display_name: Some(display_name.to_string()),
                avatar_http_url: avatar.map(String::from),
            },
        );
    }
}

#[async_trait]
impl ChatTransport for FakeTransport {
    async fn fetch_event(
        &self,
        _room_id: &RoomId,
        event_id: &EventId,
    ) -> TransportResult<Option<RoomEvent>> {
        Ok(self.events.lock().unwrap().get(event_id).cloned())
    }

    async fn resolve_profile(&self, user_id: &UserId) -> TransportResult<UserProfile> {
        self.profiles
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .ok_or_else(|| TransportError::Request(format!("no profile for {user_id}")))
    }
}

/// Room registry with a fixed set of auditoriums
pub struct FakeDirectory {
    auditoriums: HashSet<RoomId>,
}

impl FakeDirectory {
    pub fn new(auditoriums: impl IntoIterator<Item = RoomId>) -> Self {
        Self {
            auditoriums: auditoriums.into_iter().collect(),
        }
    }
}

#[async_trait]
impl RoomDirectory for FakeDirectory {
    async fn is_auditorium(&self, room_id: &RoomId) -> bool {
        self.auditoriums.contains(room_id)
    }
}

/// Build a plain-text room message event
pub fn text_event(event_id: &str, sender: &str, body: &str) -> RoomEvent {
    RoomEvent {
        event_type: "m.room.message".to_string(),
        sender: UserId::new(sender),
        event_id: EventId::new(event_id),
        content: json!({"msgtype": "m.text", "body": body}),
        redacts: None,
    }
}

/// Build a vote reaction event
pub fn reaction_event(event_id: &str, sender: &str, target: &str, key: &str) -> RoomEvent {
    RoomEvent {
        event_type: "m.reaction".to_string(),
        sender: UserId::new(sender),
        event_id: EventId::new(event_id),
        content: json!({
            "m.relates_to": {"rel_type": "m.annotation", "event_id": target, "key": key}
        }),
        redacts: None,
    }
}

/// Build a redaction event
pub fn redaction_event(event_id: &str, sender: &str, redacts: &str) -> RoomEvent {
    RoomEvent {
        event_type: "m.room.redaction".to_string(),
        sender: UserId::new(sender),
        event_id: EventId::new(event_id),
        content: json!({}),
        redacts: Some(EventId::new(redacts)),
    }
}
