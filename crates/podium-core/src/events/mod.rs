//! Wire event shapes delivered by the chat transport

mod room_event;

pub use room_event::{
    Annotation, RoomEvent, EVENT_TYPE_MESSAGE, EVENT_TYPE_REACTION, EVENT_TYPE_REDACTION,
    MSGTYPE_TEXT, RELATION_ANNOTATION,
};
