//! Collaborator traits (ports) - what the engine needs from the outside

mod collaborators;

pub use collaborators::{
    ChatTransport, RoomDirectory, TransportError, TransportResult, UserProfile,
};
