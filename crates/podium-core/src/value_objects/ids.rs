//! Opaque chat identifiers
//!
//! Room, event, and user ids are opaque strings minted by the chat
//! transport (`!room:domain`, `$event`, `@user:domain`). They are never
//! parsed for meaning here; the newtypes exist so the three id spaces
//! cannot be mixed up.

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! opaque_id {
    ($(#[$doc:meta])* $name:ident) => {
        $(#[$doc])*
        #[derive(
            Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
        )]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Create a new id from any string-like value
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// View the id as a string slice
            #[inline]
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Consume the id, returning the inner string
            pub fn into_inner(self) -> String {
                self.0
            }

            /// Check whether the id is the empty string
            #[inline]
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_owned())
            }
        }

        impl AsRef<str> for $name {
            fn as_ref(&self) -> &str {
                &self.0
            }
        }
    };
}

opaque_id! {
    /// Identifier of a chat room (an auditorium, in this system)
    RoomId
}

opaque_id! {
    /// Identifier of a single room event (a message, reaction, or redaction)
    EventId
}

opaque_id! {
    /// Identifier of a chat user
    UserId
}
