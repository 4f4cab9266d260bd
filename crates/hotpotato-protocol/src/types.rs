//! Identity types for Hot Potato.
//!
//! Every identifier is an opaque string handed to us by the chat platform
//! (snowflakes, slugs, whatever the integration uses). Wrapping them in
//! newtypes keeps a `ChannelId` from being passed where a `UserId` is
//! expected, even though both are strings underneath.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Generates a `String`-backed identity newtype with the usual impls.
macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Default,
            Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub String);

        impl $name {
            /// Creates a new identifier from anything string-like.
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            /// Returns the identifier as a string slice.
            pub fn as_str(&self) -> &str {
                &self.0
            }

            /// Returns `true` if the identifier is the empty string.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(id: &str) -> Self {
                Self(id.to_string())
            }
        }

        impl From<String> for $name {
            fn from(id: String) -> Self {
                Self(id)
            }
        }
    };
}

string_id! {
    /// The integration a room lives in (e.g. `discord`).
    ///
    /// Namespaces keep two platforms that happen to reuse the same room
    /// or channel IDs from sharing state.
    Namespace
}

string_id! {
    /// A persistent grouping of channels (a guild, a server, a workspace).
    ///
    /// All channels in a room share one death leaderboard.
    RoomId
}

string_id! {
    /// The scope in which exactly one game can be active at a time.
    ChannelId
}

string_id! {
    /// A chat participant.
    UserId
}

// ---------------------------------------------------------------------------
// Composite keys
// ---------------------------------------------------------------------------

/// Identifies a room record: `(namespace, room ID)`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RoomKey {
    pub namespace: Namespace,
    pub room_id: RoomId,
}

impl RoomKey {
    pub fn new(namespace: Namespace, room_id: RoomId) -> Self {
        Self { namespace, room_id }
    }
}

impl fmt::Display for RoomKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.room_id)
    }
}

/// Identifies a game record: `(namespace, channel ID)`.
///
/// Games are keyed by channel, not by room; the room is an attribute of
/// the game, used to credit deaths to the right leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ChannelKey {
    pub namespace: Namespace,
    pub channel_id: ChannelId,
}

impl ChannelKey {
    pub fn new(namespace: Namespace, channel_id: ChannelId) -> Self {
        Self {
            namespace,
            channel_id,
        }
    }
}

impl fmt::Display for ChannelKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.namespace, self.channel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_id_display_is_raw_string() {
        assert_eq!(UserId::new("1234").to_string(), "1234");
    }

    #[test]
    fn test_ids_serialize_transparently() {
        let json = serde_json::to_string(&ChannelId::from("general")).unwrap();
        assert_eq!(json, "\"general\"");
    }

    #[test]
    fn test_keys_display_with_namespace_prefix() {
        let room = RoomKey::new("discord".into(), "guild-1".into());
        let channel = ChannelKey::new("discord".into(), "chan-9".into());
        assert_eq!(room.to_string(), "discord/guild-1");
        assert_eq!(channel.to_string(), "discord/chan-9");
    }

    #[test]
    fn test_empty_id_is_empty() {
        assert!(UserId::default().is_empty());
        assert!(!UserId::from("a").is_empty());
    }
}
