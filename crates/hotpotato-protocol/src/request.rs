//! Requests, one per user-facing command.
//!
//! Front-ends build these from whatever the chat platform hands them and
//! pass them to the engine. The engine calls [`Validate::validate`] first
//! and rejects the request before touching any store.

use serde::{Deserialize, Serialize};

use crate::{ChannelId, ChannelKey, Namespace, ProtocolError, RoomId, RoomKey, UserId};

/// Required-field checks for a request.
pub trait Validate {
    /// Returns the first missing field, if any.
    fn validate(&self) -> Result<(), ProtocolError>;
}

/// Checks fields in order and reports the first empty one.
fn require(fields: &[(&'static str, bool)]) -> Result<(), ProtocolError> {
    match fields.iter().find(|(_, empty)| *empty) {
        Some(&(name, _)) => Err(ProtocolError::MissingField(name)),
        None => Ok(()),
    }
}

/// Adds `room_key()` / `channel_key()` helpers to a request type.
macro_rules! keyed {
    ($name:ident, room) => {
        impl $name {
            /// The room this request resolves.
            pub fn room_key(&self) -> RoomKey {
                RoomKey::new(self.namespace.clone(), self.room_id.clone())
            }
        }
    };
    ($name:ident, room, channel) => {
        keyed!($name, room);

        impl $name {
            /// The channel whose game this request targets.
            pub fn channel_key(&self) -> ChannelKey {
                ChannelKey::new(self.namespace.clone(), self.channel_id.clone())
            }
        }
    };
}

// ---------------------------------------------------------------------------
// Toss
// ---------------------------------------------------------------------------

/// Pass the potato to someone (or start a game if none is running).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TossRequest {
    pub namespace: Namespace,
    pub room_id: RoomId,
    pub channel_id: ChannelId,
    pub actor: UserId,
    pub target: UserId,
}

impl Validate for TossRequest {
    fn validate(&self) -> Result<(), ProtocolError> {
        require(&[
            ("namespace", self.namespace.is_empty()),
            ("room ID", self.room_id.is_empty()),
            ("channel ID", self.channel_id.is_empty()),
            ("actor user ID", self.actor.is_empty()),
            ("target user ID", self.target.is_empty()),
        ])
    }
}

keyed!(TossRequest, room, channel);

// ---------------------------------------------------------------------------
// Steal
// ---------------------------------------------------------------------------

/// Take the potato from whoever holds it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealRequest {
    pub namespace: Namespace,
    pub room_id: RoomId,
    pub channel_id: ChannelId,
    pub actor: UserId,
    pub target: UserId,
}

impl Validate for StealRequest {
    fn validate(&self) -> Result<(), ProtocolError> {
        require(&[
            ("namespace", self.namespace.is_empty()),
            ("room ID", self.room_id.is_empty()),
            ("channel ID", self.channel_id.is_empty()),
            ("actor user ID", self.actor.is_empty()),
            ("target user ID", self.target.is_empty()),
        ])
    }
}

keyed!(StealRequest, room, channel);

// ---------------------------------------------------------------------------
// Cook
// ---------------------------------------------------------------------------

/// Turn up the heat on the potato you're holding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookRequest {
    pub namespace: Namespace,
    pub room_id: RoomId,
    pub channel_id: ChannelId,
    pub actor: UserId,
}

impl Validate for CookRequest {
    fn validate(&self) -> Result<(), ProtocolError> {
        require(&[
            ("namespace", self.namespace.is_empty()),
            ("room ID", self.room_id.is_empty()),
            ("channel ID", self.channel_id.is_empty()),
            ("actor user ID", self.actor.is_empty()),
        ])
    }
}

keyed!(CookRequest, room, channel);

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

/// Who's holding the potato in this channel?
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetHolderRequest {
    pub namespace: Namespace,
    pub room_id: RoomId,
    pub channel_id: ChannelId,
}

impl Validate for GetHolderRequest {
    fn validate(&self) -> Result<(), ProtocolError> {
        require(&[
            ("namespace", self.namespace.is_empty()),
            ("room ID", self.room_id.is_empty()),
            ("channel ID", self.channel_id.is_empty()),
        ])
    }
}

keyed!(GetHolderRequest, room, channel);

/// The room's death ranking.
///
/// `top == 0` means "everyone"; otherwise the ranking is cut to `top`
/// entries. Being unsigned, a negative `top` can't be expressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLeaderboardRequest {
    pub namespace: Namespace,
    pub room_id: RoomId,
    #[serde(default)]
    pub top: usize,
}

impl Validate for GetLeaderboardRequest {
    fn validate(&self) -> Result<(), ProtocolError> {
        require(&[
            ("namespace", self.namespace.is_empty()),
            ("room ID", self.room_id.is_empty()),
        ])
    }
}

keyed!(GetLeaderboardRequest, room);

#[cfg(test)]
mod tests {
    use super::*;

    fn toss() -> TossRequest {
        TossRequest {
            namespace: "discord".into(),
            room_id: "guild".into(),
            channel_id: "general".into(),
            actor: "alice".into(),
            target: "bob".into(),
        }
    }

    #[test]
    fn test_complete_request_is_valid() {
        assert_eq!(toss().validate(), Ok(()));
    }

    #[test]
    fn test_reports_first_missing_field() {
        let mut req = toss();
        req.channel_id = ChannelId::default();
        req.target = UserId::default();
        assert_eq!(
            req.validate(),
            Err(ProtocolError::MissingField("channel ID"))
        );
    }

    #[test]
    fn test_cook_requires_actor() {
        let req = CookRequest {
            namespace: "discord".into(),
            room_id: "guild".into(),
            channel_id: "general".into(),
            actor: UserId::default(),
        };
        assert_eq!(
            req.validate(),
            Err(ProtocolError::MissingField("actor user ID"))
        );
    }

    #[test]
    fn test_leaderboard_does_not_need_channel() {
        let req = GetLeaderboardRequest {
            namespace: "discord".into(),
            room_id: "guild".into(),
            top: 0,
        };
        assert_eq!(req.validate(), Ok(()));
    }

    #[test]
    fn test_leaderboard_top_defaults_to_zero_when_absent() {
        let req: GetLeaderboardRequest =
            serde_json::from_str(r#"{"namespace":"d","room_id":"r"}"#).unwrap();
        assert_eq!(req.top, 0);
    }

    #[test]
    fn test_keys_are_built_from_fields() {
        let req = toss();
        assert_eq!(req.room_key().to_string(), "discord/guild");
        assert_eq!(req.channel_key().to_string(), "discord/general");
    }
}
