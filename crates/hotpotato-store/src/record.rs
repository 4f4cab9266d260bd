//! Stored records.
//!
//! These mirror the persisted layout (rooms, deaths, games tables) rather
//! than the engine's view: the potato is kept as its persisted kind string,
//! and the engine parses it on every read.

use hotpotato_protocol::{ChannelId, ChannelKey, Namespace, RoomId, RoomKey, UserId};
use serde::{Deserialize, Serialize};

/// Heat level of a freshly created game.
pub const INITIAL_HEAT_LEVEL: u32 = 1;

/// Cumulative deaths for one user in one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeathCounter {
    pub user: UserId,
    pub count: u32,
}

/// A room and its death counters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub namespace: Namespace,
    pub id: RoomId,
    /// One entry per user who has died at least once.
    pub deaths: Vec<DeathCounter>,
}

impl Room {
    pub fn key(&self) -> RoomKey {
        RoomKey::new(self.namespace.clone(), self.id.clone())
    }

    /// Death count for `user`, zero if they've never died here.
    pub fn deaths_of(&self, user: &UserId) -> u32 {
        self.deaths
            .iter()
            .find(|d| &d.user == user)
            .map_or(0, |d| d.count)
    }
}

/// The single active, or most recently finished, game in a channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Game {
    pub namespace: Namespace,
    pub room_id: RoomId,
    pub channel_id: ChannelId,
    /// Persisted potato kind, e.g. `"baked"`.
    pub potato_kind: String,
    /// Starts at [`INITIAL_HEAT_LEVEL`]; only cooking raises it.
    pub heat_level: u32,
    pub holder: UserId,
    /// Number of tosses, steals, and cooks so far.
    pub turns: u32,
    /// Once set, the record never changes again.
    pub finished: bool,
}

impl Game {
    pub fn key(&self) -> ChannelKey {
        ChannelKey::new(self.namespace.clone(), self.channel_id.clone())
    }

    /// Returns `true` if the game can still be played.
    pub fn is_active(&self) -> bool {
        !self.finished
    }
}
