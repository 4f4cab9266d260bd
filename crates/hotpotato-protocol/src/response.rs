//! Responses returned by the engine.

use serde::{Deserialize, Serialize};

use crate::{Potato, UserId};

/// Result of a successful toss.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TossResponse {
    /// The game's turn count after this toss.
    pub turn: u32,
    pub potato: Potato,
    /// Who holds the potato now (the target).
    pub holder: UserId,
    /// `true` if the potato blew up in the target's hands.
    pub exploded: bool,
}

/// Result of a successful steal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StealResponse {
    pub turn: u32,
    pub potato: Potato,
    /// Who holds the potato now (the thief).
    pub holder: UserId,
    /// `true` if the potato blew up in the thief's hands.
    pub exploded: bool,
}

/// Result of a successful cook.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CookResponse {
    pub turn: u32,
    /// Heat level after this cook.
    pub heat_level: u32,
    pub potato: Potato,
    pub holder: UserId,
    pub exploded: bool,
}

/// Current state of the channel's active game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetHolderResponse {
    pub potato: Potato,
    pub holder: UserId,
    pub turn: u32,
    pub heat_level: u32,
}

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserDeaths {
    pub user: UserId,
    pub count: u32,
}

/// The room's death ranking, most deaths first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GetLeaderboardResponse {
    pub leaderboard: Vec<UserDeaths>,
}
