//! Error types for the store layer.

use hotpotato_protocol::{ChannelKey, RoomKey};

/// Errors that can occur during store operations.
///
/// Not-found and conflict variants are expected conditions the engine
/// handles (auto-create, re-read, "no ongoing game"). `Backend` is
/// everything else and is propagated as an internal failure.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No room record exists for this key.
    #[error("room {0} not found")]
    RoomNotFound(RoomKey),

    /// A room record already exists for this key.
    #[error("room {0} already exists")]
    RoomAlreadyExists(RoomKey),

    /// No game record exists for this channel.
    #[error("game for channel {0} not found")]
    GameNotFound(ChannelKey),

    /// The channel already has an unfinished game.
    #[error("game for channel {0} already exists")]
    GameAlreadyExists(ChannelKey),

    /// The channel's game has ended and can no longer change.
    #[error("game for channel {0} is finished")]
    GameFinished(ChannelKey),

    /// The underlying storage failed.
    #[error("store backend failure: {0}")]
    Backend(String),
}
