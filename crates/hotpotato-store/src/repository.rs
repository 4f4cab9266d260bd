//! The store traits the engine is written against.
//!
//! Implementations own durability and isolation. The engine relies on two
//! guarantees:
//!
//! 1. every method is atomic on its own (in particular
//!    [`GameStore::advance_turn`] changes holder and turn together or not
//!    at all);
//! 2. while a [`ChannelLease`] from [`GameStore::lock_channel`] is alive,
//!    no other lease for the same channel is granted, so a
//!    read-decide-write sequence under the lease sees no interleaving.

use std::future::Future;

use hotpotato_protocol::{ChannelKey, RoomId, RoomKey, UserId};

use crate::{ChannelLease, Game, Room, StoreError};

/// Rooms and their death counters.
pub trait RoomStore: Send + Sync + 'static {
    /// Returns the room with its death counters.
    ///
    /// # Errors
    /// [`StoreError::RoomNotFound`] if the room was never created.
    fn get_room(
        &self,
        key: &RoomKey,
    ) -> impl Future<Output = Result<Room, StoreError>> + Send;

    /// Creates an empty room.
    ///
    /// # Errors
    /// [`StoreError::RoomAlreadyExists`] if someone got there first.
    fn create_room(
        &self,
        key: &RoomKey,
    ) -> impl Future<Output = Result<Room, StoreError>> + Send;

    /// Adds exactly one death to `user` in this room, creating the
    /// counter at 1 on their first death.
    fn increment_deaths(
        &self,
        key: &RoomKey,
        user: &UserId,
    ) -> impl Future<Output = Result<(), StoreError>> + Send;
}

/// Games, one record per channel.
pub trait GameStore: Send + Sync + 'static {
    /// Waits for exclusive access to the channel and returns a lease that
    /// holds it until dropped.
    fn lock_channel(
        &self,
        key: &ChannelKey,
    ) -> impl Future<Output = Result<ChannelLease, StoreError>> + Send;

    /// Returns the channel's game, finished or not.
    ///
    /// # Errors
    /// [`StoreError::GameNotFound`] if the channel never had a game.
    fn get_game(
        &self,
        key: &ChannelKey,
    ) -> impl Future<Output = Result<Game, StoreError>> + Send;

    /// Starts a new game: heat 1, turn 0, `starter` holding the potato.
    /// Replaces a finished record.
    ///
    /// # Errors
    /// [`StoreError::GameAlreadyExists`] if the channel has an unfinished
    /// game.
    fn create_game(
        &self,
        key: &ChannelKey,
        room_id: &RoomId,
        potato_kind: &str,
        starter: &UserId,
    ) -> impl Future<Output = Result<Game, StoreError>> + Send;

    /// Hands the potato to `holder` and increments the turn count, as one
    /// atomic change.
    ///
    /// # Errors
    /// [`StoreError::GameNotFound`] / [`StoreError::GameFinished`] if there
    /// is no active game.
    fn advance_turn(
        &self,
        key: &ChannelKey,
        holder: &UserId,
    ) -> impl Future<Output = Result<Game, StoreError>> + Send;

    /// Raises the heat level by one.
    ///
    /// # Errors
    /// Same as [`advance_turn`](Self::advance_turn).
    fn increment_heat_level(
        &self,
        key: &ChannelKey,
    ) -> impl Future<Output = Result<Game, StoreError>> + Send;

    /// Marks the game finished. Terminal.
    ///
    /// # Errors
    /// Same as [`advance_turn`](Self::advance_turn).
    fn end_game(
        &self,
        key: &ChannelKey,
    ) -> impl Future<Output = Result<Game, StoreError>> + Send;
}
