//! In-memory store: both traits over `HashMap`s behind Tokio mutexes.
//!
//! Each method takes its table lock for the whole read-modify-write, which
//! makes every operation atomic. Channel leases are separate per-channel
//! mutexes, so a lease on one channel never blocks another.

use std::collections::HashMap;
use std::sync::Arc;

use hotpotato_protocol::{ChannelKey, RoomId, RoomKey, UserId};
use tokio::sync::Mutex;

use crate::{
    ChannelLease, DeathCounter, Game, GameStore, Room, RoomStore, StoreError,
    INITIAL_HEAT_LEVEL,
};

#[derive(Default)]
struct Tables {
    rooms: Mutex<HashMap<RoomKey, Room>>,
    games: Mutex<HashMap<ChannelKey, Game>>,
    /// Lazily created, never removed: channels are few and long-lived.
    channel_locks: Mutex<HashMap<ChannelKey, Arc<Mutex<()>>>>,
}

/// A process-local implementation of [`RoomStore`] and [`GameStore`].
///
/// Cheap to clone; clones share the same tables. Nothing survives a
/// restart.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<Tables>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of rooms ever created.
    pub async fn room_count(&self) -> usize {
        self.tables.rooms.lock().await.len()
    }

    /// Number of channels whose game hasn't finished.
    pub async fn active_game_count(&self) -> usize {
        self.tables
            .games
            .lock()
            .await
            .values()
            .filter(|g| g.is_active())
            .count()
    }

    /// Applies `change` to the channel's active game and returns the
    /// updated record.
    async fn update_active(
        &self,
        key: &ChannelKey,
        change: impl FnOnce(&mut Game),
    ) -> Result<Game, StoreError> {
        let mut games = self.tables.games.lock().await;
        let game = games
            .get_mut(key)
            .ok_or_else(|| StoreError::GameNotFound(key.clone()))?;
        if game.finished {
            return Err(StoreError::GameFinished(key.clone()));
        }
        change(game);
        Ok(game.clone())
    }
}

impl RoomStore for MemoryStore {
    async fn get_room(&self, key: &RoomKey) -> Result<Room, StoreError> {
        self.tables
            .rooms
            .lock()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::RoomNotFound(key.clone()))
    }

    async fn create_room(&self, key: &RoomKey) -> Result<Room, StoreError> {
        let mut rooms = self.tables.rooms.lock().await;
        if rooms.contains_key(key) {
            return Err(StoreError::RoomAlreadyExists(key.clone()));
        }
        let room = Room {
            namespace: key.namespace.clone(),
            id: key.room_id.clone(),
            deaths: Vec::new(),
        };
        rooms.insert(key.clone(), room.clone());
        tracing::debug!(room = %key, "room stored");
        Ok(room)
    }

    async fn increment_deaths(
        &self,
        key: &RoomKey,
        user: &UserId,
    ) -> Result<(), StoreError> {
        let mut rooms = self.tables.rooms.lock().await;
        let room = rooms
            .get_mut(key)
            .ok_or_else(|| StoreError::RoomNotFound(key.clone()))?;

        match room.deaths.iter_mut().find(|d| &d.user == user) {
            Some(counter) => counter.count += 1,
            None => room.deaths.push(DeathCounter {
                user: user.clone(),
                count: 1,
            }),
        }
        Ok(())
    }
}

impl GameStore for MemoryStore {
    async fn lock_channel(
        &self,
        key: &ChannelKey,
    ) -> Result<ChannelLease, StoreError> {
        // Release the map lock before waiting on the channel lock.
        let lock = {
            let mut locks = self.tables.channel_locks.lock().await;
            Arc::clone(locks.entry(key.clone()).or_default())
        };
        let guard = lock.lock_owned().await;
        Ok(ChannelLease::new(guard))
    }

    async fn get_game(&self, key: &ChannelKey) -> Result<Game, StoreError> {
        self.tables
            .games
            .lock()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::GameNotFound(key.clone()))
    }

    async fn create_game(
        &self,
        key: &ChannelKey,
        room_id: &RoomId,
        potato_kind: &str,
        starter: &UserId,
    ) -> Result<Game, StoreError> {
        let mut games = self.tables.games.lock().await;
        if games.get(key).is_some_and(Game::is_active) {
            return Err(StoreError::GameAlreadyExists(key.clone()));
        }
        let game = Game {
            namespace: key.namespace.clone(),
            room_id: room_id.clone(),
            channel_id: key.channel_id.clone(),
            potato_kind: potato_kind.to_string(),
            heat_level: INITIAL_HEAT_LEVEL,
            holder: starter.clone(),
            turns: 0,
            finished: false,
        };
        games.insert(key.clone(), game.clone());
        Ok(game)
    }

    async fn advance_turn(
        &self,
        key: &ChannelKey,
        holder: &UserId,
    ) -> Result<Game, StoreError> {
        self.update_active(key, |game| {
            game.holder = holder.clone();
            game.turns += 1;
        })
        .await
    }

    async fn increment_heat_level(
        &self,
        key: &ChannelKey,
    ) -> Result<Game, StoreError> {
        self.update_active(key, |game| game.heat_level += 1).await
    }

    async fn end_game(&self, key: &ChannelKey) -> Result<Game, StoreError> {
        self.update_active(key, |game| game.finished = true).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn channel() -> ChannelKey {
        ChannelKey::new("test".into(), "general".into())
    }

    #[tokio::test]
    async fn test_update_active_rejects_missing_game() {
        let store = MemoryStore::new();
        let err = store.update_active(&channel(), |_| {}).await.unwrap_err();
        assert_eq!(err, StoreError::GameNotFound(channel()));
    }

    #[tokio::test]
    async fn test_leases_on_different_channels_do_not_block() {
        let store = MemoryStore::new();
        let other = ChannelKey::new("test".into(), "random".into());

        let _a = store.lock_channel(&channel()).await.unwrap();
        let b = tokio::time::timeout(
            std::time::Duration::from_millis(100),
            store.lock_channel(&other),
        )
        .await;
        assert!(b.is_ok());
    }
}
