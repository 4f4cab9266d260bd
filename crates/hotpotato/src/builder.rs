//! `HotPotato` builder: config + stores + randomness → a ready game master.

use std::sync::Arc;

use hotpotato_engine::{GameMaster, RandomSource, SeededRandom, ThreadRandom};
use hotpotato_protocol::{
    CookRequest, GetHolderRequest, GetLeaderboardRequest, Namespace, StealRequest,
    TossRequest,
};
use hotpotato_store::{GameStore, MemoryStore, RoomStore};

use crate::HotPotatoConfig;

/// Builder for a [`HotPotato`] instance.
///
/// # Example
///
/// ```rust
/// use hotpotato::{HotPotato, HotPotatoConfig};
///
/// let game = HotPotato::builder()
///     .config(HotPotatoConfig { seed: Some(7), ..Default::default() })
///     .build();
/// assert_eq!(game.namespace().as_str(), "console");
/// ```
#[derive(Default)]
pub struct HotPotatoBuilder {
    config: HotPotatoConfig,
    random: Option<Arc<dyn RandomSource>>,
}

impl HotPotatoBuilder {
    /// Creates a builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the configuration.
    pub fn config(mut self, config: HotPotatoConfig) -> Self {
        self.config = config;
        self
    }

    /// Overrides the random source. Takes precedence over `config.seed`.
    pub fn random(mut self, random: Arc<dyn RandomSource>) -> Self {
        self.random = Some(random);
        self
    }

    /// Builds on a fresh in-memory store.
    pub fn build(self) -> HotPotato<MemoryStore, MemoryStore> {
        let store = MemoryStore::new();
        self.build_with(store.clone(), store)
    }

    /// Builds on caller-supplied stores.
    pub fn build_with<R: RoomStore, G: GameStore>(
        self,
        rooms: R,
        games: G,
    ) -> HotPotato<R, G> {
        let random: Arc<dyn RandomSource> = match (self.random, self.config.seed) {
            (Some(random), _) => random,
            (None, Some(seed)) => Arc::new(SeededRandom::new(seed)),
            (None, None) => Arc::new(ThreadRandom),
        };

        tracing::debug!(
            namespace = %self.config.namespace,
            seeded = self.config.seed.is_some(),
            "hot potato ready"
        );

        HotPotato {
            namespace: Namespace::new(self.config.namespace.clone()),
            config: self.config,
            master: Arc::new(GameMaster::with_random(rooms, games, random)),
        }
    }
}

/// A configured game master plus request helpers stamped with the
/// configured namespace.
pub struct HotPotato<R: RoomStore, G: GameStore> {
    config: HotPotatoConfig,
    namespace: Namespace,
    master: Arc<GameMaster<R, G>>,
}

impl<R: RoomStore, G: GameStore> Clone for HotPotato<R, G> {
    fn clone(&self) -> Self {
        Self {
            config: self.config.clone(),
            namespace: self.namespace.clone(),
            master: Arc::clone(&self.master),
        }
    }
}

impl HotPotato<MemoryStore, MemoryStore> {
    /// Creates a new builder.
    pub fn builder() -> HotPotatoBuilder {
        HotPotatoBuilder::new()
    }
}

impl<R: RoomStore, G: GameStore> HotPotato<R, G> {
    pub fn config(&self) -> &HotPotatoConfig {
        &self.config
    }

    pub fn namespace(&self) -> &Namespace {
        &self.namespace
    }

    /// The shared game master.
    pub fn master(&self) -> &Arc<GameMaster<R, G>> {
        &self.master
    }

    pub fn toss_request(
        &self,
        room: &str,
        channel: &str,
        actor: &str,
        target: &str,
    ) -> TossRequest {
        TossRequest {
            namespace: self.namespace.clone(),
            room_id: room.into(),
            channel_id: channel.into(),
            actor: actor.into(),
            target: target.into(),
        }
    }

    pub fn steal_request(
        &self,
        room: &str,
        channel: &str,
        actor: &str,
        target: &str,
    ) -> StealRequest {
        StealRequest {
            namespace: self.namespace.clone(),
            room_id: room.into(),
            channel_id: channel.into(),
            actor: actor.into(),
            target: target.into(),
        }
    }

    pub fn cook_request(&self, room: &str, channel: &str, actor: &str) -> CookRequest {
        CookRequest {
            namespace: self.namespace.clone(),
            room_id: room.into(),
            channel_id: channel.into(),
            actor: actor.into(),
        }
    }

    pub fn holder_request(&self, room: &str, channel: &str) -> GetHolderRequest {
        GetHolderRequest {
            namespace: self.namespace.clone(),
            room_id: room.into(),
            channel_id: channel.into(),
        }
    }

    /// Leaderboard request using the configured `leaderboard_top`.
    pub fn leaderboard_request(&self, room: &str) -> GetLeaderboardRequest {
        GetLeaderboardRequest {
            namespace: self.namespace.clone(),
            room_id: room.into(),
            top: self.config.leaderboard_top,
        }
    }
}
