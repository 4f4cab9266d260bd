//! `GameMaster`: the store-backed implementation of [`Service`].
//!
//! Every mutating operation follows the same shape:
//!
//! ```text
//! validate → resolve room → lease channel → read game → check rules
//!          → advance turn → roll → (exploded) end game, credit death
//! ```
//!
//! The lease is held from the game read until the death is credited, so
//! two players acting in the same channel at once are applied one after
//! the other, each against the state the previous one left.

use std::sync::Arc;

use hotpotato_protocol::{
    ChannelKey, CookRequest, CookResponse, GetHolderRequest, GetHolderResponse,
    GetLeaderboardRequest, GetLeaderboardResponse, Potato, RoomKey, StealRequest,
    StealResponse, TossRequest, TossResponse, UserId, Validate,
};
use hotpotato_store::{Game, GameStore, Room, RoomStore, StoreError};

use crate::{
    build_leaderboard, effective_chance, explodes, EngineError, RandomSource,
    Service, ThreadRandom, DRAW_RANGE,
};

/// What a turn left behind.
struct TurnOutcome {
    game: Game,
    exploded: bool,
}

/// Runs Hot Potato games on top of a room store and a game store.
///
/// Holds no game state of its own. Cheap to share behind an `Arc`.
pub struct GameMaster<R: RoomStore, G: GameStore> {
    rooms: R,
    games: G,
    rng: Arc<dyn RandomSource>,
}

impl<R: RoomStore, G: GameStore> GameMaster<R, G> {
    /// Creates a game master using the thread-local RNG.
    pub fn new(rooms: R, games: G) -> Self {
        Self::with_random(rooms, games, Arc::new(ThreadRandom))
    }

    /// Creates a game master drawing from `rng`.
    pub fn with_random(rooms: R, games: G, rng: Arc<dyn RandomSource>) -> Self {
        Self { rooms, games, rng }
    }

    /// The room store this game master writes deaths to.
    pub fn rooms(&self) -> &R {
        &self.rooms
    }

    /// The game store this game master plays in.
    pub fn games(&self) -> &G {
        &self.games
    }

    /// Picks a potato for a new game, uniformly from the catalog.
    pub fn random_potato(&self) -> Potato {
        let i = self.rng.below(Potato::ALL.len() as u32) as usize;
        Potato::ALL[i]
    }

    /// Rolls for an explosion after a turn.
    pub fn decide_explode(&self, potato: Potato, turns: u32, heat_level: u32) -> bool {
        let chance = effective_chance(potato, turns, heat_level);
        let draw = self.rng.below(DRAW_RANGE);
        tracing::trace!(%potato, turns, heat_level, chance, draw, "explosion roll");
        explodes(chance, draw)
    }

    // -----------------------------------------------------------------------
    // Resolution helpers
    // -----------------------------------------------------------------------

    /// Returns the room, creating it on first use.
    async fn resolve_room(&self, key: &RoomKey) -> Result<Room, EngineError> {
        match self.rooms.get_room(key).await {
            Ok(room) => Ok(room),
            Err(StoreError::RoomNotFound(_)) => {
                match self.rooms.create_room(key).await {
                    Ok(room) => {
                        tracing::info!(
                            namespace = %key.namespace,
                            room = %key.room_id,
                            "room created"
                        );
                        Ok(room)
                    }
                    // Lost a creation race; use the winner's room.
                    Err(StoreError::RoomAlreadyExists(_)) => self
                        .rooms
                        .get_room(key)
                        .await
                        .map_err(EngineError::store("getting room")),
                    Err(e) => Err(EngineError::store("creating room")(e)),
                }
            }
            Err(e) => Err(EngineError::store("getting room")(e)),
        }
    }

    /// Returns the channel's game if it's still being played.
    async fn active_game(&self, key: &ChannelKey) -> Result<Option<Game>, EngineError> {
        match self.games.get_game(key).await {
            Ok(game) if game.is_active() => Ok(Some(game)),
            Ok(_) | Err(StoreError::GameNotFound(_)) => Ok(None),
            Err(e) => Err(EngineError::store("getting game")(e)),
        }
    }

    /// Returns the active game or [`EngineError::NoOngoingGame`].
    async fn require_game(&self, key: &ChannelKey) -> Result<Game, EngineError> {
        self.active_game(key).await?.ok_or(EngineError::NoOngoingGame)
    }

    /// Starts a fresh game with `starter` holding a random potato.
    async fn start_game(
        &self,
        key: &ChannelKey,
        room: &Room,
        starter: &UserId,
    ) -> Result<Game, EngineError> {
        let potato = self.random_potato();
        let game = self
            .games
            .create_game(key, &room.id, potato.kind(), starter)
            .await
            .map_err(EngineError::store("creating game"))?;
        tracing::info!(
            namespace = %key.namespace,
            room = %room.id,
            channel = %key.channel_id,
            potato = potato.kind(),
            %starter,
            "game created"
        );
        Ok(game)
    }

    // -----------------------------------------------------------------------
    // Turn mechanics
    // -----------------------------------------------------------------------

    /// Hands the potato to `holder`, rolls, and on explosion ends the game
    /// and credits the death to `holder`.
    async fn take_turn(
        &self,
        key: &ChannelKey,
        room: &RoomKey,
        potato: Potato,
        holder: &UserId,
    ) -> Result<TurnOutcome, EngineError> {
        let game = self
            .games
            .advance_turn(key, holder)
            .await
            .map_err(EngineError::store("handling turn"))?;
        tracing::info!(
            channel = %key,
            %holder,
            turn = game.turns,
            heat_level = game.heat_level,
            "turn handled"
        );

        if !self.decide_explode(potato, game.turns, game.heat_level) {
            return Ok(TurnOutcome {
                game,
                exploded: false,
            });
        }

        let game = self
            .games
            .end_game(key)
            .await
            .map_err(EngineError::store("ending game"))?;
        tracing::info!(channel = %key, victim = %holder, turn = game.turns, "game ended");

        // The game is already over; a failure here loses the death.
        if let Err(e) = self.rooms.increment_deaths(room, holder).await {
            tracing::error!(
                room = %room,
                channel = %key,
                user = %holder,
                error = %e,
                "game ended but death was not credited"
            );
            return Err(EngineError::store("incrementing death count")(e));
        }

        Ok(TurnOutcome {
            game,
            exploded: true,
        })
    }

    fn potato_of(game: &Game) -> Result<Potato, EngineError> {
        Potato::from_kind(&game.potato_kind)
            .map_err(|_| EngineError::InvalidPotatoKind(game.potato_kind.clone()))
    }

    fn not_holder(game: Game, channel: &ChannelKey, who: &UserId) -> EngineError {
        tracing::debug!(channel = %channel, %who, holder = %game.holder, "not holder");
        EngineError::NotHolder {
            holder: game.holder,
        }
    }
}

impl<R: RoomStore, G: GameStore> Service for GameMaster<R, G> {
    async fn toss(&self, req: &TossRequest) -> Result<TossResponse, EngineError> {
        req.validate()?;

        let room = self.resolve_room(&req.room_key()).await?;
        let channel = req.channel_key();
        let _lease = self
            .games
            .lock_channel(&channel)
            .await
            .map_err(EngineError::store("locking channel"))?;

        let game = match self.active_game(&channel).await? {
            Some(game) => game,
            None => self.start_game(&channel, &room, &req.actor).await?,
        };

        if game.holder != req.actor {
            return Err(Self::not_holder(game, &channel, &req.actor));
        }

        let potato = Self::potato_of(&game)?;
        let outcome = self
            .take_turn(&channel, &room.key(), potato, &req.target)
            .await?;

        Ok(TossResponse {
            turn: outcome.game.turns,
            potato,
            holder: outcome.game.holder,
            exploded: outcome.exploded,
        })
    }

    async fn steal(&self, req: &StealRequest) -> Result<StealResponse, EngineError> {
        req.validate()?;

        let room = self.resolve_room(&req.room_key()).await?;
        let channel = req.channel_key();
        let _lease = self
            .games
            .lock_channel(&channel)
            .await
            .map_err(EngineError::store("locking channel"))?;

        let game = self.require_game(&channel).await?;

        if req.target == req.actor {
            return Err(EngineError::SelfSteal);
        }
        if game.holder != req.target {
            return Err(Self::not_holder(game, &channel, &req.target));
        }

        let potato = Self::potato_of(&game)?;
        let outcome = self
            .take_turn(&channel, &room.key(), potato, &req.actor)
            .await?;

        Ok(StealResponse {
            turn: outcome.game.turns,
            potato,
            holder: outcome.game.holder,
            exploded: outcome.exploded,
        })
    }

    async fn cook(&self, req: &CookRequest) -> Result<CookResponse, EngineError> {
        req.validate()?;

        let room = self.resolve_room(&req.room_key()).await?;
        let channel = req.channel_key();
        let _lease = self
            .games
            .lock_channel(&channel)
            .await
            .map_err(EngineError::store("locking channel"))?;

        let game = self.require_game(&channel).await?;

        if game.holder != req.actor {
            return Err(Self::not_holder(game, &channel, &req.actor));
        }

        let potato = Self::potato_of(&game)?;
        let heated = self
            .games
            .increment_heat_level(&channel)
            .await
            .map_err(EngineError::store("incrementing heat level"))?;
        tracing::debug!(channel = %channel, heat_level = heated.heat_level, "potato cooked");

        let outcome = self
            .take_turn(&channel, &room.key(), potato, &req.actor)
            .await?;

        Ok(CookResponse {
            turn: outcome.game.turns,
            heat_level: outcome.game.heat_level,
            potato,
            holder: outcome.game.holder,
            exploded: outcome.exploded,
        })
    }

    async fn get_holder(
        &self,
        req: &GetHolderRequest,
    ) -> Result<GetHolderResponse, EngineError> {
        req.validate()?;

        self.resolve_room(&req.room_key()).await?;
        let game = self.require_game(&req.channel_key()).await?;
        let potato = Self::potato_of(&game)?;

        Ok(GetHolderResponse {
            potato,
            holder: game.holder,
            turn: game.turns,
            heat_level: game.heat_level,
        })
    }

    async fn get_leaderboard(
        &self,
        req: &GetLeaderboardRequest,
    ) -> Result<GetLeaderboardResponse, EngineError> {
        req.validate()?;

        let room = self.resolve_room(&req.room_key()).await?;

        Ok(GetLeaderboardResponse {
            leaderboard: build_leaderboard(&room.deaths, req.top),
        })
    }
}
