//! # Hot Potato
//!
//! A turn-based, chance-of-failure party game for chat channels. Players
//! toss, steal, and cook a virtual potato; every turn it might explode,
//! ending the round and counting a death against whoever is holding it.
//!
//! This meta-crate ties the layers together:
//!
//! - [`protocol`]: identifiers, requests, responses, the potato catalog
//! - [`store`]: room/game store traits and the in-memory store
//! - [`engine`]: the game rules ([`GameMaster`](engine::GameMaster))
//!
//! plus configuration ([`HotPotatoConfig`]), logging setup
//! ([`init_tracing`]), and a builder that wires them up.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use hotpotato::prelude::*;
//!
//! # async fn run() -> Result<(), HotPotatoError> {
//! let config = HotPotatoConfig::from_env()?;
//! init_tracing(&config.log_filter)?;
//!
//! let game = HotPotato::builder().config(config).build();
//! let rsp = game
//!     .master()
//!     .toss(&game.toss_request("guild", "general", "alice", "bob"))
//!     .await?;
//! println!("{} now holds the {}", rsp.holder, rsp.potato);
//! # Ok(())
//! # }
//! ```

mod builder;
mod config;
mod error;
mod telemetry;

pub use builder::{HotPotato, HotPotatoBuilder};
pub use config::HotPotatoConfig;
pub use error::HotPotatoError;
pub use telemetry::init_tracing;

pub use hotpotato_engine as engine;
pub use hotpotato_protocol as protocol;
pub use hotpotato_store as store;

/// Everything a front-end usually needs, in one import.
pub mod prelude {
    pub use crate::{
        init_tracing, HotPotato, HotPotatoBuilder, HotPotatoConfig,
        HotPotatoError,
    };
    pub use hotpotato_engine::{
        EngineError, GameMaster, RandomSource, ScriptedRandom, SeededRandom,
        Service, ThreadRandom,
    };
    pub use hotpotato_protocol::{
        ChannelId, CookRequest, CookResponse, GetHolderRequest,
        GetHolderResponse, GetLeaderboardRequest, GetLeaderboardResponse,
        Namespace, Potato, RoomId, StealRequest, StealResponse, TossRequest,
        TossResponse, UserDeaths, UserId,
    };
    pub use hotpotato_store::{GameStore, MemoryStore, RoomStore};
}
