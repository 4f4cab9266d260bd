//! The Hot Potato game engine.
//!
//! [`GameMaster`] runs one operation per call (toss, steal, cook, holder
//! query, leaderboard query) against a [`RoomStore`] and a [`GameStore`].
//! It keeps no state between calls; every decision is made on a fresh
//! read taken under the channel's lease.
//!
//! # Key types
//!
//! - [`Service`]: the five operations front-ends call
//! - [`GameMaster`]: the store-backed implementation of [`Service`]
//! - [`RandomSource`]: injectable randomness ([`ThreadRandom`],
//!   [`SeededRandom`], [`ScriptedRandom`])
//! - [`effective_chance`] / [`explodes`]: the explosion rule
//! - [`build_leaderboard`]: death counters to ranking
//!
//! [`RoomStore`]: hotpotato_store::RoomStore
//! [`GameStore`]: hotpotato_store::GameStore

#![allow(async_fn_in_trait)]

mod error;
mod explosion;
mod leaderboard;
mod master;
mod random;
mod service;

pub use error::EngineError;
pub use explosion::{effective_chance, explodes, heat_bonus, DRAW_RANGE};
pub use leaderboard::build_leaderboard;
pub use master::GameMaster;
pub use random::{RandomSource, ScriptedRandom, SeededRandom, ThreadRandom};
pub use service::Service;
