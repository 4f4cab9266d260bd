//! Persistence contracts for Hot Potato.
//!
//! The engine never owns state. Rooms (death counters) and games (one per
//! channel) live behind two traits, and every engine call re-reads them.
//!
//! # Key types
//!
//! - [`RoomStore`]: get / create rooms, credit deaths
//! - [`GameStore`]: get / create games, advance turns, heat, end games,
//!   and hand out per-channel [`ChannelLease`]s
//! - [`Room`], [`Game`], [`DeathCounter`]: the stored records
//! - [`MemoryStore`]: in-process implementation of both traits
//! - [`StoreError`]: not-found / conflict / backend failures

#![allow(async_fn_in_trait)]

mod error;
mod lease;
mod memory;
mod record;
mod repository;

pub use error::StoreError;
pub use lease::ChannelLease;
pub use memory::MemoryStore;
pub use record::{DeathCounter, Game, Room, INITIAL_HEAT_LEVEL};
pub use repository::{GameStore, RoomStore};
