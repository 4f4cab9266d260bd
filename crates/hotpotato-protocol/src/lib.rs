//! Shared vocabulary for Hot Potato.
//!
//! This crate defines the types every other layer speaks:
//!
//! - **Identity** ([`Namespace`], [`RoomId`], [`ChannelId`], [`UserId`],
//!   [`RoomKey`], [`ChannelKey`]): who and where a request is about.
//! - **Potatoes** ([`Potato`]): the fixed catalog of potato variants.
//! - **Requests / responses** ([`TossRequest`], [`TossResponse`], etc.):
//!   one pair per user-facing command, with [`Validate`] for the required
//!   field checks.
//! - **Errors** ([`ProtocolError`]): what can be wrong with a request
//!   before any store is touched.
//!
//! # Architecture
//!
//! ```text
//! Front-end (chat, console) → Protocol (requests) → Engine → Store
//! ```

// ---------------------------------------------------------------------------
// Module declarations
// ---------------------------------------------------------------------------

mod error;
mod potato;
mod request;
mod response;
mod types;

// ---------------------------------------------------------------------------
// Re-exports
// ---------------------------------------------------------------------------

pub use error::ProtocolError;
pub use potato::Potato;
pub use request::{
    CookRequest, GetHolderRequest, GetLeaderboardRequest, StealRequest,
    TossRequest, Validate,
};
pub use response::{
    CookResponse, GetHolderResponse, GetLeaderboardResponse, StealResponse,
    TossResponse, UserDeaths,
};
pub use types::{ChannelId, ChannelKey, Namespace, RoomId, RoomKey, UserId};
