//! Error types for the engine.

use hotpotato_protocol::{ProtocolError, UserId};
use hotpotato_store::StoreError;

/// Errors returned by engine operations.
///
/// The first four variants are rule violations a front-end should explain
/// to the player. `InvalidPotatoKind` and `Store` are internal failures:
/// show a generic "try again later" and log the detail.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A required request field was missing. Nothing was read or written.
    #[error("invalid request: {0}")]
    InvalidRequest(#[from] ProtocolError),

    /// The channel has no unfinished game.
    #[error("no ongoing game found")]
    NoOngoingGame,

    /// A player tried to steal the potato from themselves.
    #[error("cannot steal potato from self")]
    SelfSteal,

    /// The actor (toss, cook) or target (steal) doesn't hold the potato.
    /// Carries the actual holder so the caller can say who does.
    #[error("user does not currently hold the potato; {holder} does")]
    NotHolder { holder: UserId },

    /// A stored game names a potato kind missing from the catalog.
    #[error("error getting potato of kind '{0}'")]
    InvalidPotatoKind(String),

    /// The store failed while performing `op`.
    #[error("error {op}: {source}")]
    Store {
        op: &'static str,
        #[source]
        source: StoreError,
    },
}

impl EngineError {
    /// Returns `true` for failures the player can't do anything about.
    pub fn is_internal(&self) -> bool {
        matches!(self, Self::InvalidPotatoKind(_) | Self::Store { .. })
    }

    /// Adapter for `map_err`: wraps a store error with the operation name.
    pub(crate) fn store(op: &'static str) -> impl FnOnce(StoreError) -> Self {
        move |source| Self::Store { op, source }
    }
}
