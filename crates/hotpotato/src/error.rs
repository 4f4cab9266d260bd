//! Unified error type for Hot Potato.

use hotpotato_engine::EngineError;
use hotpotato_protocol::ProtocolError;
use hotpotato_store::StoreError;

/// Top-level error that wraps all crate-specific errors.
///
/// The `#[from]` attribute on each variant generates `From` impls, so the
/// `?` operator converts layer errors automatically.
#[derive(Debug, thiserror::Error)]
pub enum HotPotatoError {
    /// A request or value failed protocol checks.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// A store operation failed outside the engine.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// A game operation failed.
    #[error(transparent)]
    Engine(#[from] EngineError),

    /// Configuration or logging setup failed.
    #[error("configuration error: {0}")]
    Config(String),
}

impl HotPotatoError {
    /// Returns `true` if the player should just see "try again later".
    pub fn is_internal(&self) -> bool {
        match self {
            Self::Engine(e) => e.is_internal(),
            Self::Protocol(_) => false,
            Self::Store(_) | Self::Config(_) => true,
        }
    }
}
