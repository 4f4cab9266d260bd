//! Error types for the protocol layer.
//!
//! These are raised before the engine touches any store: a request that
//! fails here never causes a read or a write.

/// Errors that can occur while checking a request or parsing a value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProtocolError {
    /// A required field was empty.
    ///
    /// The inner value names the field, e.g. `"namespace"` or
    /// `"target user ID"`.
    #[error("missing {0}")]
    MissingField(&'static str),

    /// A persisted potato kind doesn't match any catalog entry.
    #[error("unrecognised potato kind '{0}'")]
    InvalidPotatoKind(String),
}
