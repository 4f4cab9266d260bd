//! Per-channel serialization leases.

use std::any::Any;
use std::fmt;

/// Exclusive access to one channel's game, held until dropped.
///
/// The store decides what backs a lease: the in-memory store hands out an
/// owned mutex guard; a SQL store would hold an open transaction with the
/// game row locked. The engine only keeps it alive for the duration of a
/// call and never looks inside.
pub struct ChannelLease {
    _guard: Box<dyn Any + Send + Sync>,
}

impl ChannelLease {
    /// Wraps whatever keeps the channel locked.
    pub fn new<T: Any + Send + Sync>(guard: T) -> Self {
        Self {
            _guard: Box::new(guard),
        }
    }
}

impl fmt::Debug for ChannelLease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChannelLease").finish_non_exhaustive()
    }
}
