//! Arena-specific error types.

use thiserror::Error;

/// Errors that can occur during arena operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ArenaError {
    /// The arena already holds `max_nodes` nodes.
    #[error("arena capacity exceeded: requested {requested} nodes, capacity {capacity} nodes")]
    CapacityExceeded {
        /// Total node count the operation would need.
        requested: usize,
        /// Maximum node count (sentinel excluded).
        capacity: usize,
    },
    /// An [`ArenaConfig`](crate::ArenaConfig) value is out of range.
    #[error("invalid arena config: {reason}")]
    InvalidConfig {
        /// Which constraint was violated.
        reason: String,
    },
}
