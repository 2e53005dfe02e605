//! Arena configuration parameters.

use crate::error::ArenaError;

/// Configuration for a [`ChainArena`](crate::ChainArena).
///
/// Validated at construction; all values are immutable after creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ArenaConfig {
    /// Maximum number of nodes, sentinel excluded.
    ///
    /// Default: `u32::MAX - 1`, the most a `u32` handle can address once
    /// slot 0 is taken by the sentinel.
    pub max_nodes: u32,

    /// Node slots to reserve up front.
    ///
    /// Default: 0. Callers that know the initial genome length should set
    /// this to avoid reallocation while the chain is first built.
    pub initial_capacity: usize,
}

impl ArenaConfig {
    /// Default maximum node count.
    pub const DEFAULT_MAX_NODES: u32 = u32::MAX - 1;

    /// Create a config that pre-reserves room for `initial_capacity` nodes.
    pub fn with_capacity(initial_capacity: usize) -> Self {
        Self {
            max_nodes: Self::DEFAULT_MAX_NODES,
            initial_capacity,
        }
    }

    /// Check value ranges.
    pub fn validate(&self) -> Result<(), ArenaError> {
        if self.max_nodes > Self::DEFAULT_MAX_NODES {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "max_nodes {} exceeds handle limit {}",
                    self.max_nodes,
                    Self::DEFAULT_MAX_NODES
                ),
            });
        }
        if self.initial_capacity > self.max_nodes as usize {
            return Err(ArenaError::InvalidConfig {
                reason: format!(
                    "initial_capacity {} exceeds max_nodes {}",
                    self.initial_capacity, self.max_nodes
                ),
            });
        }
        Ok(())
    }
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self::with_capacity(0)
    }
}
