//! Stable node handles.

use std::fmt;

/// Index of a node within a [`ChainArena`](crate::ChainArena).
///
/// Handles are handed out by the arena and stay valid for its whole
/// lifetime: nodes are never freed or moved. A handle is meaningless in
/// any arena other than the one that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeHandle(pub(crate) u32);

impl NodeHandle {
    /// The sentinel head present in every arena.
    pub const HEAD: NodeHandle = NodeHandle(0);

    /// Slot index into the arena's node vector.
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the sentinel head.
    pub fn is_head(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Display for NodeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NodeHandle({})", self.0)
    }
}
