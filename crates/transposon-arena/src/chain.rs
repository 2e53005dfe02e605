//! Circular doubly-linked chain stored in an index arena.
//!
//! [`ChainArena`] owns every node in one `Vec`. Links are [`NodeHandle`]
//! indices, so splicing is a handful of index writes and there is no
//! shared ownership to untangle. Nodes are bump-allocated and never
//! freed, which keeps every handle valid for the arena's lifetime.

use crate::config::ArenaConfig;
use crate::error::ArenaError;
use crate::handle::NodeHandle;

#[derive(Clone, Debug)]
struct Node<T> {
    value: T,
    prev: NodeHandle,
    next: NodeHandle,
}

/// A circular doubly-linked chain of values with a sentinel head.
///
/// Position `i` of the chain is reached by walking `i + 1` links forward
/// from [`NodeHandle::HEAD`]; there is no random access.
///
/// # Examples
///
/// ```
/// use transposon_arena::{ArenaConfig, ChainArena, NodeHandle};
///
/// let mut chain = ChainArena::new('#', &ArenaConfig::default()).unwrap();
/// for c in "ace".chars() {
///     chain.push_back(c).unwrap();
/// }
/// let a = chain.next(NodeHandle::HEAD);
/// chain.insert_after(a, 'b').unwrap();
///
/// let s: String = chain.iter().map(|(_, c)| *c).collect();
/// assert_eq!(s, "abce");
/// assert_eq!(chain.len(), 4);
/// ```
#[derive(Clone, Debug)]
pub struct ChainArena<T> {
    /// Slot 0 is the sentinel; slots 1.. are chain nodes in allocation order.
    nodes: Vec<Node<T>>,
    max_nodes: u32,
}

impl<T> ChainArena<T> {
    /// Create an empty chain whose sentinel holds `sentinel`.
    ///
    /// The sentinel value is never yielded by [`iter`](Self::iter); it only
    /// exists so that the head slot is a real node.
    pub fn new(sentinel: T, config: &ArenaConfig) -> Result<Self, ArenaError> {
        config.validate()?;
        let mut nodes = Vec::with_capacity(config.initial_capacity + 1);
        nodes.push(Node {
            value: sentinel,
            prev: NodeHandle::HEAD,
            next: NodeHandle::HEAD,
        });
        Ok(Self {
            nodes,
            max_nodes: config.max_nodes,
        })
    }

    /// Number of chain nodes, sentinel excluded.
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the chain holds only the sentinel.
    pub fn is_empty(&self) -> bool {
        self.nodes.len() == 1
    }

    /// Maximum number of chain nodes.
    pub fn capacity(&self) -> usize {
        self.max_nodes as usize
    }

    /// Check that `additional` more nodes fit, and reserve room for them.
    ///
    /// Callers that splice several nodes in one logical operation should
    /// call this first so the operation cannot fail halfway.
    pub fn reserve(&mut self, additional: usize) -> Result<(), ArenaError> {
        let capacity = self.capacity();
        let requested = self
            .len()
            .checked_add(additional)
            .ok_or(ArenaError::CapacityExceeded {
                requested: usize::MAX,
                capacity,
            })?;
        if requested > capacity {
            return Err(ArenaError::CapacityExceeded {
                requested,
                capacity,
            });
        }
        self.nodes.reserve(additional);
        Ok(())
    }

    /// Splice a new node holding `value` directly after `at`.
    ///
    /// # Panics
    ///
    /// Panics if `at` was not issued by this arena.
    pub fn insert_after(&mut self, at: NodeHandle, value: T) -> Result<NodeHandle, ArenaError> {
        self.reserve(1)?;
        // len < max_nodes <= u32::MAX - 1, so the new slot index fits.
        let handle = NodeHandle(self.nodes.len() as u32);
        let next = self.nodes[at.index()].next;
        self.nodes.push(Node {
            value,
            prev: at,
            next,
        });
        self.nodes[at.index()].next = handle;
        self.nodes[next.index()].prev = handle;
        Ok(handle)
    }

    /// Append a node at the end of the chain (just before the sentinel).
    pub fn push_back(&mut self, value: T) -> Result<NodeHandle, ArenaError> {
        let last = self.prev(NodeHandle::HEAD);
        self.insert_after(last, value)
    }

    /// The node after `h`. The last node's successor is the sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `h` was not issued by this arena.
    pub fn next(&self, h: NodeHandle) -> NodeHandle {
        self.nodes[h.index()].next
    }

    /// The node before `h`. The first node's predecessor is the sentinel.
    ///
    /// # Panics
    ///
    /// Panics if `h` was not issued by this arena.
    pub fn prev(&self, h: NodeHandle) -> NodeHandle {
        self.nodes[h.index()].prev
    }

    /// Shared access to a node's value.
    pub fn get(&self, h: NodeHandle) -> Option<&T> {
        self.nodes.get(h.index()).map(|n| &n.value)
    }

    /// Mutable access to a node's value.
    pub fn get_mut(&mut self, h: NodeHandle) -> Option<&mut T> {
        self.nodes.get_mut(h.index()).map(|n| &mut n.value)
    }

    /// The node reached by walking `steps` links forward from the sentinel.
    ///
    /// `seek(0)` is the sentinel itself and `seek(i + 1)` is chain position
    /// `i`, so `seek(p)` is the node an insertion at position `p` splices
    /// after. The walk goes backward instead when that is shorter; either
    /// way it is O(len) worst case. `steps` wraps modulo `len + 1`.
    pub fn seek(&self, steps: usize) -> NodeHandle {
        let cycle = self.nodes.len();
        let forward = steps % cycle;
        let backward = cycle - forward;
        let mut cursor = NodeHandle::HEAD;
        if forward <= backward {
            for _ in 0..forward {
                cursor = self.next(cursor);
            }
        } else {
            for _ in 0..backward {
                cursor = self.prev(cursor);
            }
        }
        cursor
    }

    /// Iterate chain nodes in link order, starting after the sentinel.
    pub fn iter(&self) -> ChainIter<'_, T> {
        ChainIter {
            arena: self,
            cursor: self.next(NodeHandle::HEAD),
            remaining: self.len(),
        }
    }
}

/// Link-order iterator over a [`ChainArena`], yielding `(handle, &value)`.
pub struct ChainIter<'a, T> {
    arena: &'a ChainArena<T>,
    cursor: NodeHandle,
    remaining: usize,
}

impl<'a, T> Iterator for ChainIter<'a, T> {
    type Item = (NodeHandle, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let handle = self.cursor;
        let node = &self.arena.nodes[handle.index()];
        self.cursor = node.next;
        self.remaining -= 1;
        Some((handle, &node.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for ChainIter<'_, T> {}
