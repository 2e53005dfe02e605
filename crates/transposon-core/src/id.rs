//! Strongly-typed transposable element identifiers.

use std::fmt;

/// Identifies a transposable element within one genome instance.
///
/// IDs are issued from a per-genome monotonic counter starting at 1 and
/// are never reused, even after the element is disabled. `TeId(0)` is
/// never issued, so it is always safe to use as a known-unknown ID.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TeId(pub u64);

impl TeId {
    /// The first ID a fresh genome hands out.
    pub const FIRST: TeId = TeId(1);

    /// The ID issued immediately after this one.
    pub fn successor(self) -> Self {
        Self(self.0 + 1)
    }
}

impl fmt::Display for TeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for TeId {
    fn from(v: u64) -> Self {
        Self(v)
    }
}
