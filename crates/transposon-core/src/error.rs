//! Error types for genome operations.
//!
//! Unknown or disabled element IDs are deliberately absent here: the
//! genome contract resolves them locally as no-ops (`disable_te`) or the
//! `None` sentinel (`copy_te`). What remains are the inputs that cannot
//! be given a meaning at all.

use thiserror::Error;

/// Errors surfaced by [`Genome`](crate::Genome) mutations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum GenomeError {
    /// An insertion of length zero was requested. Every element must
    /// cover at least one position.
    #[error("transposable element length must be at least 1")]
    ZeroLengthElement,
    /// The insertion would grow the genome beyond the addressable range.
    #[error("genome of length {len} cannot grow by {length} positions")]
    LengthOverflow {
        /// Genome length before the insertion.
        len: usize,
        /// Requested element length.
        length: usize,
    },
    /// The backing store refused to grow.
    #[error("backing store exhausted: requested {requested} positions, capacity {capacity}")]
    StorageExhausted {
        /// Total positions the insertion would need.
        requested: usize,
        /// Positions the store can hold.
        capacity: usize,
    },
    /// A genome could not be built from the given configuration.
    #[error("invalid genome config: {reason}")]
    InvalidConfig {
        /// Which constraint was violated.
        reason: String,
    },
}
