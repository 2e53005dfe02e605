//! Genome representations for transposon simulations.
//!
//! Two interchangeable implementations of the
//! [`Genome`](transposon_core::Genome) contract, each owning its own
//! marker storage and its own [`TeRegistry`]:
//!
//! - [`ArrayGenome`]: contiguous `Vec<Marker>`, mutated by splicing.
//! - [`LinkedGenome`]: circular doubly-linked chain of single-marker
//!   nodes in an index arena, mutated by local node splicing.
//!
//! [`GenomeConfig`] selects between them at construction time and yields
//! an [`AnyGenome`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod array;
pub mod config;
pub mod linked;
pub mod registry;

#[cfg(test)]
pub(crate) mod compliance;

pub use array::ArrayGenome;
pub use config::{AnyGenome, GenomeConfig, ParseRepresentationError, Representation};
pub use linked::LinkedGenome;
pub use registry::TeRegistry;
pub use transposon_core::{Genome, GenomeError, Interval, Marker, TeId, TeRecord, TeState};

/// Reject insertions that cannot produce a valid element.
pub(crate) fn check_growth(len: usize, length: usize) -> Result<(), GenomeError> {
    if length == 0 {
        return Err(GenomeError::ZeroLengthElement);
    }
    if len.checked_add(length).is_none() {
        return Err(GenomeError::LengthOverflow { len, length });
    }
    Ok(())
}
