//! Core types and traits for transposon simulations.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the vocabulary shared by every genome representation: element IDs,
//! markers, coordinate intervals, error types, and the [`Genome`]
//! contract that the simulation driver programs against.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod id;
pub mod interval;
pub mod marker;
pub mod traits;

pub use error::GenomeError;
pub use id::TeId;
pub use interval::{wrap_offset, wrap_position, Interval};
pub use marker::Marker;
pub use traits::{Genome, TeRecord, TeState};
