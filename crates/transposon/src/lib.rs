//! Transposon: transposable element simulation on circular genomes.
//!
//! This is the facade crate that re-exports the public API of the
//! transposon sub-crates. Most users only need this one dependency.
//!
//! # Quick start
//!
//! ```rust
//! use transposon::prelude::*;
//!
//! let mut genome = GenomeConfig::new(Representation::Linked, 10).build().unwrap();
//! let te = genome.insert_te(3, 2).unwrap();
//! assert_eq!(genome.render(), "---AA-------");
//!
//! // Copying lands at a wrapped offset from the source's start.
//! let copy = genome.copy_te(te, -5).unwrap();
//! assert_eq!(genome.render(), "---AA-----AA--");
//!
//! // An insertion inside an element disables it.
//! genome.insert_te(4, 1).unwrap();
//! assert_eq!(genome.render(), "---xAx-----AA--");
//! assert_eq!(genome.te_state(te), Some(TeState::Disabled));
//! assert_eq!(genome.te_interval(copy), Some(Interval::new(11, 13)));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `transposon-core` | IDs, markers, intervals, errors, the `Genome` trait |
//! | [`arena`] | `transposon-arena` | Index arena backing the linked genome |
//! | [`genome`] | `transposon-genome` | Array and linked genomes, registry, representation selection |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Core types and the [`types::Genome`] contract (`transposon-core`).
pub use transposon_core as types;

/// Circular doubly-linked chain storage (`transposon-arena`).
///
/// [`arena::ChainArena`] backs [`genome::LinkedGenome`]; its
/// [`arena::ArenaConfig`] bounds how many markers a linked genome may hold.
pub use transposon_arena as arena;

/// Genome implementations (`transposon-genome`).
///
/// [`genome::ArrayGenome`] and [`genome::LinkedGenome`] behave
/// identically; [`genome::GenomeConfig`] picks one at construction time.
pub use transposon_genome as genome;

/// Common imports.
///
/// ```rust
/// use transposon::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use transposon_core::{Genome, GenomeError, Interval, Marker, TeId, TeRecord, TeState};

    // Representations
    pub use transposon_genome::{AnyGenome, ArrayGenome, GenomeConfig, LinkedGenome, Representation};
}
