//! Index-addressed node arena for circular doubly-linked chains.
//!
//! Linked representations need stable node identity, O(1) local splicing
//! and circular adjacency. Holding raw references for that would give
//! every node two owners, so nodes live in a single `Vec` owned by the
//! arena and link to each other through [`NodeHandle`] indices.
//!
//! # Architecture
//!
//! ```text
//! ChainArena<T>
//! ├── slot 0: sentinel head (never yielded by iteration)
//! └── slot 1..: Node { value, prev, next } (bump-allocated, never freed)
//! ```
//!
//! The chain is circular through the sentinel: an empty arena is a
//! sentinel linked to itself.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod chain;
pub mod config;
pub mod error;
pub mod handle;

pub use chain::{ChainArena, ChainIter};
pub use config::ArenaConfig;
pub use error::ArenaError;
pub use handle::NodeHandle;
