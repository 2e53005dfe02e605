//! Simulation driver for transposon genomes.
//!
//! Issues a seeded pseudo-random stream of insert / copy / disable
//! operations against a genome chosen at construction time, and tallies
//! what happened:
//!
//! - [`SimConfig`]: run parameters with defaults and validation
//! - [`Simulation`]: the driver loop over any [`Genome`]
//! - [`SimReport`]: end-of-run counters
//! - [`cli`]: argument parsing for the `transposon-sim` binary
//!
//! Identical seeds produce identical operation streams, so the two
//! representations can be run side by side and compared.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod report;
pub mod simulation;

pub use config::{ConfigError, SimConfig};
pub use report::SimReport;
pub use simulation::{Operation, Outcome, Simulation};
pub use transposon_core::Genome;
