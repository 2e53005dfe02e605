//! Simulation configuration, validation, and error types.

use thiserror::Error;
use transposon_genome::{GenomeConfig, GenomeError, Representation};

/// Errors detected during [`SimConfig::validate()`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// `steps` is zero.
    #[error("steps must be at least 1")]
    ZeroSteps,
    /// `max_te_len` is zero; every element needs at least one position.
    #[error("max_te_len must be at least 1")]
    ZeroTeLength,
    /// Every operation weight is zero.
    #[error("at least one of insert_weight, copy_weight, disable_weight must be non-zero")]
    NoOperations,
    /// `max_offset` is negative.
    #[error("max_offset must be non-negative, got {value}")]
    NegativeOffset {
        /// The invalid value.
        value: i64,
    },
    /// The genome could not be built.
    #[error("genome: {0}")]
    Genome(#[from] GenomeError),
}

/// Parameters for one simulation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SimConfig {
    /// Backing store for the genome. Default: array.
    pub representation: Representation,
    /// Empty positions at the start of the run. Default: 1000.
    pub initial_len: usize,
    /// Operations issued by [`Simulation::run`](crate::Simulation::run). Default: 10_000.
    pub steps: usize,
    /// RNG seed. Default: 42.
    pub seed: u64,
    /// Fresh insertions draw their length from `1..=max_te_len`. Default: 10.
    pub max_te_len: usize,
    /// Relative frequency of fresh insertions. Default: 1.
    pub insert_weight: u32,
    /// Relative frequency of copies. Default: 2.
    pub copy_weight: u32,
    /// Relative frequency of explicit disables. Default: 1.
    pub disable_weight: u32,
    /// Copy offsets are drawn from `-max_offset..=max_offset`. Default: 100.
    pub max_offset: i64,
}

impl SimConfig {
    /// Default genome length.
    pub const DEFAULT_INITIAL_LEN: usize = 1000;
    /// Default number of steps.
    pub const DEFAULT_STEPS: usize = 10_000;
    /// Default RNG seed.
    pub const DEFAULT_SEED: u64 = 42;
    /// Default maximum length of a fresh insertion.
    pub const DEFAULT_MAX_TE_LEN: usize = 10;
    /// Default copy offset bound.
    pub const DEFAULT_MAX_OFFSET: i64 = 100;

    /// Check all parameter ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.steps == 0 {
            return Err(ConfigError::ZeroSteps);
        }
        if self.max_te_len == 0 {
            return Err(ConfigError::ZeroTeLength);
        }
        if self.total_weight() == 0 {
            return Err(ConfigError::NoOperations);
        }
        if self.max_offset < 0 {
            return Err(ConfigError::NegativeOffset {
                value: self.max_offset,
            });
        }
        self.genome_config().validate()?;
        Ok(())
    }

    /// The genome this config describes.
    pub fn genome_config(&self) -> GenomeConfig {
        GenomeConfig::new(self.representation, self.initial_len)
    }

    /// Sum of the operation weights, widened so it cannot overflow.
    pub fn total_weight(&self) -> u64 {
        u64::from(self.insert_weight) + u64::from(self.copy_weight) + u64::from(self.disable_weight)
    }
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            representation: Representation::default(),
            initial_len: Self::DEFAULT_INITIAL_LEN,
            steps: Self::DEFAULT_STEPS,
            seed: Self::DEFAULT_SEED,
            max_te_len: Self::DEFAULT_MAX_TE_LEN,
            insert_weight: 1,
            copy_weight: 2,
            disable_weight: 1,
            max_offset: Self::DEFAULT_MAX_OFFSET,
        }
    }
}
