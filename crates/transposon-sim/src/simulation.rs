//! The driver loop.
//!
//! Each step draws one [`Operation`] from a `ChaCha8Rng` seeded with
//! [`SimConfig::seed`], applies it to the genome, and records the
//! [`Outcome`]. The operation stream depends only on the seed and on the
//! genome's observable state, so both representations see the same
//! stream for the same seed.

use log::{info, trace};
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use transposon_core::{Genome, GenomeError, TeId};
use transposon_genome::AnyGenome;

use crate::config::{ConfigError, SimConfig};
use crate::report::SimReport;

/// One driver action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    /// Fresh insertion.
    Insert {
        /// Insertion position (normalized by the genome).
        pos: i64,
        /// Element length.
        length: usize,
    },
    /// Copy of an existing element.
    Copy {
        /// Source element.
        te: TeId,
        /// Signed displacement from the source's start.
        offset: i64,
    },
    /// Explicit disable.
    Disable {
        /// Target element.
        te: TeId,
    },
}

/// Result of applying one [`Operation`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A fresh element was inserted.
    Inserted(TeId),
    /// `source` was copied to the new element `copy`.
    Copied {
        /// Element that was copied.
        source: TeId,
        /// Newly issued element.
        copy: TeId,
    },
    /// The copy source was unknown or disabled.
    CopySkipped(TeId),
    /// A disable was issued (possibly a no-op).
    Disabled(TeId),
    /// The genome refused the insertion.
    Rejected(GenomeError),
}

/// Runs a pseudo-random operation stream against a genome.
///
/// # Examples
///
/// ```
/// use transposon_sim::{SimConfig, Simulation};
///
/// let config = SimConfig { initial_len: 50, steps: 200, ..SimConfig::default() };
/// let mut sim = Simulation::new(config).unwrap();
/// let report = sim.run();
/// assert_eq!(report.steps, 200);
/// assert!(report.final_len >= 50);
/// ```
pub struct Simulation<G: Genome = AnyGenome> {
    genome: G,
    config: SimConfig,
    rng: ChaCha8Rng,
    report: SimReport,
}

impl Simulation<AnyGenome> {
    /// Validate `config` and build the genome it describes.
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        let genome = config.genome_config().build()?;
        Self::with_genome(config, genome)
    }
}

impl<G: Genome> Simulation<G> {
    /// Drive an existing genome with the stream described by `config`.
    ///
    /// `config.representation` and `config.initial_len` are only used for
    /// reporting; the genome is taken as is.
    pub fn with_genome(config: SimConfig, genome: G) -> Result<Self, ConfigError> {
        config.validate()?;
        let report = SimReport {
            representation: config.representation,
            final_len: genome.len(),
            active: genome.active_tes().len(),
            ..SimReport::default()
        };
        Ok(Self {
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            genome,
            config,
            report,
        })
    }

    /// The genome being driven.
    pub fn genome(&self) -> &G {
        &self.genome
    }

    /// The run parameters.
    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Counters so far.
    pub fn report(&self) -> &SimReport {
        &self.report
    }

    /// Consume the driver, returning the genome.
    pub fn into_genome(self) -> G {
        self.genome
    }

    /// Draw the next operation without applying it.
    pub fn next_operation(&mut self) -> Operation {
        let total = self.config.total_weight();
        let roll = self.rng.random_range(0..total);
        let insert = u64::from(self.config.insert_weight);
        let copy = insert + u64::from(self.config.copy_weight);

        if roll < insert {
            let len = self.genome.len().max(1) as u64;
            let pos = self.rng.random_range(0..len) as i64;
            let length = self.rng.random_range(1..=self.config.max_te_len);
            Operation::Insert { pos, length }
        } else if roll < copy {
            let te = self.pick_target();
            let bound = self.config.max_offset;
            let offset = self.rng.random_range(-bound..=bound);
            Operation::Copy { te, offset }
        } else {
            Operation::Disable {
                te: self.pick_target(),
            }
        }
    }

    /// A uniformly chosen active element, or an ID that is never issued
    /// when none are active.
    fn pick_target(&mut self) -> TeId {
        let active = self.genome.active_tes();
        if active.is_empty() {
            return TeId(0);
        }
        active[self.rng.random_range(0..active.len())]
    }

    /// Apply `op` to the genome and record the outcome.
    pub fn apply(&mut self, op: Operation) -> Outcome {
        let outcome = match op {
            Operation::Insert { pos, length } => match self.genome.insert_te(pos, length) {
                Ok(id) => {
                    self.report.inserted += 1;
                    Outcome::Inserted(id)
                }
                Err(e) => {
                    self.report.rejected += 1;
                    Outcome::Rejected(e)
                }
            },
            Operation::Copy { te, offset } => match self.genome.copy_te(te, offset) {
                Some(copy) => {
                    self.report.copied += 1;
                    Outcome::Copied { source: te, copy }
                }
                None => {
                    self.report.copy_skipped += 1;
                    Outcome::CopySkipped(te)
                }
            },
            Operation::Disable { te } => {
                self.genome.disable_te(te);
                self.report.disabled += 1;
                Outcome::Disabled(te)
            }
        };
        self.report.steps += 1;
        self.report.final_len = self.genome.len();
        self.report.active = self.genome.active_tes().len();
        trace!("step {}: {op:?} -> {outcome:?}", self.report.steps);
        outcome
    }

    /// Draw and apply one operation.
    pub fn step(&mut self) -> Outcome {
        let op = self.next_operation();
        self.apply(op)
    }

    /// Run until `config.steps` operations have been issued.
    pub fn run(&mut self) -> SimReport {
        info!(
            "simulation start: {} genome, len {}, {} steps, seed {}",
            self.config.representation,
            self.genome.len(),
            self.config.steps,
            self.config.seed
        );
        while self.report.steps < self.config.steps {
            self.step();
        }
        info!(
            "simulation done: len {}, {} active TEs",
            self.report.final_len, self.report.active
        );
        self.report.clone()
    }
}
