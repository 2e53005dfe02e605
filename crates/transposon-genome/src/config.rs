//! Construction-time choice of genome representation.
//!
//! [`GenomeConfig`] is the builder input; [`build()`](GenomeConfig::build)
//! validates it and returns an [`AnyGenome`], a tagged choice that
//! dispatches the [`Genome`] contract to the selected representation.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use transposon_arena::ArenaConfig;
use transposon_core::{Genome, GenomeError, Interval, Marker, TeId, TeState};

use crate::array::ArrayGenome;
use crate::linked::LinkedGenome;

// ── Representation ─────────────────────────────────────────────────

/// Which backing store a genome uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Representation {
    /// Contiguous vector; see [`ArrayGenome`].
    #[default]
    Array,
    /// Linked node chain; see [`LinkedGenome`].
    Linked,
}

impl Representation {
    /// Both representations, array first.
    pub const ALL: [Representation; 2] = [Representation::Array, Representation::Linked];

    /// Canonical lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Array => "array",
            Self::Linked => "linked",
        }
    }
}

impl fmt::Display for Representation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A string did not name a known [`Representation`].
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("unknown genome representation '{input}' (expected 'array' or 'linked')")]
pub struct ParseRepresentationError {
    /// The rejected input.
    pub input: String,
}

impl FromStr for Representation {
    type Err = ParseRepresentationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "array" | "list" | "vec" => Ok(Self::Array),
            "linked" | "chain" | "linked-list" => Ok(Self::Linked),
            _ => Err(ParseRepresentationError {
                input: s.to_string(),
            }),
        }
    }
}

// ── GenomeConfig ───────────────────────────────────────────────────

/// Everything needed to construct a genome.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GenomeConfig {
    /// Backing store.
    pub representation: Representation,
    /// Number of empty positions at construction. Zero is allowed.
    pub initial_len: usize,
    /// Arena limits. Only consulted by [`Representation::Linked`].
    pub arena: ArenaConfig,
}

impl GenomeConfig {
    /// Config for `initial_len` empty positions in `representation`.
    pub fn new(representation: Representation, initial_len: usize) -> Self {
        Self {
            representation,
            initial_len,
            arena: ArenaConfig::with_capacity(initial_len),
        }
    }

    /// Check structural invariants without building anything.
    pub fn validate(&self) -> Result<(), GenomeError> {
        if self.representation == Representation::Linked {
            self.arena
                .validate()
                .map_err(|e| GenomeError::InvalidConfig {
                    reason: e.to_string(),
                })?;
            if self.initial_len > self.arena.max_nodes as usize {
                return Err(GenomeError::InvalidConfig {
                    reason: format!(
                        "initial_len {} exceeds arena max_nodes {}",
                        self.initial_len, self.arena.max_nodes
                    ),
                });
            }
        }
        Ok(())
    }

    /// Validate and construct the configured genome.
    pub fn build(&self) -> Result<AnyGenome, GenomeError> {
        self.validate()?;
        Ok(match self.representation {
            Representation::Array => AnyGenome::Array(ArrayGenome::new(self.initial_len)),
            Representation::Linked => {
                AnyGenome::Linked(LinkedGenome::with_config(self.initial_len, &self.arena)?)
            }
        })
    }
}

// ── AnyGenome ──────────────────────────────────────────────────────

/// A genome of either representation.
///
/// # Examples
///
/// ```
/// use transposon_genome::{Genome, GenomeConfig, Representation};
///
/// for repr in Representation::ALL {
///     let mut g = GenomeConfig::new(repr, 10).build().unwrap();
///     let id1 = g.insert_te(3, 2).unwrap();
///     g.insert_te(4, 1).unwrap();
///     assert_eq!(g.render(), "---xAx-------");
///     assert!(!g.active_tes().contains(&id1));
/// }
/// ```
#[derive(Clone, Debug)]
pub enum AnyGenome {
    /// Array-backed.
    Array(ArrayGenome),
    /// Linked-chain.
    Linked(LinkedGenome),
}

impl AnyGenome {
    /// Which representation this genome uses.
    pub fn representation(&self) -> Representation {
        match self {
            Self::Array(_) => Representation::Array,
            Self::Linked(_) => Representation::Linked,
        }
    }

    fn inner(&self) -> &dyn Genome {
        match self {
            Self::Array(g) => g,
            Self::Linked(g) => g,
        }
    }

    fn inner_mut(&mut self) -> &mut dyn Genome {
        match self {
            Self::Array(g) => g,
            Self::Linked(g) => g,
        }
    }
}

impl Genome for AnyGenome {
    fn insert_te(&mut self, pos: i64, length: usize) -> Result<TeId, GenomeError> {
        self.inner_mut().insert_te(pos, length)
    }

    fn copy_te(&mut self, te: TeId, offset: i64) -> Option<TeId> {
        self.inner_mut().copy_te(te, offset)
    }

    fn disable_te(&mut self, te: TeId) {
        self.inner_mut().disable_te(te)
    }

    fn active_tes(&self) -> Vec<TeId> {
        self.inner().active_tes()
    }

    fn len(&self) -> usize {
        self.inner().len()
    }

    fn te_interval(&self, te: TeId) -> Option<Interval> {
        self.inner().te_interval(te)
    }

    fn te_state(&self, te: TeId) -> Option<TeState> {
        self.inner().te_state(te)
    }

    fn markers(&self) -> Vec<Marker> {
        self.inner().markers()
    }

    fn render(&self) -> String {
        self.inner().render()
    }
}

impl fmt::Display for AnyGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
