//! Linked-chain genome: a circular doubly-linked chain of single-marker
//! nodes.
//!
//! Splicing is O(1) per node, but there is no random access: reaching
//! position `p` walks the chain from the sentinel head. Nodes live in a
//! [`ChainArena`] and link through stable handles.

use std::fmt;

use log::{debug, trace};
use transposon_arena::{ArenaConfig, ArenaError, ChainArena, NodeHandle};
use transposon_core::{
    wrap_offset, wrap_position, Genome, GenomeError, Interval, Marker, TeId, TeState,
};

use crate::check_growth;
use crate::registry::TeRegistry;

/// A circular genome stored as a linked chain of markers.
///
/// Complexity, with `n` genome length, `m` element length and `k` active
/// elements:
///
/// | Operation | Cost |
/// |-----------|------|
/// | `insert_te`, `copy_te` | O(k + n + m) |
/// | `disable_te` | O(k + n + m) |
/// | `active_tes` | O(k) |
/// | `render` | O(n) |
/// | `len` | O(1) |
///
/// # Examples
///
/// ```
/// use transposon_genome::{Genome, LinkedGenome};
///
/// let mut g = LinkedGenome::new(5).unwrap();
/// let id = g.insert_te(0, 5).unwrap();
/// let copy = g.copy_te(id, -2).unwrap();
/// assert_eq!(g.render(), "AAAAA---AAAAA--");
/// assert_eq!(g.active_tes(), vec![id, copy]);
/// ```
#[derive(Clone, Debug)]
pub struct LinkedGenome {
    chain: ChainArena<Marker>,
    registry: TeRegistry,
}

impl LinkedGenome {
    /// Create a genome of `n` empty positions with the default arena config.
    pub fn new(n: usize) -> Result<Self, GenomeError> {
        Self::with_config(n, &ArenaConfig::with_capacity(n))
    }

    /// Create a genome of `n` empty positions in an arena built from `config`.
    pub fn with_config(n: usize, config: &ArenaConfig) -> Result<Self, GenomeError> {
        let mut chain = ChainArena::new(Marker::Empty, config).map_err(storage_error)?;
        chain.reserve(n).map_err(storage_error)?;
        for _ in 0..n {
            chain.push_back(Marker::Empty).map_err(storage_error)?;
        }
        Ok(Self {
            chain,
            registry: TeRegistry::new(),
        })
    }

    /// The element registry backing this genome.
    pub fn registry(&self) -> &TeRegistry {
        &self.registry
    }

    /// Marker at `pos`, if in range. Walks the chain.
    pub fn marker_at(&self, pos: usize) -> Option<Marker> {
        if pos >= self.chain.len() {
            return None;
        }
        self.chain.get(self.chain.seek(pos + 1)).copied()
    }

    fn overwrite_disabled(&mut self, footprint: Interval) {
        let mut cursor = self.chain.seek(footprint.start + 1);
        for _ in 0..footprint.len() {
            if cursor.is_head() {
                break;
            }
            if let Some(marker) = self.chain.get_mut(cursor) {
                *marker = Marker::Disabled;
            }
            cursor = self.chain.next(cursor);
        }
    }

    /// Insert at an already-normalized position.
    fn insert_at(&mut self, pos: usize, length: usize) -> Result<TeId, GenomeError> {
        check_growth(self.chain.len(), length)?;
        // Reserve before touching the registry so a full arena leaves the
        // genome unchanged.
        self.chain.reserve(length).map_err(storage_error)?;
        for footprint in self.registry.prepare_insertion(pos, length) {
            self.overwrite_disabled(footprint);
        }
        let id = self.registry.register(Interval::at(pos, length));

        let mut cursor: NodeHandle = self.chain.seek(pos);
        for _ in 0..length {
            cursor = self
                .chain
                .insert_after(cursor, Marker::Active)
                .map_err(storage_error)?;
        }
        trace!("linked genome: TE {id} inserted at {pos} (len {length})");
        Ok(id)
    }
}

/// Map arena failures onto the genome error surface.
fn storage_error(e: ArenaError) -> GenomeError {
    match e {
        ArenaError::CapacityExceeded {
            requested,
            capacity,
        } => GenomeError::StorageExhausted {
            requested,
            capacity,
        },
        ArenaError::InvalidConfig { reason } => GenomeError::InvalidConfig { reason },
    }
}

impl Genome for LinkedGenome {
    fn insert_te(&mut self, pos: i64, length: usize) -> Result<TeId, GenomeError> {
        let pos = wrap_position(pos, self.chain.len());
        self.insert_at(pos, length)
    }

    fn copy_te(&mut self, te: TeId, offset: i64) -> Option<TeId> {
        let Some(source) = self.registry.active_interval(te) else {
            debug!("linked genome: copy of inactive TE {te} skipped");
            return None;
        };
        // Offsets that land before index 0 wrap to `len + start + offset`.
        let pos = wrap_offset(source.start, offset, self.chain.len());
        match self.insert_at(pos, source.len()) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!("linked genome: copy of TE {te} failed: {e}");
                None
            }
        }
    }

    fn disable_te(&mut self, te: TeId) {
        if let Some(footprint) = self.registry.disable(te) {
            self.overwrite_disabled(footprint);
            trace!("linked genome: TE {te} disabled over {footprint}");
        }
    }

    fn active_tes(&self) -> Vec<TeId> {
        self.registry.active_ids()
    }

    fn len(&self) -> usize {
        self.chain.len()
    }

    fn te_interval(&self, te: TeId) -> Option<Interval> {
        self.registry.active_interval(te)
    }

    fn te_state(&self, te: TeId) -> Option<TeState> {
        self.registry.state(te)
    }

    fn markers(&self) -> Vec<Marker> {
        self.chain.iter().map(|(_, m)| *m).collect()
    }

    fn render(&self) -> String {
        self.chain.iter().map(|(_, m)| m.symbol()).collect()
    }
}

impl fmt::Display for LinkedGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
