//! Array-backed genome: one contiguous `Vec<Marker>`.
//!
//! Random access is O(1), so reaching an insertion point is free; the
//! cost of an insertion is the splice, which moves every marker after
//! the insertion point.

use std::fmt;

use log::{debug, trace};
use transposon_core::{
    wrap_offset, wrap_position, Genome, GenomeError, Interval, Marker, TeId, TeState,
};

use crate::check_growth;
use crate::registry::TeRegistry;

/// A circular genome stored as a contiguous marker vector.
///
/// Complexity, with `n` genome length, `m` element length and `k` active
/// elements:
///
/// | Operation | Cost |
/// |-----------|------|
/// | `insert_te`, `copy_te` | O(k + n + m) |
/// | `disable_te` | O(k + m) |
/// | `active_tes` | O(k) |
/// | `render` | O(n) |
/// | `len` | O(1) |
///
/// # Examples
///
/// ```
/// use transposon_genome::{ArrayGenome, Genome};
///
/// let mut g = ArrayGenome::new(10);
/// let id = g.insert_te(3, 2).unwrap();
/// assert_eq!(g.render(), "---AA-------");
/// assert_eq!(g.active_tes(), vec![id]);
/// ```
#[derive(Clone, Debug)]
pub struct ArrayGenome {
    markers: Vec<Marker>,
    registry: TeRegistry,
}

impl ArrayGenome {
    /// Create a genome of `n` empty positions.
    pub fn new(n: usize) -> Self {
        Self {
            markers: vec![Marker::Empty; n],
            registry: TeRegistry::new(),
        }
    }

    /// The element registry backing this genome.
    pub fn registry(&self) -> &TeRegistry {
        &self.registry
    }

    /// Marker at `pos`, if in range.
    pub fn marker_at(&self, pos: usize) -> Option<Marker> {
        self.markers.get(pos).copied()
    }

    fn overwrite_disabled(&mut self, footprint: Interval) {
        if let Some(run) = self.markers.get_mut(footprint.start..footprint.end) {
            run.fill(Marker::Disabled);
        }
    }

    /// Insert at an already-normalized position.
    fn insert_at(&mut self, pos: usize, length: usize) -> Result<TeId, GenomeError> {
        let len = self.markers.len();
        check_growth(len, length)?;
        // Reserve before touching the registry so a failed allocation
        // leaves the genome unchanged.
        self.markers
            .try_reserve(length)
            .map_err(|_| GenomeError::StorageExhausted {
                requested: len.saturating_add(length),
                capacity: isize::MAX as usize / std::mem::size_of::<Marker>().max(1),
            })?;
        for footprint in self.registry.prepare_insertion(pos, length) {
            self.overwrite_disabled(footprint);
        }
        let id = self.registry.register(Interval::at(pos, length));
        self.markers
            .splice(pos..pos, std::iter::repeat_n(Marker::Active, length));
        trace!("array genome: TE {id} inserted at {pos} (len {length})");
        Ok(id)
    }
}

impl Genome for ArrayGenome {
    fn insert_te(&mut self, pos: i64, length: usize) -> Result<TeId, GenomeError> {
        let pos = wrap_position(pos, self.markers.len());
        self.insert_at(pos, length)
    }

    fn copy_te(&mut self, te: TeId, offset: i64) -> Option<TeId> {
        let Some(source) = self.registry.active_interval(te) else {
            debug!("array genome: copy of inactive TE {te} skipped");
            return None;
        };
        let pos = wrap_offset(source.start, offset, self.markers.len());
        match self.insert_at(pos, source.len()) {
            Ok(id) => Some(id),
            Err(e) => {
                debug!("array genome: copy of TE {te} failed: {e}");
                None
            }
        }
    }

    fn disable_te(&mut self, te: TeId) {
        if let Some(footprint) = self.registry.disable(te) {
            self.overwrite_disabled(footprint);
            trace!("array genome: TE {te} disabled over {footprint}");
        }
    }

    fn active_tes(&self) -> Vec<TeId> {
        self.registry.active_ids()
    }

    fn len(&self) -> usize {
        self.markers.len()
    }

    fn te_interval(&self, te: TeId) -> Option<Interval> {
        self.registry.active_interval(te)
    }

    fn te_state(&self, te: TeId) -> Option<TeState> {
        self.registry.state(te)
    }

    fn markers(&self) -> Vec<Marker> {
        self.markers.clone()
    }

    fn render(&self) -> String {
        self.markers.iter().map(|m| m.symbol()).collect()
    }
}

impl fmt::Display for ArrayGenome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
