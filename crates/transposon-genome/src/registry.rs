//! Per-genome transposable element registry.
//!
//! [`TeRegistry`] owns the ID counter and the `TeId → TeRecord` mapping
//! for one genome instance. Records are never removed: disabling flips the
//! record's state and prunes it from the active index, so lookups of
//! disabled IDs still distinguish "disabled" from "never issued".
//!
//! The active index is the only structure scanned on the hot path, which
//! keeps collision and shift passes at O(k) in the number of active
//! elements rather than in the number ever issued.

use indexmap::{IndexMap, IndexSet};
use log::debug;
use smallvec::SmallVec;
use transposon_core::{Interval, TeId, TeRecord, TeState};

/// ID issuance and coordinate bookkeeping for one genome.
///
/// Invariants maintained by the genomes that drive it:
/// - IDs come from a strictly increasing counter starting at
///   [`TeId::FIRST`] and are never reused.
/// - Active intervals are pairwise disjoint and non-empty.
/// - The active index lists active IDs in ascending order.
#[derive(Clone, Debug)]
pub struct TeRegistry {
    /// Every record ever issued, in issue order.
    records: IndexMap<TeId, TeRecord>,
    /// IDs currently active, in issue (= ascending) order.
    active: IndexSet<TeId>,
    next_id: TeId,
}

impl TeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            records: IndexMap::new(),
            active: IndexSet::new(),
            next_id: TeId::FIRST,
        }
    }

    /// Issue the next ID and record it as active over `interval`.
    pub fn register(&mut self, interval: Interval) -> TeId {
        let id = self.next_id;
        self.next_id = id.successor();
        self.records.insert(
            id,
            TeRecord {
                id,
                interval,
                state: TeState::Active,
            },
        );
        self.active.insert(id);
        id
    }

    /// Active elements whose interval contains `position`.
    ///
    /// With disjoint active intervals this holds at most one ID.
    pub fn resolve_collision(&self, position: usize) -> SmallVec<[TeId; 2]> {
        self.iter_active()
            .filter(|rec| rec.interval.contains(position))
            .map(|rec| rec.id)
            .collect()
    }

    /// Move every active element starting strictly after `position`
    /// downstream by `delta`.
    ///
    /// Elements starting exactly at `position` stay put; an insertion
    /// there collides with them instead (see
    /// [`prepare_insertion`](Self::prepare_insertion)).
    pub fn shift_after(&mut self, position: usize, delta: usize) {
        for id in &self.active {
            if let Some(rec) = self.records.get_mut(id) {
                if rec.interval.start > position {
                    rec.interval = rec.interval.shifted(delta);
                }
            }
        }
    }

    /// Collision and shift pass for an insertion of `delta` positions at
    /// `position`, in one scan of the active index.
    ///
    /// Active elements containing `position` are disabled; the rest that
    /// start after it are shifted. Returns the footprints of the disabled
    /// elements, in pre-insertion coordinates, so the caller can overwrite
    /// them before splicing.
    pub fn prepare_insertion(&mut self, position: usize, delta: usize) -> SmallVec<[Interval; 2]> {
        let mut footprints = SmallVec::new();
        let mut collided: SmallVec<[TeId; 2]> = SmallVec::new();
        for id in &self.active {
            let Some(rec) = self.records.get_mut(id) else {
                continue;
            };
            if rec.interval.contains(position) {
                rec.state = TeState::Disabled;
                footprints.push(rec.interval);
                collided.push(*id);
            } else if rec.interval.start > position {
                rec.interval = rec.interval.shifted(delta);
            }
        }
        for id in &collided {
            debug!("insertion at {position} disables TE {id}");
            self.active.shift_remove(id);
        }
        footprints
    }

    /// Flag an active element as disabled.
    ///
    /// Returns its footprint if this call performed the transition;
    /// unknown or already-disabled IDs yield `None` and change nothing.
    pub fn disable(&mut self, id: TeId) -> Option<Interval> {
        if !self.active.shift_remove(&id) {
            return None;
        }
        let rec = self.records.get_mut(&id)?;
        rec.state = TeState::Disabled;
        Some(rec.interval)
    }

    /// IDs of all active elements, ascending.
    pub fn active_ids(&self) -> Vec<TeId> {
        self.active.iter().copied().collect()
    }

    /// Active records, ascending by ID.
    pub fn iter_active(&self) -> impl Iterator<Item = &TeRecord> + '_ {
        self.active.iter().filter_map(|id| self.records.get(id))
    }

    /// The record for `id`, active or not.
    pub fn get(&self, id: TeId) -> Option<&TeRecord> {
        self.records.get(&id)
    }

    /// Current interval of `id` if it is active.
    pub fn active_interval(&self, id: TeId) -> Option<Interval> {
        self.records
            .get(&id)
            .filter(|rec| rec.is_active())
            .map(|rec| rec.interval)
    }

    /// Lifecycle state of `id`, or `None` if it was never issued.
    pub fn state(&self, id: TeId) -> Option<TeState> {
        self.records.get(&id).map(|rec| rec.state)
    }

    /// Number of records ever issued.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no element has been issued yet.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of active elements.
    pub fn active_count(&self) -> usize {
        self.active.len()
    }
}

impl Default for TeRegistry {
    fn default() -> Self {
        Self::new()
    }
}
