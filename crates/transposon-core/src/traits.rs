//! The genome contract and per-element records.
//!
//! [`Genome`] is the single abstract surface the simulation driver
//! programs against. Concrete representations (array-backed and
//! linked-chain) implement it with different complexity profiles but
//! identical observable behavior.

use crate::error::GenomeError;
use crate::id::TeId;
use crate::interval::Interval;
use crate::marker::Marker;

/// Lifecycle state of a transposable element.
///
/// The only transition is `Active → Disabled`, triggered by an explicit
/// disable or by a later insertion landing inside the element.
/// `Disabled` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TeState {
    /// Rendered as `'A'` and listed by [`Genome::active_tes`].
    Active,
    /// Footprint rendered as `'x'`; excluded from the active view.
    Disabled,
}

/// Registry entry for one transposable element.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TeRecord {
    /// Unique identifier.
    pub id: TeId,
    /// Current coordinates. Only kept up to date while the element is
    /// active; a disabled record keeps the coordinates it had when it
    /// was disabled.
    pub interval: Interval,
    /// Lifecycle state.
    pub state: TeState,
}

impl TeRecord {
    /// Whether the element is still active.
    pub fn is_active(&self) -> bool {
        self.state == TeState::Active
    }
}

/// A circular genome of markers hosting transposable elements.
///
/// Positions are interpreted modulo the current length; offsets may be
/// negative and wrap backward past index 0. The trait is object-safe so
/// drivers can hold a `Box<dyn Genome>` chosen at construction time.
///
/// # Examples
///
/// ```
/// use transposon_core::{Genome, GenomeError, Interval, TeId, TeState};
///
/// fn seed_element(g: &mut dyn Genome) -> Result<TeId, GenomeError> {
///     let id = g.insert_te(3, 2)?;
///     assert_eq!(g.te_interval(id), Some(Interval::new(3, 5)));
///     assert_eq!(g.te_state(id), Some(TeState::Active));
///     Ok(id)
/// }
/// ```
pub trait Genome {
    /// Insert a new active element of `length` positions at `pos`.
    ///
    /// `pos` is normalized modulo the current length. Any active element
    /// whose interval contains the normalized position is disabled; all
    /// active elements starting strictly after it move downstream by
    /// `length`. Returns the fresh element's ID.
    ///
    /// # Errors
    ///
    /// [`GenomeError::ZeroLengthElement`] if `length == 0`. The genome is
    /// left untouched on error.
    fn insert_te(&mut self, pos: i64, length: usize) -> Result<TeId, GenomeError>;

    /// Copy an active element to `offset` positions from its start.
    ///
    /// Equivalent to `insert_te((start + offset) mod len, end - start)`.
    /// Returns `None` without mutating anything if `te` is unknown or no
    /// longer active.
    fn copy_te(&mut self, te: TeId, offset: i64) -> Option<TeId>;

    /// Disable an active element, rendering its footprint as `'x'`.
    ///
    /// Unknown and already-disabled IDs are ignored.
    fn disable_te(&mut self, te: TeId);

    /// IDs of all active elements, in ascending ID order.
    fn active_tes(&self) -> Vec<TeId>;

    /// Current number of positions.
    fn len(&self) -> usize;

    /// Whether the genome has no positions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Current interval of an active element.
    fn te_interval(&self, te: TeId) -> Option<Interval>;

    /// Lifecycle state of an element, or `None` if it was never issued.
    fn te_state(&self, te: TeId) -> Option<TeState>;

    /// All markers in index order.
    fn markers(&self) -> Vec<Marker>;

    /// Render the genome over the `{'-', 'A', 'x'}` alphabet, starting at
    /// position 0.
    fn render(&self) -> String {
        self.markers().into_iter().map(Marker::symbol).collect()
    }
}
