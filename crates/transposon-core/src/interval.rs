//! Half-open coordinate intervals and circular position arithmetic.

use std::fmt;

/// A half-open interval `[start, end)` in genome coordinates.
///
/// Every interval a genome hands out is non-empty: `start < end`.
/// Coordinates are positions in the genome's current linear layout and
/// move downstream when an insertion lands before them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Interval {
    /// First covered position.
    pub start: usize,
    /// One past the last covered position.
    pub end: usize,
}

impl Interval {
    /// Create the interval `[start, end)`.
    pub const fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Create the interval of `len` positions starting at `start`.
    pub const fn at(start: usize, len: usize) -> Self {
        Self {
            start,
            end: start + len,
        }
    }

    /// Number of covered positions.
    pub const fn len(&self) -> usize {
        self.end - self.start
    }

    /// Whether the interval covers no positions.
    pub const fn is_empty(&self) -> bool {
        self.end <= self.start
    }

    /// Whether `pos` lies inside `[start, end)`.
    pub const fn contains(&self, pos: usize) -> bool {
        self.start <= pos && pos < self.end
    }

    /// The same interval moved `delta` positions downstream.
    pub const fn shifted(&self, delta: usize) -> Self {
        Self {
            start: self.start + delta,
            end: self.end + delta,
        }
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

/// Normalize a signed position onto a circular genome of length `len`.
///
/// Uses Euclidean remainder, so negative positions wrap backward past
/// index 0. A zero-length genome has exactly one insertion point, so
/// every position maps to 0.
///
/// ```
/// use transposon_core::wrap_position;
///
/// assert_eq!(wrap_position(12, 10), 2);
/// assert_eq!(wrap_position(-2, 10), 8);
/// assert_eq!(wrap_position(5, 0), 0);
/// ```
pub fn wrap_position(pos: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    // i128 holds every i64 and usize value, so neither the cast nor the
    // remainder can overflow.
    (i128::from(pos).rem_euclid(len as i128)) as usize
}

/// Position `offset` steps away from `start` on a circular genome of
/// length `len`.
///
/// Equivalent to `wrap_position(start + offset, len)` without the
/// intermediate overflow.
pub fn wrap_offset(start: usize, offset: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    ((start as i128 + i128::from(offset)).rem_euclid(len as i128)) as usize
}
