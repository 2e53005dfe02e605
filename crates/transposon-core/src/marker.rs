//! Per-position genome content.

use std::fmt;

/// The symbolic content of a single genome position.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Marker {
    /// No element at this position. Rendered as `'-'`.
    #[default]
    Empty,
    /// Part of an active transposable element. Rendered as `'A'`.
    Active,
    /// Footprint of a disabled transposable element. Rendered as `'x'`.
    Disabled,
}

impl Marker {
    /// The rendering symbol for this marker.
    pub const fn symbol(self) -> char {
        match self {
            Self::Empty => '-',
            Self::Active => 'A',
            Self::Disabled => 'x',
        }
    }

    /// Parse a rendering symbol back into a marker.
    ///
    /// Returns `None` for anything outside the `{'-', 'A', 'x'}` alphabet.
    pub const fn from_symbol(c: char) -> Option<Self> {
        match c {
            '-' => Some(Self::Empty),
            'A' => Some(Self::Active),
            'x' => Some(Self::Disabled),
            _ => None,
        }
    }
}

impl fmt::Display for Marker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_match_rendering_alphabet() {
        assert_eq!(Marker::Empty.symbol(), '-');
        assert_eq!(Marker::Active.symbol(), 'A');
        assert_eq!(Marker::Disabled.symbol(), 'x');
    }

    #[test]
    fn from_symbol_rejects_unknown() {
        assert_eq!(Marker::from_symbol('A'), Some(Marker::Active));
        assert_eq!(Marker::from_symbol('a'), None);
        assert_eq!(Marker::from_symbol(' '), None);
    }

    #[test]
    fn default_is_empty() {
        assert_eq!(Marker::default(), Marker::Empty);
    }
}
