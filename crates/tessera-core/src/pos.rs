#![forbid(unsafe_code)]

//! Position expressions.
//!
//! A [`Pos`] describes a coordinate in one of three recognized forms:
//! an absolute cell offset, a percentage of the parent extent, or
//! fill-remaining. Splitter positions accept only the first two; `Fill`
//! exists because the surrounding widget base uses it for dimension
//! expressions and the engine must recognize (and reject) it.
//!
//! # Resolution
//!
//! `anchor(total)` resolves an expression to an absolute offset within
//! `0..=total`. Percentages truncate toward zero, which is why drag
//! reclassification goes through [`Pos::percent_of_cell`]: anchoring the
//! midpoint of the target cell keeps repeated percentage/absolute
//! round-trips from creeping by one cell per conversion.

use serde::{Deserialize, Serialize};

/// A position expression: where, in one of three forms.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pos {
    /// Absolute cell offset.
    Abs(u16),
    /// Percentage of the parent extent (0.0 ..= 100.0).
    Percent(f32),
    /// Fill the remaining space. Not a valid splitter position.
    Fill,
}

impl Pos {
    /// Resolve to an absolute offset against a total extent.
    ///
    /// `Abs` clamps to `total`; `Percent` truncates toward zero; `Fill`
    /// resolves to the full extent.
    #[must_use]
    pub fn anchor(self, total: u16) -> u16 {
        match self {
            Pos::Abs(n) => n.min(total),
            Pos::Percent(p) => {
                let raw = f32::from(total) * p / 100.0;
                (raw.max(0.0) as u16).min(total)
            }
            Pos::Fill => total,
        }
    }

    /// Percentage expression anchored at the midpoint of cell `offset`.
    ///
    /// `anchor(total)` of the result lands back on `offset` exactly, so a
    /// percentage splitter dragged to a cell stays on that cell across
    /// later resolutions.
    #[must_use]
    pub fn percent_of_cell(offset: u16, total: u16) -> Pos {
        if total == 0 {
            return Pos::Percent(0.0);
        }
        Pos::Percent((f32::from(offset) + 0.5) / f32::from(total) * 100.0)
    }

    /// True for the variants accepted as splitter positions.
    #[must_use]
    pub const fn is_splitter_valid(self) -> bool {
        matches!(self, Pos::Abs(_) | Pos::Percent(_))
    }

    /// True for percentage expressions.
    #[must_use]
    pub const fn is_percent(self) -> bool {
        matches!(self, Pos::Percent(_))
    }
}

#[cfg(test)]
mod tests {
    use super::Pos;
    use proptest::prelude::*;

    #[test]
    fn abs_clamps_to_total() {
        assert_eq!(Pos::Abs(20).anchor(40), 20);
        assert_eq!(Pos::Abs(50).anchor(40), 40);
    }

    #[test]
    fn percent_truncates() {
        assert_eq!(Pos::Percent(50.0).anchor(40), 20);
        assert_eq!(Pos::Percent(33.0).anchor(10), 3);
        assert_eq!(Pos::Percent(100.0).anchor(40), 40);
    }

    #[test]
    fn fill_resolves_to_total() {
        assert_eq!(Pos::Fill.anchor(17), 17);
    }

    #[test]
    fn zero_extent_resolves_to_zero() {
        assert_eq!(Pos::Percent(50.0).anchor(0), 0);
        assert_eq!(Pos::Abs(5).anchor(0), 0);
    }

    #[test]
    fn splitter_validity() {
        assert!(Pos::Abs(1).is_splitter_valid());
        assert!(Pos::Percent(10.0).is_splitter_valid());
        assert!(!Pos::Fill.is_splitter_valid());
    }

    #[test]
    fn serde_round_trip() {
        let json = serde_json::to_string(&Pos::Percent(50.0)).unwrap();
        let back: Pos = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Pos::Percent(50.0));
    }

    proptest! {
        // Midpoint anchoring must land back on the same cell.
        #[test]
        fn percent_of_cell_is_exact(total in 1u16..=500, offset in 0u16..=499) {
            let offset = offset.min(total - 1);
            let pos = Pos::percent_of_cell(offset, total);
            prop_assert_eq!(pos.anchor(total), offset);
        }
    }
}
