#![forbid(unsafe_code)]

//! Geometric primitives.

use serde::{Deserialize, Serialize};

/// A rectangle for layout bounds and hit testing.
///
/// Uses terminal coordinates (0-indexed, origin at top-left).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub x: u16,
    /// Top edge (inclusive).
    pub y: u16,
    /// Width in cells.
    pub width: u16,
    /// Height in cells.
    pub height: u16,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create a rectangle from origin with given size.
    #[inline]
    pub const fn from_size(width: u16, height: u16) -> Self {
        Self::new(0, 0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub const fn right(&self) -> u16 {
        self.x.saturating_add(self.width)
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.height)
    }

    /// Check if the rectangle has zero area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Check if a point is inside the rectangle.
    #[inline]
    pub const fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Create a new rectangle inside the current one with the given margin.
    pub fn inner(&self, margin: Sides) -> Rect {
        let x = self.x.saturating_add(margin.left);
        let y = self.y.saturating_add(margin.top);
        let width = self
            .width
            .saturating_sub(margin.left)
            .saturating_sub(margin.right);
        let height = self
            .height
            .saturating_sub(margin.top)
            .saturating_sub(margin.bottom);

        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// Extent along the tiling axis of the given orientation.
    ///
    /// `Vertical` dividers separate tiles arranged left-to-right, so the
    /// tiling axis runs along the width; `Horizontal` runs along the height.
    #[inline]
    pub const fn extent(&self, orientation: Orientation) -> u16 {
        match orientation {
            Orientation::Vertical => self.width,
            Orientation::Horizontal => self.height,
        }
    }

    /// Extent across the tiling axis.
    #[inline]
    pub const fn cross_extent(&self, orientation: Orientation) -> u16 {
        match orientation {
            Orientation::Vertical => self.height,
            Orientation::Horizontal => self.width,
        }
    }

    /// Origin coordinate along the tiling axis.
    #[inline]
    pub const fn origin(&self, orientation: Orientation) -> u16 {
        match orientation {
            Orientation::Vertical => self.x,
            Orientation::Horizontal => self.y,
        }
    }

    /// Origin coordinate across the tiling axis.
    #[inline]
    pub const fn cross_origin(&self, orientation: Orientation) -> u16 {
        match orientation {
            Orientation::Vertical => self.y,
            Orientation::Horizontal => self.x,
        }
    }

    /// Build a rectangle from axis-relative coordinates.
    ///
    /// `main` and `main_extent` run along the tiling axis, `cross` and
    /// `cross_extent` across it.
    pub const fn from_axes(
        orientation: Orientation,
        main: u16,
        cross: u16,
        main_extent: u16,
        cross_extent: u16,
    ) -> Rect {
        match orientation {
            Orientation::Vertical => Rect::new(main, cross, main_extent, cross_extent),
            Orientation::Horizontal => Rect::new(cross, main, cross_extent, main_extent),
        }
    }
}

/// Sides for padding/margin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Sides {
    pub top: u16,
    pub right: u16,
    pub bottom: u16,
    pub left: u16,
}

impl Sides {
    /// Create new sides with equal values.
    pub const fn all(val: u16) -> Self {
        Self {
            top: val,
            right: val,
            bottom: val,
            left: val,
        }
    }
}

/// Axis along which tiles are arranged.
///
/// The name describes the divider lines, not the tile flow: `Vertical`
/// dividers are vertical bars between tiles laid out left-to-right;
/// `Horizontal` dividers are horizontal bars between tiles stacked
/// top-to-bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    /// Vertical divider lines, tiles left-to-right.
    #[default]
    Vertical,
    /// Horizontal divider lines, tiles top-to-bottom.
    Horizontal,
}

impl Orientation {
    /// The other orientation.
    #[must_use]
    pub const fn flipped(self) -> Self {
        match self {
            Orientation::Vertical => Orientation::Horizontal,
            Orientation::Horizontal => Orientation::Vertical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{Orientation, Rect, Sides};

    #[test]
    fn rect_contains_edges() {
        let rect = Rect::new(2, 3, 4, 5);
        assert!(rect.contains(2, 3));
        assert!(rect.contains(5, 7));
        assert!(!rect.contains(6, 3));
        assert!(!rect.contains(2, 8));
    }

    #[test]
    fn rect_inner_reduces() {
        let rect = Rect::new(0, 0, 10, 10);
        let inner = rect.inner(Sides::all(1));
        assert_eq!(inner, Rect::new(1, 1, 8, 8));
    }

    #[test]
    fn rect_inner_saturates_on_degenerate() {
        let rect = Rect::new(0, 0, 1, 1);
        let inner = rect.inner(Sides::all(1));
        assert!(inner.is_empty());
    }

    #[test]
    fn axis_helpers_follow_orientation() {
        let rect = Rect::new(2, 3, 40, 10);
        assert_eq!(rect.extent(Orientation::Vertical), 40);
        assert_eq!(rect.extent(Orientation::Horizontal), 10);
        assert_eq!(rect.cross_extent(Orientation::Vertical), 10);
        assert_eq!(rect.origin(Orientation::Vertical), 2);
        assert_eq!(rect.origin(Orientation::Horizontal), 3);
        assert_eq!(rect.cross_origin(Orientation::Horizontal), 2);
    }

    #[test]
    fn from_axes_round_trips() {
        let v = Rect::from_axes(Orientation::Vertical, 5, 2, 10, 4);
        assert_eq!(v, Rect::new(5, 2, 10, 4));
        let h = Rect::from_axes(Orientation::Horizontal, 5, 2, 10, 4);
        assert_eq!(h, Rect::new(2, 5, 4, 10));
    }

    #[test]
    fn orientation_flip() {
        assert_eq!(Orientation::Vertical.flipped(), Orientation::Horizontal);
        assert_eq!(Orientation::Horizontal.flipped(), Orientation::Vertical);
    }
}
