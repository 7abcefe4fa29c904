#![forbid(unsafe_code)]

//! Error and rejection types for registry and splitter operations.
//!
//! Two families with different policies:
//!
//! - Registry argument errors ([`LayoutError`], [`SplitError`]) are
//!   sentinel results: callers routinely probe boundaries, so an
//!   out-of-range index is an expected answer, not an abort.
//! - Splitter rejections ([`SplitterRejection`]) are the normal outcome of
//!   interactive dragging at the boundaries. They carry the reason for
//!   diagnostics but are never logged above trace level. The one
//!   exception is [`SplitterRejection::UnsupportedPosition`], which marks
//!   a caller contract violation (a fill expression is never a valid
//!   splitter position).

use std::fmt;

/// Registry argument error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutError {
    /// A tile index outside `0..=len` (insert) or `0..len` (others).
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The tile count at the time of the call.
        len: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LayoutError::IndexOutOfRange { index, len } => {
                write!(f, "tile index {index} out of range (len {len})")
            }
        }
    }
}

impl std::error::Error for LayoutError {}

/// Failure modes of [`split_tile`](crate::TileCollection::split_tile).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitError {
    /// The target tile index is out of range.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The tile count at the time of the call.
        len: usize,
    },
    /// The target tile's content is already a nested tiled region.
    ///
    /// A tile can only be split once without first unsplitting; the
    /// existing nested region stays reachable through
    /// [`nested_at`](crate::TileCollection::nested_at).
    AlreadyNested {
        /// The target tile index.
        index: usize,
    },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitError::IndexOutOfRange { index, len } => {
                write!(f, "tile index {index} out of range (len {len})")
            }
            SplitError::AlreadyNested { index } => {
                write!(f, "tile {index} already holds a nested collection")
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// Why a proposed splitter position was not committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SplitterRejection {
    /// The position expression is neither absolute nor percentage.
    ///
    /// This is a caller contract violation, not a runtime condition.
    UnsupportedPosition,
    /// The splitter index is out of range.
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The splitter count at the time of the call.
        len: usize,
    },
    /// A tile path segment does not name a nested collection.
    InvalidPath,
    /// The move would reach the container edge (border inset included).
    AtEdge,
    /// The move would cross or coincide with an adjacent splitter.
    CrossesNeighbor,
    /// The move would shrink a neighbor tile below its minimum size.
    BelowMinSize {
        /// The neighbor's declared minimum.
        needed: u16,
        /// The space the move would leave it.
        available: u16,
    },
}

impl fmt::Display for SplitterRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SplitterRejection::UnsupportedPosition => {
                write!(f, "position expression is not a valid splitter position")
            }
            SplitterRejection::IndexOutOfRange { index, len } => {
                write!(f, "splitter index {index} out of range (len {len})")
            }
            SplitterRejection::InvalidPath => {
                write!(f, "tile path does not lead to a nested collection")
            }
            SplitterRejection::AtEdge => write!(f, "splitter would reach the container edge"),
            SplitterRejection::CrossesNeighbor => {
                write!(f, "splitter would cross an adjacent splitter")
            }
            SplitterRejection::BelowMinSize { needed, available } => {
                write!(
                    f,
                    "neighbor tile would drop below its minimum size ({available} < {needed})"
                )
            }
        }
    }
}

impl std::error::Error for SplitterRejection {}

#[cfg(test)]
mod tests {
    use super::{LayoutError, SplitError, SplitterRejection};

    #[test]
    fn display_formats() {
        assert_eq!(
            LayoutError::IndexOutOfRange { index: 3, len: 2 }.to_string(),
            "tile index 3 out of range (len 2)"
        );
        assert_eq!(
            SplitError::AlreadyNested { index: 0 }.to_string(),
            "tile 0 already holds a nested collection"
        );
        assert_eq!(
            SplitterRejection::BelowMinSize {
                needed: 5,
                available: 3
            }
            .to_string(),
            "neighbor tile would drop below its minimum size (3 < 5)"
        );
    }
}
