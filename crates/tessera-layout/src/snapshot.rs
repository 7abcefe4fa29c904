#![forbid(unsafe_code)]

//! Persisted layout schema with versioning.
//!
//! A [`LayoutSnapshot`] captures the shape of a tiled region — orientation,
//! border, titles, minimum sizes, splitter positions, and nesting — without
//! its runtime content (view handles are process-local and are minted fresh
//! on restore).
//!
//! # Schema Versioning Policy
//!
//! - Breaking field or semantic changes must bump [`SCHEMA_VERSION`].
//! - All snapshots carry their schema version; [`LayoutSnapshot::restore`]
//!   rejects unknown versions with an actionable error.

use std::fmt;

use serde::{Deserialize, Serialize};
use tessera_core::{LineStyle, Orientation, Pos};

use crate::collection::TileCollection;
use crate::tile::Content;

/// Current layout snapshot schema version.
pub const SCHEMA_VERSION: u16 = 1;

/// Persisted form of a tiled region tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutSnapshot {
    /// Schema version for migration detection.
    pub schema_version: u16,
    /// The root node.
    pub root: NodeSnapshot,
}

/// Persisted form of one collection in the tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub orientation: Orientation,
    pub border: LineStyle,
    pub splitters: Vec<Pos>,
    pub tiles: Vec<TileSnapshot>,
}

/// Persisted form of one tile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TileSnapshot {
    pub title: String,
    pub min_size: u16,
    /// Present when the tile held a nested collection.
    #[serde(default)]
    pub nested: Option<NodeSnapshot>,
}

/// Why a snapshot could not be restored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnapshotError {
    /// The snapshot was written by an incompatible schema version.
    UnsupportedVersion {
        /// Version found in the snapshot.
        found: u16,
        /// Version this build understands.
        expected: u16,
    },
    /// Splitter count does not match tile count.
    CountMismatch {
        /// Tiles in the offending node.
        tiles: usize,
        /// Splitters in the offending node.
        splitters: usize,
    },
    /// A stored position is not a valid splitter position.
    InvalidPosition {
        /// Index of the offending splitter.
        index: usize,
    },
    /// Stored positions resolve out of order.
    OutOfOrder {
        /// Index of the first offending splitter.
        index: usize,
    },
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::UnsupportedVersion { found, expected } => {
                write!(f, "unsupported snapshot version {found} (expected {expected})")
            }
            SnapshotError::CountMismatch { tiles, splitters } => {
                write!(
                    f,
                    "splitter count {splitters} does not match {tiles} tiles"
                )
            }
            SnapshotError::InvalidPosition { index } => {
                write!(f, "splitter {index} holds an invalid position expression")
            }
            SnapshotError::OutOfOrder { index } => {
                write!(f, "splitter {index} resolves out of order")
            }
        }
    }
}

impl std::error::Error for SnapshotError {}

// Ordering among mixed absolute/percentage positions depends on the
// final extent; validation resolves against a nominal one.
const NOMINAL_EXTENT: u16 = 10_000;

impl LayoutSnapshot {
    /// Capture the shape of a collection tree.
    #[must_use]
    pub fn capture(collection: &TileCollection) -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            root: capture_node(collection),
        }
    }

    /// Rebuild a collection tree from this snapshot.
    ///
    /// Validates the schema version, per-node counts, position variants,
    /// and resolved splitter ordering before committing anything. Content
    /// panes come back fresh and empty.
    pub fn restore(&self) -> Result<TileCollection, SnapshotError> {
        if self.schema_version != SCHEMA_VERSION {
            return Err(SnapshotError::UnsupportedVersion {
                found: self.schema_version,
                expected: SCHEMA_VERSION,
            });
        }
        validate_node(&self.root)?;
        Ok(restore_node(&self.root, false))
    }
}

fn capture_node(collection: &TileCollection) -> NodeSnapshot {
    NodeSnapshot {
        orientation: collection.orientation(),
        border: collection.border(),
        splitters: collection.splitters().iter().map(|s| s.position()).collect(),
        tiles: collection
            .tiles()
            .iter()
            .map(|tile| TileSnapshot {
                title: tile.title().to_owned(),
                min_size: tile.min_size(),
                nested: match tile.content() {
                    Content::Nested(nested) => Some(capture_node(nested)),
                    Content::Pane(_) => None,
                },
            })
            .collect(),
    }
}

fn validate_node(node: &NodeSnapshot) -> Result<(), SnapshotError> {
    let expected = node.tiles.len().saturating_sub(1);
    if node.splitters.len() != expected {
        return Err(SnapshotError::CountMismatch {
            tiles: node.tiles.len(),
            splitters: node.splitters.len(),
        });
    }
    let mut previous: Option<u16> = None;
    for (index, pos) in node.splitters.iter().enumerate() {
        if !pos.is_splitter_valid() {
            return Err(SnapshotError::InvalidPosition { index });
        }
        let resolved = pos.anchor(NOMINAL_EXTENT);
        if let Some(prev) = previous {
            if resolved <= prev {
                return Err(SnapshotError::OutOfOrder { index });
            }
        }
        previous = Some(resolved);
    }
    for tile in &node.tiles {
        if let Some(nested) = &tile.nested {
            validate_node(nested)?;
        }
    }
    Ok(())
}

fn restore_node(node: &NodeSnapshot, nested: bool) -> TileCollection {
    let mut collection = TileCollection::with_tile_count(node.orientation, node.tiles.len());
    collection.nested = nested;
    collection.set_border(node.border);
    for (index, pos) in node.splitters.iter().enumerate() {
        collection.splitters[index].pos = *pos;
    }
    for (index, snapshot) in node.tiles.iter().enumerate() {
        let tile = &mut collection.tiles[index];
        tile.set_title(snapshot.title.clone());
        tile.set_min_size(snapshot.min_size);
        if let Some(sub) = &snapshot.nested {
            let restored = restore_node(sub, true);
            tile.replace_content(Content::Nested(restored));
        }
    }
    collection
}
