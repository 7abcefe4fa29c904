#![forbid(unsafe_code)]

//! Tiled-layout engine: tile registry, splitter validation, and the
//! layout solver.
//!
//! # Role in Tessera
//! `tessera-layout` owns the semantic state of a tiled region: the
//! ordered tiles, the position expressions of the dividers between them,
//! and the rules that decide whether a proposed divider move is legal.
//! It knows nothing about glyphs or input devices; `tessera-widgets`
//! drives it from events and `tessera-render` draws what it computes.
//!
//! # Primary responsibilities
//! - **Registry**: rebuild/insert/remove/split operations that keep the
//!   divider count locked to `tiles - 1` through every mutation.
//! - **Validation**: the pure gate sequence a proposed divider position
//!   must pass (edges, neighbor ordering, minimum sizes) before commit.
//! - **Solver**: sequential placement of visible tiles and divider lines,
//!   with visibility-driven divider suppression.
//! - **Snapshots**: versioned persistence of the layout shape.
//!
//! # Concurrency
//! Single-threaded and event-driven. All mutation happens synchronously
//! on one logical thread of control; hosts that add background work must
//! serialize access onto that sequence to preserve the ordering
//! invariant on divider positions.

pub mod collection;
pub mod error;
pub mod snapshot;
mod solve;
pub mod tile;

pub use collection::{DEFAULT_TILE_COUNT, Splitter, SplitterMoved, TileCollection};
pub use error::{LayoutError, SplitError, SplitterRejection};
pub use snapshot::{LayoutSnapshot, NodeSnapshot, SCHEMA_VERSION, SnapshotError, TileSnapshot};
pub use tile::{Content, Pane, Tile, ViewId};
