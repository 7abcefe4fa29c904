#![forbid(unsafe_code)]

//! The tiled region itself: ordered tiles, the splitters between them,
//! and the mutation operations that keep both in lockstep.
//!
//! # Invariants
//!
//! 1. `splitters.len() == tiles.len().saturating_sub(1)` after every
//!    mutation; splitter state is never mutated independently.
//! 2. Resolved splitter positions are strictly increasing at all times.
//! 3. Mutations (`insert_tile`, `remove_tile`, `split_tile`) go through a
//!    full rebuild-and-reattach sequence that preserves previously
//!    configured [`Tile`] objects where possible. There is no intermediate
//!    state in which the counts disagree.
//!
//! # Nesting
//!
//! Ownership flows strictly downward: a tile's content may be a nested
//! `TileCollection`, and the nested collection carries only a non-owning
//! nesting marker in place of a parent pointer. Mutations on nested
//! collections are addressed from the root through tile paths (see
//! [`TileCollection::set_splitter_position_at`]), which is what lets an
//! accepted splitter move recompute layout from the root of the nesting
//! chain and notify observers synchronously.

use std::fmt;

use tessera_core::{LineStyle, Orientation, Pos, Rect};

use crate::error::{LayoutError, SplitError, SplitterRejection};
use crate::tile::{Content, Pane, Tile, ViewId};

/// Default tile count for a freshly constructed collection.
pub const DEFAULT_TILE_COUNT: usize = 2;

/// One divider between two adjacent tiles.
///
/// Visibility is derived from neighbor-tile visibility during layout, not
/// independently settable.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Splitter {
    pub(crate) pos: Pos,
    pub(crate) visible: bool,
    pub(crate) line: Rect,
}

impl Splitter {
    pub(crate) const fn new(pos: Pos) -> Self {
        Self {
            pos,
            visible: true,
            line: Rect {
                x: 0,
                y: 0,
                width: 0,
                height: 0,
            },
        }
    }

    /// The position expression controlling this divider.
    #[must_use]
    pub const fn position(&self) -> Pos {
        self.pos
    }

    /// Whether this divider is drawn (derived during layout).
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// The divider's line bounds from the most recent layout pass.
    #[must_use]
    pub const fn line(&self) -> Rect {
        self.line
    }
}

/// Notification emitted when a splitter position is accepted.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitterMoved {
    /// Tile-index path from the root to the collection that moved.
    /// Empty for the root itself.
    pub path: Vec<usize>,
    /// Index of the splitter within that collection.
    pub index: usize,
    /// The committed position expression.
    pub position: Pos,
}

type SplitterCallback = Box<dyn FnMut(&SplitterMoved)>;

/// Explicit observer list; delivery is synchronous and in registration
/// order at the point of acceptance.
#[derive(Default)]
pub(crate) struct Observers(Vec<SplitterCallback>);

impl Observers {
    fn notify(&mut self, event: &SplitterMoved) {
        for cb in &mut self.0 {
            cb(event);
        }
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Observers({})", self.0.len())
    }
}

/// An ordered, resizable sequence of tiles separated by movable dividers.
#[derive(Debug)]
pub struct TileCollection {
    pub(crate) orientation: Orientation,
    pub(crate) border: LineStyle,
    pub(crate) visible: bool,
    pub(crate) nested: bool,
    pub(crate) tiles: Vec<Tile>,
    pub(crate) splitters: Vec<Splitter>,
    pub(crate) bounds: Rect,
    pub(crate) laid_out: bool,
    pub(crate) dirty: bool,
    observers: Observers,
}

/// Structural equality: observer callbacks are not comparable and are
/// excluded from the comparison.
impl PartialEq for TileCollection {
    fn eq(&self, other: &Self) -> bool {
        self.orientation == other.orientation
            && self.border == other.border
            && self.visible == other.visible
            && self.nested == other.nested
            && self.tiles == other.tiles
            && self.splitters == other.splitters
            && self.bounds == other.bounds
            && self.laid_out == other.laid_out
            && self.dirty == other.dirty
    }
}

impl TileCollection {
    /// Create a collection with the default two tiles.
    #[must_use]
    pub fn new(orientation: Orientation) -> Self {
        Self::with_tile_count(orientation, DEFAULT_TILE_COUNT)
    }

    /// Create a collection with an explicit tile count.
    #[must_use]
    pub fn with_tile_count(orientation: Orientation, count: usize) -> Self {
        let mut collection = Self {
            orientation,
            border: LineStyle::None,
            visible: true,
            nested: false,
            tiles: Vec::new(),
            splitters: Vec::new(),
            bounds: Rect::default(),
            laid_out: false,
            dirty: true,
            observers: Observers::default(),
        };
        collection.rebuild(count);
        collection
    }

    // ------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------

    /// The tiling orientation.
    #[must_use]
    pub const fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Change the tiling orientation and mark the layout dirty.
    pub fn set_orientation(&mut self, orientation: Orientation) {
        if self.orientation != orientation {
            self.orientation = orientation;
            self.dirty = true;
        }
    }

    /// The border style. `LineStyle::None` means no border and no inset.
    #[must_use]
    pub const fn border(&self) -> LineStyle {
        self.border
    }

    /// Change the border style and mark the layout dirty.
    pub fn set_border(&mut self, border: LineStyle) {
        if self.border != border {
            self.border = border;
            self.dirty = true;
        }
    }

    /// Width of the border inset in cells (0 or 1).
    #[must_use]
    pub(crate) const fn border_width(&self) -> u16 {
        if self.border.is_visible() { 1 } else { 0 }
    }

    /// Whether this collection is rendered.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide this collection.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
        self.dirty = true;
    }

    /// Whether this collection is nested inside another.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        self.nested
    }

    /// Whether this collection is a nesting root.
    #[must_use]
    pub const fn is_root(&self) -> bool {
        !self.nested
    }

    /// Read-only view of the tiles, in order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    /// Mutable access to one tile.
    pub fn tile_mut(&mut self, index: usize) -> Option<&mut Tile> {
        self.tiles.get_mut(index)
    }

    /// Read-only view of the splitters, in order.
    #[must_use]
    pub fn splitters(&self) -> &[Splitter] {
        &self.splitters
    }

    /// Bounds assigned by the most recent layout pass.
    #[must_use]
    pub const fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Whether a mutation since the last layout pass requires a recompute.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Whether this collection or any nested descendant is dirty.
    #[must_use]
    pub fn is_dirty_deep(&self) -> bool {
        self.dirty
            || self
                .tiles
                .iter()
                .filter_map(|tile| tile.content().as_nested())
                .any(TileCollection::is_dirty_deep)
    }

    /// The nested collection inside `tiles[index]`, if any.
    #[must_use]
    pub fn nested_at(&self, index: usize) -> Option<&TileCollection> {
        self.tiles.get(index)?.content().as_nested()
    }

    /// Mutable access to the nested collection inside `tiles[index]`.
    pub fn nested_at_mut(&mut self, index: usize) -> Option<&mut TileCollection> {
        self.tiles.get_mut(index)?.content_mut().as_nested_mut()
    }

    /// Navigate a tile-index path to a (possibly nested) collection.
    ///
    /// The empty path is this collection itself. Returns `None` when a
    /// path segment does not name a nested collection.
    #[must_use]
    pub fn collection_at(&self, path: &[usize]) -> Option<&TileCollection> {
        let mut current = self;
        for &index in path {
            current = current.nested_at(index)?;
        }
        Some(current)
    }

    /// Mutable version of [`collection_at`](Self::collection_at).
    pub fn collection_at_mut(&mut self, path: &[usize]) -> Option<&mut TileCollection> {
        let mut current = self;
        for &index in path {
            current = current.nested_at_mut(index)?;
        }
        Some(current)
    }

    /// Register a "splitter moved" observer on this (root) collection.
    pub fn on_splitter_moved(&mut self, callback: impl FnMut(&SplitterMoved) + 'static) {
        self.observers.0.push(Box::new(callback));
    }

    // ------------------------------------------------------------------
    // Registry operations
    // ------------------------------------------------------------------

    /// Discard all tiles and splitters and create `count` fresh tiles.
    ///
    /// Splitters are placed at even percentage intervals: splitter `i`
    /// starts at `floor(100 / count) * (i + 1)` percent. `count == 0`
    /// leaves the collection empty.
    pub fn rebuild(&mut self, count: usize) {
        self.tiles.clear();
        self.splitters.clear();
        self.dirty = true;
        if count == 0 {
            return;
        }
        self.tiles.extend((0..count).map(|_| Tile::new()));
        let step = (100 / count) as f32;
        self.splitters.extend(
            (1..count).map(|i| Splitter::new(Pos::Percent(step * i as f32))),
        );
    }

    /// Insert a fresh tile at `index`, shifting later tiles right.
    ///
    /// Existing tiles keep their configured content, titles, and minimum
    /// sizes; splitters are re-spaced evenly for the new count.
    pub fn insert_tile(&mut self, index: usize) -> Result<&mut Tile, LayoutError> {
        let len = self.tiles.len();
        if index > len {
            return Err(LayoutError::IndexOutOfRange { index, len });
        }
        let old = std::mem::take(&mut self.tiles);
        self.rebuild(old.len() + 1);
        for (i, tile) in old.into_iter().enumerate() {
            let slot = if i < index { i } else { i + 1 };
            self.tiles[slot] = tile;
        }
        Ok(&mut self.tiles[index])
    }

    /// Remove and return the tile at `index`, shifting later tiles left.
    ///
    /// Returns `None` when `index` is out of range; callers routinely
    /// probe boundaries, so this is a sentinel rather than an error.
    pub fn remove_tile(&mut self, index: usize) -> Option<Tile> {
        if index >= self.tiles.len() {
            return None;
        }
        let old = std::mem::take(&mut self.tiles);
        self.rebuild(old.len() - 1);
        let mut removed = None;
        for (i, tile) in old.into_iter().enumerate() {
            if i == index {
                removed = Some(tile);
            } else {
                let slot = if i < index { i } else { i - 1 };
                self.tiles[slot] = tile;
            }
        }
        removed
    }

    /// Convert the content of `tiles[index]` into a nested collection of
    /// `panel_count` tiles.
    ///
    /// The first sub-tile absorbs all direct children of the previous
    /// content (moved, not copied). Fails without touching anything when
    /// the tile already holds a nested collection; the existing region
    /// stays reachable through [`nested_at`](Self::nested_at).
    pub fn split_tile(&mut self, index: usize, panel_count: usize) -> Result<(), SplitError> {
        let len = self.tiles.len();
        let Some(tile) = self.tiles.get_mut(index) else {
            return Err(SplitError::IndexOutOfRange { index, len });
        };
        if tile.content().is_nested() {
            return Err(SplitError::AlreadyNested { index });
        }

        let mut nested = TileCollection::with_tile_count(self.orientation, panel_count);
        nested.nested = true;

        let previous = tile.replace_content(Content::Pane(Pane::new()));
        if let Content::Pane(mut pane) = previous {
            let children = pane.take_children();
            if let Some(first) = nested
                .tiles
                .first_mut()
                .and_then(|t| t.content_mut().as_pane_mut())
            {
                for child in children {
                    first.add_child(child);
                }
            }
        }
        tile.replace_content(Content::Nested(nested));
        self.dirty = true;
        Ok(())
    }

    /// Which tile's subtree holds `view`.
    ///
    /// With `recursive = false`, only each tile's direct content and its
    /// immediate children are checked; with `recursive = true`, the whole
    /// content subtree is searched depth-first. `None` when not found.
    #[must_use]
    pub fn index_of(&self, view: ViewId, recursive: bool) -> Option<usize> {
        self.tiles
            .iter()
            .position(|tile| tile.content().contains(view, recursive))
    }

    // ------------------------------------------------------------------
    // Splitter positioning
    // ------------------------------------------------------------------

    /// Propose a new position for splitter `index` on this collection.
    ///
    /// This is the single mutation entry point for moving a splitter. The
    /// validation sequence is pure with respect to its inputs and commits
    /// nothing until every gate passes:
    ///
    /// 1. Reject expressions that are neither absolute nor percentage.
    /// 2. With zero extent (not yet laid out), accept unconditionally.
    /// 3. Determine direction by comparing resolved coordinates.
    /// 4. Reject moves reaching the near/far edge (border inset included).
    /// 5. Reject moves crossing or coinciding with an adjacent splitter.
    /// 6. Reject moves leaving the encroached neighbor below its minimum
    ///    size (a one-cell allowance for the divider line itself applies
    ///    when the neighbor is not flush against the border).
    ///
    /// On acceptance the expression is committed as passed, preserving its
    /// semantic type, and the layout is marked dirty. Callers that need
    /// root recompute and notification go through
    /// [`set_splitter_position_at`](Self::set_splitter_position_at).
    pub fn set_splitter_position(
        &mut self,
        index: usize,
        position: Pos,
    ) -> Result<(), SplitterRejection> {
        if !position.is_splitter_valid() {
            return Err(SplitterRejection::UnsupportedPosition);
        }
        let len = self.splitters.len();
        if index >= len {
            return Err(SplitterRejection::IndexOutOfRange { index, len });
        }

        let extent = self.bounds.extent(self.orientation);
        if extent == 0 {
            // Not laid out yet; validation is deferred to the first solve.
            self.splitters[index].pos = position;
            self.dirty = true;
            return Ok(());
        }

        let proposed = position.anchor(extent);
        let current = self.splitters[index].pos.anchor(extent);
        let inset = self.border_width();

        if proposed > current {
            // Growing: the divider may not reach the far edge.
            if proposed >= extent.saturating_sub(inset).saturating_sub(1) {
                return Err(SplitterRejection::AtEdge);
            }
        } else if proposed < current {
            // Shrinking: the divider may not reach the near edge.
            if proposed <= inset {
                return Err(SplitterRejection::AtEdge);
            }
        }

        if index > 0 {
            let previous = self.splitters[index - 1].pos.anchor(extent);
            if proposed <= previous {
                return Err(SplitterRejection::CrossesNeighbor);
            }
        }
        if index + 1 < len {
            let next = self.splitters[index + 1].pos.anchor(extent);
            if proposed >= next {
                return Err(SplitterRejection::CrossesNeighbor);
            }
        }

        if proposed > current {
            // Encroaching on the trailing neighbor.
            let limit = if index + 1 < len {
                self.splitters[index + 1].pos.anchor(extent)
            } else {
                extent.saturating_sub(inset)
            };
            let available = limit.saturating_sub(proposed.saturating_add(1));
            let needed = self.tiles[index + 1].min_size();
            if available < needed {
                return Err(SplitterRejection::BelowMinSize { needed, available });
            }
        } else if proposed < current {
            // Encroaching on the leading neighbor.
            let start = if index > 0 {
                self.splitters[index - 1].pos.anchor(extent).saturating_add(1)
            } else {
                inset
            };
            let available = proposed.saturating_sub(start);
            let needed = self.tiles[index].min_size();
            if available < needed {
                return Err(SplitterRejection::BelowMinSize { needed, available });
            }
        }

        self.splitters[index].pos = position;
        self.dirty = true;
        Ok(())
    }

    /// Move a splitter on the collection addressed by `path`, recompute
    /// layout from the root, and notify observers.
    ///
    /// This is the entry point interactive controllers use: nested
    /// resizes affect ancestor geometry, so acceptance propagates a
    /// recompute to the root of the nesting chain rather than just the
    /// local collection. The "splitter moved" notification is delivered
    /// synchronously at the point of acceptance; rejected proposals leave
    /// every piece of state untouched.
    pub fn set_splitter_position_at(
        &mut self,
        path: &[usize],
        index: usize,
        position: Pos,
    ) -> Result<(), SplitterRejection> {
        let target = self
            .collection_at_mut(path)
            .ok_or(SplitterRejection::InvalidPath)?;
        target.set_splitter_position(index, position)?;

        if self.laid_out {
            let bounds = self.bounds;
            self.layout(bounds);
        }

        let event = SplitterMoved {
            path: path.to_vec(),
            index,
            position,
        };
        #[cfg(feature = "tracing")]
        tracing::trace!(index = event.index, "splitter moved");
        self.observers.notify(&event);
        Ok(())
    }
}
