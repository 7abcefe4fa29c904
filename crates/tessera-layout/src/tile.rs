#![forbid(unsafe_code)]

//! Tile and content model.
//!
//! A [`Tile`] is one logical region inside a tiled collection. Its content
//! is a recursive sum type: either a leaf [`Pane`] standing in for an
//! arbitrary renderable widget subtree, or a nested
//! [`TileCollection`](crate::TileCollection). Recursive algorithms (line
//! collection, title collection, subtree search) pattern-match on
//! [`Content`] exhaustively instead of relying on runtime type tests.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};
use tessera_core::Rect;

use crate::TileCollection;

static NEXT_VIEW_ID: AtomicU64 = AtomicU64::new(1);

/// Stable identifier for content views.
///
/// `0` is reserved/invalid so IDs are always non-zero. Fresh IDs are
/// minted process-wide; the engine only ever compares them for equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(u64);

impl ViewId {
    /// Mint a fresh, unique ID.
    #[must_use]
    pub fn mint() -> Self {
        Self(NEXT_VIEW_ID.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw numeric value.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

/// A leaf content region.
///
/// A pane owns an identity and an ordered list of child view handles.
/// The engine never interprets children beyond identity: they exist so
/// that [`TileCollection::index_of`](crate::TileCollection::index_of) can
/// answer "which tile holds this view", and so that
/// [`split_tile`](crate::TileCollection::split_tile) can re-parent them
/// into the first sub-tile of a new nested collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pane {
    id: ViewId,
    children: Vec<ViewId>,
    visible: bool,
}

impl Pane {
    /// Create a fresh, empty, visible pane.
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: ViewId::mint(),
            children: Vec::new(),
            visible: true,
        }
    }

    /// This pane's own view identity.
    #[must_use]
    pub const fn id(&self) -> ViewId {
        self.id
    }

    /// Direct child view handles, in insertion order.
    #[must_use]
    pub fn children(&self) -> &[ViewId] {
        &self.children
    }

    /// Attach a child view handle.
    pub fn add_child(&mut self, child: ViewId) {
        self.children.push(child);
    }

    /// Detach a child view handle. Returns whether it was present.
    pub fn remove_child(&mut self, child: ViewId) -> bool {
        match self.children.iter().position(|&c| c == child) {
            Some(i) => {
                self.children.remove(i);
                true
            }
            None => false,
        }
    }

    /// Move all children out of this pane.
    pub(crate) fn take_children(&mut self) -> Vec<ViewId> {
        std::mem::take(&mut self.children)
    }

    /// Whether this pane is rendered.
    #[must_use]
    pub const fn is_visible(&self) -> bool {
        self.visible
    }

    /// Show or hide this pane.
    ///
    /// Hiding a pane hides its tile, which in turn suppresses one
    /// adjacent splitter line during layout.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}

impl Default for Pane {
    fn default() -> Self {
        Self::new()
    }
}

/// What a tile holds: a leaf pane or a nested tiled region.
#[derive(Debug, PartialEq)]
pub enum Content {
    /// A leaf content region.
    Pane(Pane),
    /// A nested tiled region with its own tiles and splitters.
    Nested(TileCollection),
}

impl Content {
    /// Whether this content is rendered.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        match self {
            Content::Pane(p) => p.is_visible(),
            Content::Nested(c) => c.is_visible(),
        }
    }

    /// Whether this content is a nested tiled region.
    #[must_use]
    pub const fn is_nested(&self) -> bool {
        matches!(self, Content::Nested(_))
    }

    /// The leaf pane, if this content is one.
    #[must_use]
    pub const fn as_pane(&self) -> Option<&Pane> {
        match self {
            Content::Pane(p) => Some(p),
            Content::Nested(_) => None,
        }
    }

    /// Mutable access to the leaf pane, if this content is one.
    pub fn as_pane_mut(&mut self) -> Option<&mut Pane> {
        match self {
            Content::Pane(p) => Some(p),
            Content::Nested(_) => None,
        }
    }

    /// The nested collection, if this content is one.
    #[must_use]
    pub const fn as_nested(&self) -> Option<&TileCollection> {
        match self {
            Content::Nested(c) => Some(c),
            Content::Pane(_) => None,
        }
    }

    /// Mutable access to the nested collection, if this content is one.
    pub fn as_nested_mut(&mut self) -> Option<&mut TileCollection> {
        match self {
            Content::Nested(c) => Some(c),
            Content::Pane(_) => None,
        }
    }

    /// Whether `view` lives in this content.
    ///
    /// Non-recursive checks the direct content identity and its immediate
    /// children only; recursive searches the whole subtree depth-first.
    pub(crate) fn contains(&self, view: ViewId, recursive: bool) -> bool {
        match self {
            Content::Pane(p) => p.id() == view || p.children().contains(&view),
            Content::Nested(c) => {
                if recursive {
                    c.tiles()
                        .iter()
                        .any(|t| t.content().contains(view, true))
                } else {
                    c.tiles()
                        .iter()
                        .any(|t| matches!(t.content(), Content::Pane(p) if p.id() == view))
                }
            }
        }
    }
}

/// One logical region within a tiled layout.
#[derive(Debug, PartialEq)]
pub struct Tile {
    content: Content,
    min_size: u16,
    title: String,
    rect: Rect,
}

impl Tile {
    /// Create a tile holding a fresh empty pane.
    #[must_use]
    pub fn new() -> Self {
        Self {
            content: Content::Pane(Pane::new()),
            min_size: 0,
            title: String::new(),
            rect: Rect::default(),
        }
    }

    /// This tile's content.
    #[must_use]
    pub const fn content(&self) -> &Content {
        &self.content
    }

    /// Mutable access to this tile's content.
    pub fn content_mut(&mut self) -> &mut Content {
        &mut self.content
    }

    pub(crate) fn replace_content(&mut self, content: Content) -> Content {
        std::mem::replace(&mut self.content, content)
    }

    /// Minimum extent along the container's tiling axis.
    #[must_use]
    pub const fn min_size(&self) -> u16 {
        self.min_size
    }

    /// Set the minimum extent along the container's tiling axis.
    pub fn set_min_size(&mut self, min_size: u16) {
        self.min_size = min_size;
    }

    /// Title drawn adjacent to the tile's top border, when one exists.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Set the tile title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    /// Bounds computed by the most recent layout pass.
    ///
    /// Empty until the owning collection has been laid out, and for
    /// hidden tiles.
    #[must_use]
    pub const fn rect(&self) -> Rect {
        self.rect
    }

    pub(crate) fn set_rect(&mut self, rect: Rect) {
        self.rect = rect;
    }
}

impl Default for Tile {
    fn default() -> Self {
        Self::new()
    }
}
