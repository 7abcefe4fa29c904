#![forbid(unsafe_code)]

//! The tiled-view widget and its splitter interaction controller.
//!
//! # Drag state machine
//!
//! Idle → Dragging on a primary-button press over a divider line;
//! Dragging → Idle on release or cancellation. While a drag is active it
//! *is* the mouse capture: every pointer event routes to the captured
//! divider and nothing else in the view reacts. Each drag event proposes
//! `origin position + pointer delta` with the origin's position type
//! preserved — a divider that started as a percentage stays a
//! percentage, reclassified through the midpoint of the target cell so
//! repeated drags do not creep. Rejected proposals leave both the layout
//! and the gesture untouched.
//!
//! There is no timeout: a gesture ends only through release,
//! [`TileView::cancel_drag`], or focus loss.

use tessera_core::{
    Event, KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind, Orientation, Pos, Rect,
};
use tessera_layout::TileCollection;
use tessera_render::{Buffer, LineCanvas};

use crate::compose::{compose_lines, compose_titles};
use crate::Widget;

/// Address of one divider in the nesting hierarchy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SplitterRef {
    /// Tile-index path from the root collection. Empty for the root.
    pub path: Vec<usize>,
    /// Divider index within that collection.
    pub index: usize,
}

/// The splitter interaction state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum DragState {
    /// No gesture in flight.
    Idle,
    /// A divider is captured by an active drag.
    Dragging {
        /// Pointer position at the press that started the gesture.
        origin: (u16, u16),
        /// The captured divider.
        splitter: SplitterRef,
        /// The divider's position expression before the gesture.
        original: Pos,
        /// That expression resolved at gesture start.
        original_offset: u16,
    },
}

/// A resizable tiled region with draggable dividers.
pub struct TileView {
    collection: TileCollection,
    area: Rect,
    drag: DragState,
    selected: Option<SplitterRef>,
    needs_redraw: bool,
}

impl TileView {
    /// Wrap a root collection.
    #[must_use]
    pub fn new(collection: TileCollection) -> Self {
        Self {
            collection,
            area: Rect::default(),
            drag: DragState::Idle,
            selected: None,
            needs_redraw: true,
        }
    }

    /// The underlying collection.
    #[must_use]
    pub const fn collection(&self) -> &TileCollection {
        &self.collection
    }

    /// Mutable access to the underlying collection.
    pub fn collection_mut(&mut self) -> &mut TileCollection {
        &mut self.collection
    }

    /// The current drag state.
    #[must_use]
    pub const fn drag_state(&self) -> &DragState {
        &self.drag
    }

    /// The divider keyboard nudges act on.
    #[must_use]
    pub const fn selected_splitter(&self) -> Option<&SplitterRef> {
        self.selected.as_ref()
    }

    /// Choose the divider keyboard nudges act on.
    pub fn select_splitter(&mut self, path: Vec<usize>, index: usize) {
        self.selected = Some(SplitterRef { path, index });
    }

    /// Recompute layout when the area changed or a mutation is pending.
    pub fn update(&mut self, area: Rect) {
        if area != self.area || self.collection.is_dirty_deep() {
            self.area = area;
            self.collection.layout(area);
            self.needs_redraw = true;
        }
    }

    /// Whether an accepted mutation requests a redraw; clears the flag.
    pub fn take_redraw_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_redraw)
    }

    /// Cancel any in-flight drag gesture, releasing the capture.
    ///
    /// Used on external cancellation, e.g. the capturing widget losing
    /// focus. The divider keeps its last accepted position.
    pub fn cancel_drag(&mut self) {
        self.drag = DragState::Idle;
    }

    /// Feed one input event through the controller.
    ///
    /// Returns whether the event was consumed.
    pub fn handle_event(&mut self, event: &Event) -> bool {
        match event {
            Event::Mouse(mouse) => self.handle_mouse(*mouse),
            Event::Key(key) => self.handle_key(*key),
            Event::Focus(false) => {
                self.cancel_drag();
                false
            }
            _ => false,
        }
    }

    fn handle_mouse(&mut self, mouse: MouseEvent) -> bool {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if matches!(self.drag, DragState::Dragging { .. }) {
                    // The gesture owns the pointer until release.
                    return true;
                }
                let Some(splitter) = find_splitter(&self.collection, mouse.x, mouse.y) else {
                    return false;
                };
                let Some(collection) = self.collection.collection_at(&splitter.path) else {
                    return false;
                };
                let extent = collection.bounds().extent(collection.orientation());
                let original = collection.splitters()[splitter.index].position();
                self.drag = DragState::Dragging {
                    origin: (mouse.x, mouse.y),
                    splitter,
                    original,
                    original_offset: original.anchor(extent),
                };
                true
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                let DragState::Dragging {
                    origin,
                    ref splitter,
                    original,
                    original_offset,
                } = self.drag
                else {
                    return false;
                };
                let splitter = splitter.clone();
                let Some(collection) = self.collection.collection_at(&splitter.path) else {
                    return true;
                };
                let orientation = collection.orientation();
                let extent = collection.bounds().extent(orientation);
                let delta = match orientation {
                    Orientation::Vertical => i32::from(mouse.x) - i32::from(origin.0),
                    Orientation::Horizontal => i32::from(mouse.y) - i32::from(origin.1),
                };
                let target =
                    (i32::from(original_offset) + delta).clamp(0, i32::from(extent)) as u16;
                let proposal = reclassify(original, target, extent);
                self.propose(&splitter, proposal);
                true
            }
            MouseEventKind::Up(MouseButton::Left) => {
                if matches!(self.drag, DragState::Dragging { .. }) {
                    self.drag = DragState::Idle;
                    true
                } else {
                    false
                }
            }
            _ => matches!(self.drag, DragState::Dragging { .. }),
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> bool {
        let Some(selected) = self.selected.clone() else {
            return false;
        };
        let Some(collection) = self.collection.collection_at(&selected.path) else {
            return false;
        };
        let orientation = collection.orientation();
        // A divider only moves along its own axis; orthogonal nudges are
        // rejected outright.
        let delta: i32 = match (orientation, key.code) {
            (Orientation::Vertical, KeyCode::Left) => -1,
            (Orientation::Vertical, KeyCode::Right) => 1,
            (Orientation::Horizontal, KeyCode::Up) => -1,
            (Orientation::Horizontal, KeyCode::Down) => 1,
            _ => return false,
        };

        let Some(current) = collection
            .splitters()
            .get(selected.index)
            .map(|s| s.position())
        else {
            return false;
        };
        let extent = collection.bounds().extent(orientation);
        let target =
            (i32::from(current.anchor(extent)) + delta).clamp(0, i32::from(extent)) as u16;
        let proposal = reclassify(current, target, extent);
        self.propose(&selected, proposal);
        true
    }

    fn propose(&mut self, splitter: &SplitterRef, position: Pos) {
        match self
            .collection
            .set_splitter_position_at(&splitter.path, splitter.index, position)
        {
            Ok(()) => {
                self.needs_redraw = true;
            }
            Err(_rejection) => {
                // Expected at the boundaries of normal dragging; the
                // gesture continues at the prior position.
                #[cfg(feature = "tracing")]
                tracing::trace!(%_rejection, "splitter proposal rejected");
            }
        }
    }
}

impl Widget for TileView {
    /// Compose lines and titles from the last computed layout.
    ///
    /// Call [`TileView::update`] first when the area may have changed.
    fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.is_empty() {
            return;
        }
        let mut canvas = LineCanvas::new();
        compose_lines(&self.collection, &mut canvas);
        canvas.flush(buf);
        compose_titles(&self.collection, buf, area);
    }
}

/// Preserve the semantic type of `original` at a new absolute offset.
fn reclassify(original: Pos, target: u16, extent: u16) -> Pos {
    if original.is_percent() {
        Pos::percent_of_cell(target, extent)
    } else {
        Pos::Abs(target)
    }
}

/// Depth-first search for the visible divider line under a point.
fn find_splitter(collection: &TileCollection, x: u16, y: u16) -> Option<SplitterRef> {
    for (index, splitter) in collection.splitters().iter().enumerate() {
        if splitter.is_visible() && splitter.line().contains(x, y) {
            return Some(SplitterRef {
                path: Vec::new(),
                index,
            });
        }
    }
    for (tile_index, tile) in collection.tiles().iter().enumerate() {
        if let Some(nested) = tile.content().as_nested() {
            if nested.is_visible() && !tile.rect().is_empty() {
                if let Some(mut found) = find_splitter(nested, x, y) {
                    found.path.insert(0, tile_index);
                    return Some(found);
                }
            }
        }
    }
    None
}
