#![forbid(unsafe_code)]

//! Tiled-view widget for Tessera.
//!
//! [`TileView`](tile_view::TileView) wraps a root
//! [`TileCollection`](tessera_layout::TileCollection) with the two pieces
//! the layout crate deliberately does not own: the splitter interaction
//! state machine (mouse drag and keyboard nudge) and the border
//! composition pass that renders every divider, nested border, and title
//! through one line-merging canvas.

pub mod compose;
pub mod tile_view;

use tessera_core::Rect;
use tessera_render::{Buffer, Cell};
use unicode_width::UnicodeWidthChar;

pub use tile_view::{DragState, SplitterRef, TileView};

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Buffer` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the buffer at the given area.
    fn render(&self, area: Rect, buf: &mut Buffer);
}

/// Write `text` starting at `(x, y)`, truncated to `max_width` columns.
///
/// Wide characters that would straddle the limit are dropped; zero-width
/// characters are skipped.
pub(crate) fn draw_text(buf: &mut Buffer, x: u16, y: u16, text: &str, max_width: u16) {
    let limit = x.saturating_add(max_width);
    let mut cx = x;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0) as u16;
        if w == 0 {
            continue;
        }
        if cx.saturating_add(w) > limit {
            break;
        }
        buf.set(cx, y, Cell::from_char(ch));
        cx = cx.saturating_add(w);
    }
}
