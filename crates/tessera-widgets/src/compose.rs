#![forbid(unsafe_code)]

//! Border and line composition across a nesting hierarchy.
//!
//! Starting from a root tiled region, collect every visible divider line
//! and every title in the subtree, expressed in the root's coordinate
//! space, and draw them through one [`LineCanvas`] so junctions between
//! the outer border, divider lines, and nested borders resolve into
//! continuous box-drawing glyphs.
//!
//! Divider lines from *nested* regions are extended by one cell at each
//! end (shifting the origin one cell against the line's own direction) so
//! a sub-region's divider meets the line separating it from its sibling
//! in the parent flush, instead of stopping one cell short. Regions with
//! a border instead stretch their dividers across the border rows so the
//! endpoints merge into T-junctions.

use tessera_core::{LineStyle, Orientation, Rect};
use tessera_layout::{Content, TileCollection};
use tessera_render::{Buffer, LineCanvas};

use crate::draw_text;

/// Collect all lines of `root` and its visible descendants.
pub fn compose_lines(root: &TileCollection, canvas: &mut LineCanvas) {
    collect_lines(root, 0, canvas);
}

fn collect_lines(collection: &TileCollection, depth: usize, canvas: &mut LineCanvas) {
    if !collection.is_visible() || collection.bounds().is_empty() {
        return;
    }

    let border = collection.border();
    if border.is_visible() {
        canvas.rect(collection.bounds(), border);
    }
    // Dividers without a configured border style fall back to single
    // lines; the border style itself keeps nested frames consistent.
    let line_style = if border.is_visible() {
        border
    } else {
        LineStyle::Single
    };

    for splitter in collection.splitters() {
        if !splitter.is_visible() || splitter.line().is_empty() {
            continue;
        }
        let line = splitter.line();
        let (mut start, mut len) = match collection.orientation() {
            Orientation::Vertical => (line.y, line.height),
            Orientation::Horizontal => (line.x, line.width),
        };

        if border.is_visible() {
            // Stretch across the border rows: endpoints overlap the
            // border rectangle and merge into T-junctions.
            match collection.orientation() {
                Orientation::Vertical => {
                    start = collection.bounds().y;
                    len = collection.bounds().height;
                }
                Orientation::Horizontal => {
                    start = collection.bounds().x;
                    len = collection.bounds().width;
                }
            }
        } else if depth > 0 {
            // Nested region: extend one cell on each end to meet the
            // parent's dividing line.
            if start > 0 {
                start -= 1;
                len = len.saturating_add(2);
            } else {
                len = len.saturating_add(1);
            }
        }

        match collection.orientation() {
            Orientation::Vertical => canvas.vline(line.x, start, len, line_style),
            Orientation::Horizontal => canvas.hline(start, line.y, len, line_style),
        }
    }

    for tile in collection.tiles() {
        if let Content::Nested(nested) = tile.content() {
            if !tile.rect().is_empty() {
                collect_lines(nested, depth + 1, canvas);
            }
        }
    }
}

/// Draw the titles of all non-nested tiles in the subtree.
///
/// A title sits one row above its tile's top-left content cell and is
/// skipped entirely when that row falls outside `area` — a root region
/// without a border has nowhere to put titles for its top row of tiles.
pub fn compose_titles(root: &TileCollection, buf: &mut Buffer, area: Rect) {
    if !root.is_visible() {
        return;
    }
    for tile in root.tiles() {
        let rect = tile.rect();
        match tile.content() {
            Content::Nested(nested) => {
                if !rect.is_empty() {
                    compose_titles(nested, buf, area);
                }
            }
            Content::Pane(pane) => {
                if !pane.is_visible() || tile.title().is_empty() || rect.is_empty() {
                    continue;
                }
                if rect.y <= area.y {
                    continue;
                }
                draw_text(buf, rect.x, rect.y - 1, tile.title(), rect.width);
            }
        }
    }
}
