#![forbid(unsafe_code)]

//! The line-merging canvas.
//!
//! Independently-specified line segments accumulate per-cell direction
//! arms; a single [`flush`](LineCanvas::flush) pass maps each cell's
//! merged arms to the correct box-drawing glyph. Segments that overlap or
//! abut therefore render as T-junctions, crosses, and corners instead of
//! overwriting each other — which is what lets splitter lines, nested
//! borders, and the outer border read as one continuous frame.
//!
//! # Endpoint semantics
//!
//! Interior cells of a segment carry both colinear arms; endpoints carry
//! only the inward arm. A vertical segment ending on a horizontal one
//! thus contributes `DOWN` to the shared cell, merging `LEFT|RIGHT|DOWN`
//! into `┬` rather than extending past the join.

use bitflags::bitflags;
use rustc_hash::FxHashMap;
use tessera_core::{LineStyle, Rect};

use crate::buffer::Buffer;
use crate::cell::Cell;

bitflags! {
    /// Direction arms radiating from a cell's center.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Arms: u8 {
        const UP    = 0b0001;
        const DOWN  = 0b0010;
        const LEFT  = 0b0100;
        const RIGHT = 0b1000;
    }
}

#[derive(Debug, Clone, Copy)]
struct LineCell {
    arms: Arms,
    style: LineStyle,
}

/// Accumulates line segments and draws them once, junctions resolved.
#[derive(Debug, Default)]
pub struct LineCanvas {
    cells: FxHashMap<(u16, u16), LineCell>,
}

impl LineCanvas {
    /// Create an empty canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a horizontal segment starting at `(x, y)`.
    pub fn hline(&mut self, x: u16, y: u16, len: u16, style: LineStyle) {
        if len == 0 || !style.is_visible() {
            return;
        }
        if len == 1 {
            self.mark(x, y, Arms::LEFT | Arms::RIGHT, style);
            return;
        }
        let last = x.saturating_add(len - 1);
        self.mark(x, y, Arms::RIGHT, style);
        for cx in x.saturating_add(1)..last {
            self.mark(cx, y, Arms::LEFT | Arms::RIGHT, style);
        }
        self.mark(last, y, Arms::LEFT, style);
    }

    /// Add a vertical segment starting at `(x, y)`.
    pub fn vline(&mut self, x: u16, y: u16, len: u16, style: LineStyle) {
        if len == 0 || !style.is_visible() {
            return;
        }
        if len == 1 {
            self.mark(x, y, Arms::UP | Arms::DOWN, style);
            return;
        }
        let last = y.saturating_add(len - 1);
        self.mark(x, y, Arms::DOWN, style);
        for cy in y.saturating_add(1)..last {
            self.mark(x, cy, Arms::UP | Arms::DOWN, style);
        }
        self.mark(x, last, Arms::UP, style);
    }

    /// Add all four edges of a rectangle.
    pub fn rect(&mut self, rect: Rect, style: LineStyle) {
        if rect.is_empty() || !style.is_visible() {
            return;
        }
        let right = rect.right().saturating_sub(1);
        let bottom = rect.bottom().saturating_sub(1);
        self.hline(rect.x, rect.y, rect.width, style);
        self.hline(rect.x, bottom, rect.width, style);
        self.vline(rect.x, rect.y, rect.height, style);
        self.vline(right, rect.y, rect.height, style);
    }

    fn mark(&mut self, x: u16, y: u16, arms: Arms, style: LineStyle) {
        self.cells
            .entry((x, y))
            .and_modify(|cell| {
                cell.arms |= arms;
                if style.weight() > cell.style.weight() {
                    cell.style = style;
                }
            })
            .or_insert(LineCell { arms, style });
    }

    /// Resolve all accumulated cells to glyphs and write them out.
    pub fn flush(&self, buf: &mut Buffer) {
        for (&(x, y), cell) in &self.cells {
            buf.set(x, y, Cell::from_char(glyph(cell.arms, cell.style)));
        }
    }
}

/// Map merged arms and a style to a box-drawing glyph.
#[must_use]
pub fn glyph(arms: Arms, style: LineStyle) -> char {
    // (vertical, horizontal, corners dr dl ur ul, tees r l d u, cross)
    let set: [char; 11] = match style {
        LineStyle::None => return ' ',
        LineStyle::Single => ['│', '─', '┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '┼'],
        LineStyle::Rounded => ['│', '─', '╭', '╮', '╰', '╯', '├', '┤', '┬', '┴', '┼'],
        LineStyle::Thick => ['┃', '━', '┏', '┓', '┗', '┛', '┣', '┫', '┳', '┻', '╋'],
        LineStyle::Double => ['║', '═', '╔', '╗', '╚', '╝', '╠', '╣', '╦', '╩', '╬'],
    };
    let [vertical, horizontal, dr, dl, ur, ul, tee_r, tee_l, tee_d, tee_u, cross] = set;

    let up = arms.contains(Arms::UP);
    let down = arms.contains(Arms::DOWN);
    let left = arms.contains(Arms::LEFT);
    let right = arms.contains(Arms::RIGHT);

    match (up, down, left, right) {
        (_, _, false, false) if up || down => vertical,
        (false, false, _, _) if left || right => horizontal,
        (false, true, false, true) => dr,
        (false, true, true, false) => dl,
        (true, false, false, true) => ur,
        (true, false, true, false) => ul,
        (true, true, false, true) => tee_r,
        (true, true, true, false) => tee_l,
        (false, true, true, true) => tee_d,
        (true, false, true, true) => tee_u,
        (true, true, true, true) => cross,
        _ => ' ',
    }
}

#[cfg(test)]
mod tests {
    use tessera_core::{LineStyle, Rect};

    use super::{Arms, LineCanvas, glyph};
    use crate::buffer::Buffer;

    #[test]
    fn rect_corners_merge() {
        let mut canvas = LineCanvas::new();
        canvas.rect(Rect::new(0, 0, 4, 3), LineStyle::Single);
        let mut buf = Buffer::from_size(4, 3);
        canvas.flush(&mut buf);
        assert_eq!(buf.rows(), "┌──┐\n│  │\n└──┘");
    }

    #[test]
    fn rounded_rect_corners() {
        let mut canvas = LineCanvas::new();
        canvas.rect(Rect::new(0, 0, 3, 3), LineStyle::Rounded);
        let mut buf = Buffer::from_size(3, 3);
        canvas.flush(&mut buf);
        assert_eq!(buf.rows(), "╭─╮\n│ │\n╰─╯");
    }

    #[test]
    fn crossing_lines_form_a_cross() {
        let mut canvas = LineCanvas::new();
        canvas.hline(0, 1, 3, LineStyle::Single);
        canvas.vline(1, 0, 3, LineStyle::Single);
        let mut buf = Buffer::from_size(3, 3);
        canvas.flush(&mut buf);
        assert_eq!(buf.rows(), " │ \n─┼─\n │ ");
    }

    #[test]
    fn divider_meeting_border_forms_tees() {
        let mut canvas = LineCanvas::new();
        canvas.rect(Rect::new(0, 0, 5, 4), LineStyle::Single);
        // A full-height divider overlapping top and bottom edges.
        canvas.vline(2, 0, 4, LineStyle::Single);
        let mut buf = Buffer::from_size(5, 4);
        canvas.flush(&mut buf);
        assert_eq!(buf.rows(), "┌─┬─┐\n│ │ │\n│ │ │\n└─┴─┘");
    }

    #[test]
    fn endpoint_contributes_inward_arm_only() {
        // A vertical segment ending on a horizontal line: ┬, not ┼.
        let mut canvas = LineCanvas::new();
        canvas.hline(0, 0, 3, LineStyle::Single);
        canvas.vline(1, 0, 3, LineStyle::Single);
        let mut buf = Buffer::from_size(3, 3);
        canvas.flush(&mut buf);
        assert_eq!(buf.rows(), "─┬─\n │ \n │ ");
    }

    #[test]
    fn heavier_style_wins_at_junctions() {
        let mut canvas = LineCanvas::new();
        canvas.hline(0, 0, 3, LineStyle::Single);
        canvas.vline(1, 0, 2, LineStyle::Double);
        let mut buf = Buffer::from_size(3, 2);
        canvas.flush(&mut buf);
        assert_eq!(buf.get(1, 0).unwrap().ch(), '╦');
    }

    #[test]
    fn single_cell_segments_render() {
        assert_eq!(glyph(Arms::LEFT | Arms::RIGHT, LineStyle::Single), '─');
        assert_eq!(glyph(Arms::UP | Arms::DOWN, LineStyle::Thick), '┃');
        assert_eq!(glyph(Arms::UP, LineStyle::Single), '│');
        assert_eq!(glyph(Arms::empty(), LineStyle::Single), ' ');
    }
}
