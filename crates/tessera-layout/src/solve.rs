#![forbid(unsafe_code)]

//! The layout solver.
//!
//! Given the current splitter positions, orientation, and border, compute
//! bounds for every visible tile and every divider line. Placement is a
//! single sequential sweep along the tiling axis: the first visible tile
//! starts at the leading content edge, each subsequent tile starts at the
//! trailing edge of the preceding visible divider, and the last visible
//! tile fills the remaining space. The cross axis always fills the whole
//! content area.
//!
//! # Splitter suppression
//!
//! Every divider starts visible; then each hidden tile hides exactly one
//! adjacent divider, preferring the one on its leading side and falling
//! back to the trailing side when the leading one is already hidden (the
//! already-hidden case covers runs of consecutive hidden tiles). This
//! keeps the visible divider count equal to the visible tile count minus
//! one, so no gaps appear.

use tessera_core::{Rect, Sides};

use crate::collection::TileCollection;
use crate::tile::Content;

impl TileCollection {
    /// Recompute bounds for every tile and divider line.
    ///
    /// A degenerate content area (zero width or height after the border
    /// inset) is a no-op: previous rects are cleared but nothing invalid
    /// is computed, and the next valid resize self-corrects.
    pub fn layout(&mut self, bounds: Rect) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "layout",
            width = bounds.width,
            height = bounds.height,
            tiles = self.tiles.len()
        );
        #[cfg(feature = "tracing")]
        let _guard = _span.enter();

        self.bounds = bounds;
        self.laid_out = true;
        self.dirty = false;

        for tile in &mut self.tiles {
            tile.set_rect(Rect::default());
        }
        for splitter in &mut self.splitters {
            splitter.line = Rect::default();
        }

        let inset = self.border_width();
        let content = bounds.inner(Sides::all(inset));
        if content.is_empty() || self.tiles.is_empty() {
            return;
        }

        self.suppress_splitters();

        let orientation = self.orientation;
        let extent = bounds.extent(orientation);
        let origin = bounds.origin(orientation);
        let cross_origin = content.cross_origin(orientation);
        let cross_extent = content.cross_extent(orientation);
        let content_start = content.origin(orientation);
        let content_end = content_start.saturating_add(content.extent(orientation));

        let visible_tiles: Vec<usize> = (0..self.tiles.len())
            .filter(|&i| self.tiles[i].content().is_visible())
            .collect();
        let visible_splitters: Vec<usize> = (0..self.splitters.len())
            .filter(|&i| self.splitters[i].visible)
            .collect();

        let mut cursor = content_start;
        for (k, &tile_index) in visible_tiles.iter().enumerate() {
            let is_last = k + 1 == visible_tiles.len();
            let end = if !is_last && k < visible_splitters.len() {
                let resolved = self.splitters[visible_splitters[k]].pos.anchor(extent);
                origin
                    .saturating_add(resolved)
                    .clamp(cursor, content_end)
            } else {
                content_end
            };

            let main_extent = end.saturating_sub(cursor);
            self.tiles[tile_index].set_rect(Rect::from_axes(
                orientation,
                cursor,
                cross_origin,
                main_extent,
                cross_extent,
            ));

            if !is_last && k < visible_splitters.len() {
                self.splitters[visible_splitters[k]].line = Rect::from_axes(
                    orientation,
                    end,
                    cross_origin,
                    1,
                    cross_extent,
                );
                cursor = end.saturating_add(1).min(content_end);
            }
        }

        // Nested regions lay out into their tile's bounds.
        for tile in &mut self.tiles {
            let rect = tile.rect();
            if let Content::Nested(nested) = tile.content_mut() {
                if !rect.is_empty() {
                    nested.layout(rect);
                }
            }
        }
    }

    /// Derive divider visibility from neighbor-tile visibility.
    fn suppress_splitters(&mut self) {
        for splitter in &mut self.splitters {
            splitter.visible = true;
        }
        for i in 0..self.tiles.len() {
            if self.tiles[i].content().is_visible() {
                continue;
            }
            if i > 0 && self.splitters[i - 1].visible {
                self.splitters[i - 1].visible = false;
            } else if i < self.splitters.len() && self.splitters[i].visible {
                self.splitters[i].visible = false;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tessera_core::{LineStyle, Orientation, Pos, Rect};

    use crate::collection::TileCollection;

    #[test]
    fn two_tiles_split_at_half() {
        let mut c = TileCollection::new(Orientation::Vertical);
        c.layout(Rect::from_size(40, 10));

        assert_eq!(c.tiles()[0].rect(), Rect::new(0, 0, 20, 10));
        assert_eq!(c.splitters()[0].line(), Rect::new(20, 0, 1, 10));
        assert_eq!(c.tiles()[1].rect(), Rect::new(21, 0, 19, 10));
    }

    #[test]
    fn resize_keeps_percentage_semantics() {
        let mut c = TileCollection::new(Orientation::Vertical);
        c.layout(Rect::from_size(40, 10));
        assert_eq!(c.splitters()[0].pos.anchor(40), 20);

        c.layout(Rect::from_size(80, 10));
        assert_eq!(c.splitters()[0].pos.anchor(80), 40);
        assert_eq!(c.tiles()[0].rect(), Rect::new(0, 0, 40, 10));
        assert_eq!(c.tiles()[1].rect(), Rect::new(41, 0, 39, 10));
    }

    #[test]
    fn horizontal_orientation_stacks_tiles() {
        let mut c = TileCollection::new(Orientation::Horizontal);
        c.layout(Rect::from_size(40, 10));

        assert_eq!(c.tiles()[0].rect(), Rect::new(0, 0, 40, 5));
        assert_eq!(c.splitters()[0].line(), Rect::new(0, 5, 40, 1));
        assert_eq!(c.tiles()[1].rect(), Rect::new(0, 6, 40, 4));
    }

    #[test]
    fn border_insets_content_by_one() {
        let mut c = TileCollection::new(Orientation::Vertical);
        c.set_border(LineStyle::Single);
        c.layout(Rect::from_size(40, 10));

        // Anchoring still runs against the full extent; the tiles inset.
        assert_eq!(c.tiles()[0].rect(), Rect::new(1, 1, 19, 8));
        assert_eq!(c.splitters()[0].line(), Rect::new(20, 1, 1, 8));
        assert_eq!(c.tiles()[1].rect(), Rect::new(21, 1, 18, 8));
    }

    #[test]
    fn degenerate_area_is_a_no_op() {
        let mut c = TileCollection::new(Orientation::Vertical);
        c.layout(Rect::from_size(0, 10));
        assert!(c.tiles()[0].rect().is_empty());
        assert!(c.tiles()[1].rect().is_empty());

        // A border that eats the whole area degenerates too.
        c.set_border(LineStyle::Single);
        c.layout(Rect::from_size(2, 2));
        assert!(c.tiles()[0].rect().is_empty());
    }

    #[test]
    fn hidden_middle_tile_suppresses_leading_splitter() {
        let mut c = TileCollection::with_tile_count(Orientation::Horizontal, 3);
        c.tile_mut(1)
            .unwrap()
            .content_mut()
            .as_pane_mut()
            .unwrap()
            .set_visible(false);
        c.layout(Rect::from_size(40, 30));

        let visible: Vec<bool> = c.splitters().iter().map(|s| s.is_visible()).collect();
        assert_eq!(visible, vec![false, true]);
        assert!(c.tiles()[1].rect().is_empty());
        // The two visible tiles share the area with a single divider.
        assert!(!c.tiles()[0].rect().is_empty());
        assert!(!c.tiles()[2].rect().is_empty());
    }

    #[test]
    fn hidden_first_tile_falls_back_to_trailing_splitter() {
        let mut c = TileCollection::with_tile_count(Orientation::Vertical, 3);
        c.tile_mut(0)
            .unwrap()
            .content_mut()
            .as_pane_mut()
            .unwrap()
            .set_visible(false);
        c.layout(Rect::from_size(40, 10));

        let visible: Vec<bool> = c.splitters().iter().map(|s| s.is_visible()).collect();
        assert_eq!(visible, vec![false, true]);
    }

    #[test]
    fn consecutive_hidden_tiles_hide_one_splitter_each() {
        let mut c = TileCollection::with_tile_count(Orientation::Vertical, 4);
        for i in [1, 2] {
            c.tile_mut(i)
                .unwrap()
                .content_mut()
                .as_pane_mut()
                .unwrap()
                .set_visible(false);
        }
        c.layout(Rect::from_size(80, 10));

        // Tile 1 hides its leading splitter 0; tile 2 finds splitter 1
        // still visible and hides it. One divider remains for two
        // visible tiles.
        let visible: Vec<bool> = c.splitters().iter().map(|s| s.is_visible()).collect();
        assert_eq!(visible, vec![false, false, true]);
    }

    #[test]
    fn last_visible_tile_fills_remaining_space() {
        let mut c = TileCollection::with_tile_count(Orientation::Vertical, 3);
        c.layout(Rect::from_size(90, 10));
        // floor(100/3) = 33 -> splitters at 33% and 66%.
        assert_eq!(c.tiles()[0].rect(), Rect::new(0, 0, 29, 10));
        assert_eq!(c.tiles()[1].rect(), Rect::new(30, 0, 29, 10));
        assert_eq!(c.tiles()[2].rect(), Rect::new(60, 0, 30, 10));
    }

    #[test]
    fn nested_collection_lays_out_into_tile_rect() {
        let mut c = TileCollection::new(Orientation::Vertical);
        c.split_tile(1, 2).unwrap();
        {
            let nested = c.nested_at_mut(1).unwrap();
            nested.set_orientation(Orientation::Horizontal);
        }
        c.layout(Rect::from_size(40, 10));

        let nested = c.nested_at(1).unwrap();
        assert_eq!(nested.bounds(), Rect::new(21, 0, 19, 10));
        assert_eq!(nested.tiles()[0].rect(), Rect::new(21, 0, 19, 5));
        assert_eq!(nested.tiles()[1].rect(), Rect::new(21, 6, 19, 4));
    }

    #[test]
    fn moved_splitter_changes_tile_bounds() {
        let mut c = TileCollection::new(Orientation::Vertical);
        c.layout(Rect::from_size(40, 10));
        c.set_splitter_position(0, Pos::Abs(10)).unwrap();
        assert!(c.is_dirty());
        c.layout(Rect::from_size(40, 10));
        assert_eq!(c.tiles()[0].rect(), Rect::new(0, 0, 10, 10));
        assert_eq!(c.tiles()[1].rect(), Rect::new(11, 0, 29, 10));
    }
}
