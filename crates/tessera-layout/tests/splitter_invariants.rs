//! Property/fuzz-style invariants for tile registry and splitter
//! operations.
//!
//! This suite exercises random operation streams against the public
//! TileCollection API and asserts the structural invariants after each
//! mutation: divider count locked to tile count, strictly increasing
//! resolved positions after accepted moves, minimum-size preservation,
//! and drift-free percentage round-trips under repeated dragging.

use proptest::prelude::*;
use tessera_core::{Orientation, Pos, Rect};
use tessera_layout::TileCollection;

const WIDTH: u16 = 120;
const HEIGHT: u16 = 40;

#[derive(Debug, Clone)]
enum Op {
    Rebuild(usize),
    Insert(usize),
    Remove(usize),
    Split(usize, usize),
    MoveAbs(usize, u16),
    MovePercent(usize, u16),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0usize..6).prop_map(Op::Rebuild),
        (0usize..8).prop_map(Op::Insert),
        (0usize..8).prop_map(Op::Remove),
        ((0usize..8), (2usize..4)).prop_map(|(i, n)| Op::Split(i, n)),
        ((0usize..8), (0u16..WIDTH)).prop_map(|(i, p)| Op::MoveAbs(i, p)),
        ((0usize..8), (0u16..=100)).prop_map(|(i, p)| Op::MovePercent(i, p)),
    ]
}

fn resolved_positions(collection: &TileCollection) -> Vec<u16> {
    let extent = collection.bounds().extent(collection.orientation());
    collection
        .splitters()
        .iter()
        .map(|s| s.position().anchor(extent))
        .collect()
}

fn assert_structure(collection: &TileCollection) {
    assert_eq!(
        collection.splitters().len(),
        collection.tiles().len().saturating_sub(1),
        "divider count must track tile count"
    );
    for tile in collection.tiles() {
        if let Some(nested) = tile.content().as_nested() {
            assert_structure(nested);
        }
    }
}

proptest! {
    // Divider count tracks tile count through arbitrary mutation streams,
    // at every level of nesting.
    #[test]
    fn splitter_count_invariant(ops in proptest::collection::vec(op_strategy(), 1..40)) {
        let mut c = TileCollection::new(Orientation::Vertical);
        c.layout(Rect::from_size(WIDTH, HEIGHT));
        for op in ops {
            match op {
                Op::Rebuild(n) => c.rebuild(n),
                Op::Insert(i) => {
                    let _ = c.insert_tile(i);
                }
                Op::Remove(i) => {
                    let _ = c.remove_tile(i);
                }
                Op::Split(i, n) => {
                    let _ = c.split_tile(i, n);
                }
                Op::MoveAbs(i, p) => {
                    let _ = c.set_splitter_position(i, Pos::Abs(p));
                }
                Op::MovePercent(i, p) => {
                    let _ = c.set_splitter_position(i, Pos::Percent(f32::from(p)));
                }
            }
            assert_structure(&c);
            c.layout(Rect::from_size(WIDTH, HEIGHT));
        }
    }

    // After any accepted move, resolved positions stay strictly
    // increasing.
    #[test]
    fn ordering_invariant(
        tile_count in 3usize..6,
        moves in proptest::collection::vec(((0usize..5), (0u16..WIDTH)), 1..60),
    ) {
        let mut c = TileCollection::with_tile_count(Orientation::Vertical, tile_count);
        c.layout(Rect::from_size(WIDTH, HEIGHT));

        for (index, target) in moves {
            let _ = c.set_splitter_position(index, Pos::Abs(target));
            let resolved = resolved_positions(&c);
            for pair in resolved.windows(2) {
                prop_assert!(
                    pair[0] < pair[1],
                    "positions out of order: {resolved:?}"
                );
            }
        }
    }

    // A move that would shrink a neighbor below its minimum size is
    // always rejected.
    #[test]
    fn min_size_preservation(
        min_left in 0u16..30,
        min_right in 0u16..30,
        targets in proptest::collection::vec(0u16..WIDTH, 1..60),
    ) {
        let mut c = TileCollection::new(Orientation::Vertical);
        c.tile_mut(0).unwrap().set_min_size(min_left);
        c.tile_mut(1).unwrap().set_min_size(min_right);
        c.layout(Rect::from_size(WIDTH, HEIGHT));

        for target in targets {
            let _ = c.set_splitter_position(0, Pos::Abs(target));
            c.layout(Rect::from_size(WIDTH, HEIGHT));
            let left = c.tiles()[0].rect().width;
            let right = c.tiles()[1].rect().width;
            prop_assert!(left >= min_left, "left tile {left} below min {min_left}");
            prop_assert!(right >= min_right, "right tile {right} below min {min_right}");
        }
    }
}

// Equal opposite drags leave a percentage splitter resolving to its
// starting cell, without creeping, across 100 cycles.
#[test]
fn percentage_round_trip_stability() {
    let mut c = TileCollection::new(Orientation::Vertical);
    c.layout(Rect::from_size(40, 10));
    let start = c.splitters()[0].position().anchor(40);
    assert_eq!(start, 20);

    for _ in 0..100 {
        for delta in [5i32, -5] {
            let current = c.splitters()[0].position().anchor(40);
            let target = (i32::from(current) + delta).clamp(0, 40) as u16;
            // Reclassify the way a drag does: percentage origin stays
            // percentage, anchored at the target cell's midpoint.
            c.set_splitter_position(0, Pos::percent_of_cell(target, 40))
                .expect("interior moves are legal");
            assert!(c.splitters()[0].position().is_percent());
        }
    }

    let end = c.splitters()[0].position().anchor(40);
    assert!(
        (i32::from(end) - i32::from(start)).abs() <= 1,
        "splitter crept from {start} to {end}"
    );
}

// Doubling the container width doubles a percentage splitter's resolved
// offset.
#[test]
fn percentage_splitter_scales_with_resize() {
    let mut c = TileCollection::new(Orientation::Vertical);
    c.layout(Rect::from_size(40, 10));
    assert_eq!(c.splitters()[0].position().anchor(40), 20);

    c.layout(Rect::from_size(80, 10));
    let resolved = c.splitters()[0].position().anchor(80);
    assert!((39..=41).contains(&resolved), "got {resolved}");
}
