#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, and the line-merging canvas.
//!
//! # Role in Tessera
//! `tessera-render` is the deterministic drawing substrate. Widgets render
//! into a [`Buffer`](buffer::Buffer) of plain cells; box-drawing goes
//! through the [`LineCanvas`](canvas::LineCanvas), which resolves
//! overlapping segment endpoints into correct junction glyphs in a single
//! flush pass. Terminal presentation (diffing, ANSI emission) is the
//! hosting toolkit's concern, not this crate's.

pub mod buffer;
pub mod canvas;
pub mod cell;

pub use buffer::Buffer;
pub use canvas::{Arms, LineCanvas, glyph};
pub use cell::Cell;
