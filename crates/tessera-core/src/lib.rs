#![forbid(unsafe_code)]

//! Shared vocabulary for the Tessera tiled-layout engine.
//!
//! # Role in Tessera
//! `tessera-core` defines the types every other crate speaks: rectangles
//! and orientations, canonical input events, box-drawing line styles, and
//! the position-expression type used to describe splitter coordinates.
//!
//! # Primary responsibilities
//! - **Rect/Sides/Orientation**: terminal-cell geometry and axis helpers.
//! - **Pos**: absolute / percentage / fill position expressions with an
//!   `anchor(total)` resolution function.
//! - **Event**: keyboard and mouse events the interaction layer consumes.
//! - **LineStyle**: the style vocabulary shared by layout configuration
//!   and the line-merging renderer.

pub mod event;
pub mod geometry;
pub mod line_style;
pub mod pos;

pub use event::{Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::{Orientation, Rect, Sides};
pub use line_style::LineStyle;
pub use pos::Pos;
