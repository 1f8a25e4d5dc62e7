//! Integer-only 2D shape rasterizer for indexed-color matrix displays
//!
//! Scan-converts points, lines, rectangles, circles, and triangles (plus
//! filled variants) into a fixed-size grid of palette indices, using
//! Bresenham and midpoint stepping throughout — no floating point on any
//! drawing path. The canvas stores indices only; resolving them against a
//! palette and pushing them to a panel belong to the caller.
//!
//! Out-of-canvas geometry is legal input everywhere: axis-aligned spans are
//! clipped before writing, and every other path writes through a
//! bounds-checked pixel store that discards strays.

mod canvas;
mod circle;
mod line;
mod rect;
mod triangle;

pub use canvas::{Canvas, ColorIndex};
pub use circle::{draw_circle, fill_circle};
pub use line::draw_line;
pub use rect::{draw_rect, fill_rect};
pub use triangle::{draw_triangle, fill_triangle};

use serde::{Deserialize, Serialize};

/// A point on the integer pixel grid.
/// May lie outside the canvas; clipping happens at draw time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}
