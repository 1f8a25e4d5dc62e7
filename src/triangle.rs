//! Triangle outline and scanline fill
//!
//! The fill sorts vertices by row, reduces every triangle to one or two
//! flat-side triangles, and rasterizes each by walking both non-flat edges
//! with independent Bresenham trackers that feed clipped horizontal spans.

use crate::canvas::{Canvas, ColorIndex};
use crate::line::draw_line;
use crate::Point;
use std::mem;

/// Draw a triangle outline through three vertices
pub fn draw_triangle(canvas: &mut Canvas, a: Point, b: Point, c: Point, color: ColorIndex) {
    draw_line(canvas, a.x, a.y, b.x, b.y, color);
    draw_line(canvas, b.x, b.y, c.x, c.y, color);
    draw_line(canvas, a.x, a.y, c.x, c.y, color);
}

/// Fill a triangle through three vertices.
///
/// Vertices may arrive in any order and may lie off the canvas; spans are
/// clipped as they are emitted. Collinear vertices degenerate into a line
/// of spans rather than an error.
pub fn fill_triangle(canvas: &mut Canvas, a: Point, b: Point, c: Point, color: ColorIndex) {
    // Sort by row, top first
    let (mut v0, mut v1, mut v2) = (a, b, c);
    if v0.y > v1.y {
        mem::swap(&mut v0, &mut v1);
    }
    if v0.y > v2.y {
        mem::swap(&mut v0, &mut v2);
    }
    if v1.y > v2.y {
        mem::swap(&mut v1, &mut v2);
    }

    if v1.y == v2.y {
        // Flat bottom, apex on top
        fill_flat_triangle(canvas, v0, v1, v2, color);
    } else if v0.y == v1.y {
        // Flat top, apex on the bottom
        fill_flat_triangle(canvas, v2, v0, v1, color);
    } else {
        // General case: split on the long edge at the middle vertex's row.
        // Floor division keeps the seam placement direction-independent.
        let split = Point::new(
            v0.x + ((v1.y - v0.y) * (v2.x - v0.x)).div_euclid(v2.y - v0.y),
            v1.y,
        );
        fill_flat_triangle(canvas, v0, v1, split, color);
        fill_flat_triangle(canvas, v2, v1, split, color);
    }
}

/// Fill a triangle whose `f0`-`f1` side is flat (both on the apex-opposite
/// row). Two trackers walk the apex-`f0` and apex-`f1` edges; the second is
/// caught up to the first's row before each new span so no row is skipped.
fn fill_flat_triangle(canvas: &mut Canvas, apex: Point, f0: Point, f1: Point, color: ColorIndex) {
    let mut t1 = apex;
    let mut t2 = apex;

    let mut dx1 = (f0.x - apex.x).abs();
    let mut dy1 = (f0.y - apex.y).abs();
    let mut dx2 = (f1.x - apex.x).abs();
    let mut dy2 = (f1.y - apex.y).abs();

    let signx1 = if f0.x - apex.x < 0 { -1 } else { 1 };
    let signx2 = if f1.x - apex.x < 0 { -1 } else { 1 };
    let signy1 = if f0.y - apex.y < 0 { -1 } else { 1 };
    let signy2 = if f1.y - apex.y < 0 { -1 } else { 1 };

    // Per-edge steepness decision, as in the general line
    let mut changed1 = false;
    let mut changed2 = false;
    if dy1 > dx1 {
        mem::swap(&mut dx1, &mut dy1);
        changed1 = true;
    }
    if dy2 > dx2 {
        mem::swap(&mut dx2, &mut dy2);
        changed2 = true;
    }

    let mut e1 = 2 * dy1 - dx1;
    let mut e2 = 2 * dy2 - dx2;

    for _ in 0..=dx1 {
        canvas.hline(t1.x, t2.x, t1.y, color);

        while e1 >= 0 {
            if changed1 {
                t1.x += signx1;
            } else {
                t1.y += signy1;
            }
            e1 -= 2 * dx1;
        }
        if changed1 {
            t1.y += signy1;
        } else {
            t1.x += signx1;
        }
        e1 += 2 * dy1;

        // Tracker 1 moved; bring tracker 2 to the same row before the next
        // span is emitted
        while t2.y != t1.y {
            while e2 >= 0 {
                if changed2 {
                    t2.x += signx2;
                } else {
                    t2.y += signy2;
                }
                e2 -= 2 * dx2;
            }
            if changed2 {
                t2.y += signy2;
            } else {
                t2.x += signx2;
            }
            e2 += 2 * dy2;
        }
    }
}
