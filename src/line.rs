//! Arbitrary-direction line drawing
//!
//! Integer Bresenham stepping. No clipping here: pixels that land off the
//! canvas are discarded by the bounds-checked pixel write.

use crate::canvas::{Canvas, ColorIndex};

/// Draw a straight line between two arbitrary points.
///
/// Lines steeper than 45 degrees are transposed so the stepping loop only
/// ever walks the axis with the larger extent, which keeps the path free of
/// gaps. The pixel set is the same regardless of endpoint order.
pub fn draw_line(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: ColorIndex) {
    if (y1 - y0).abs() > (x1 - x0).abs() {
        step_line(canvas, y0, x0, y1, x1, color, true);
    } else {
        step_line(canvas, x0, y0, x1, y1, color, false);
    }
}

/// Shallow-line core loop. Walks the major axis left to right; the error
/// accumulator starts at the run length and a minor-axis step fires only
/// when it goes strictly negative. With `transposed` set the inputs arrived
/// (y, x)-swapped and each pixel is written swapped back.
fn step_line(
    canvas: &mut Canvas,
    mut x0: i32,
    mut y0: i32,
    mut x1: i32,
    mut y1: i32,
    color: ColorIndex,
    transposed: bool,
) {
    if x0 > x1 {
        std::mem::swap(&mut x0, &mut x1);
        std::mem::swap(&mut y0, &mut y1);
    }

    let dx = 2 * (x1 - x0);
    let dy = 2 * (y1 - y0).abs();
    let y_step = if y1 - y0 > 0 { 1 } else { -1 };

    let mut sum = x1 - x0;
    let mut y = y0;
    for x in x0..=x1 {
        if transposed {
            canvas.set_pixel(y, x, color);
        } else {
            canvas.set_pixel(x, y, color);
        }
        sum -= dy;
        if sum < 0 {
            y += y_step;
            sum += dx;
        }
    }
}
