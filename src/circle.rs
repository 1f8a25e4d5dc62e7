//! Circle outline and filled disc
//!
//! Midpoint circle algorithm: one octant is computed and mirrored eight
//! ways. The filled variant converts the same walk into horizontal spans.

use crate::canvas::{Canvas, ColorIndex};

/// Draw a circle outline centered at (cx, cy).
/// A radius of zero draws nothing.
pub fn draw_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, color: ColorIndex) {
    if radius == 0 {
        return;
    }

    let mut a = radius;
    let mut b = 0;
    let mut err = 1 - a;

    while a >= b {
        canvas.set_pixel(cx + a, cy + b, color);
        canvas.set_pixel(cx + b, cy + a, color);
        canvas.set_pixel(cx - a, cy + b, color);
        canvas.set_pixel(cx - b, cy + a, color);
        canvas.set_pixel(cx - a, cy - b, color);
        canvas.set_pixel(cx - b, cy - a, color);
        canvas.set_pixel(cx + a, cy - b, color);
        canvas.set_pixel(cx + b, cy - a, color);

        b += 1;
        if err < 0 {
            err += 2 * b + 1;
        } else {
            a -= 1;
            err += 2 * (b - a + 1);
        }
    }
}

/// Fill a disc centered at (cx, cy) with horizontal spans.
/// A radius of zero draws nothing.
///
/// Each iteration emits the span pair at cy +/- b. The extra pair at
/// cy +/- a is gated so it lands at most once per distinct a, never while
/// b <= 1; without the gate the octant boundary rows would be filled twice.
pub fn fill_circle(canvas: &mut Canvas, cx: i32, cy: i32, radius: i32, color: ColorIndex) {
    if radius == 0 {
        return;
    }

    let mut a = radius;
    let mut b = 0;
    let mut err = 1 - a;

    // Rows at cy +/- a are skipped at the very top and bottom
    let mut apex_rows_drawn = true;

    while a >= b {
        // This pair sweeps from the horizontal center outward
        canvas.hline(cx + (a - 1), cx - (a - 1), cy + b, color);
        canvas.hline(cx + (a - 1), cx - (a - 1), cy - b, color);

        if b > 1 && !apex_rows_drawn {
            canvas.hline(cx + (b - 1), cx - (b - 1), cy + a, color);
            canvas.hline(cx + (b - 1), cx - (b - 1), cy - a, color);
            apex_rows_drawn = true;
        }

        b += 1;
        if err < 0 {
            err += 2 * b + 1;
        } else {
            a -= 1;
            apex_rows_drawn = false;
            err += 2 * (b - a + 1);
        }
    }
}
