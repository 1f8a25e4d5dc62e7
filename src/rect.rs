//! Axis-aligned rectangles
//!
//! Thin compositions over the clipped axis spans: corners in, spans out.

use crate::canvas::{Canvas, ColorIndex};

/// Draw a rectangle outline with corners (x0, y0) and (x1, y1), inclusive.
/// Corner order does not matter.
pub fn draw_rect(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: ColorIndex) {
    canvas.hline(x0, x1, y0, color);
    canvas.hline(x0, x1, y1, color);
    canvas.vline(x0, y0, y1, color);
    canvas.vline(x1, y0, y1, color);
}

/// Fill a rectangle with corners (x0, y0) and (x1, y1), inclusive.
/// Corner order does not matter.
pub fn fill_rect(canvas: &mut Canvas, x0: i32, y0: i32, x1: i32, y1: i32, color: ColorIndex) {
    let (y0, y1) = if y0 <= y1 { (y0, y1) } else { (y1, y0) };
    for y in y0..=y1 {
        canvas.hline(x0, x1, y, color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(canvas: &Canvas) -> Vec<(i32, i32)> {
        let mut out = Vec::new();
        for y in 0..canvas.height() as i32 {
            for x in 0..canvas.width() as i32 {
                if canvas.get_pixel(x, y) != Some(0) {
                    out.push((x, y));
                }
            }
        }
        out
    }

    #[test]
    fn test_fill_covers_inclusive_corners() {
        let mut canvas = Canvas::new(32, 32);
        fill_rect(&mut canvas, 3, 4, 10, 9, 1);
        assert_eq!(lit(&canvas).len(), 8 * 6);
        for y in 4..=9 {
            for x in 3..=10 {
                assert_eq!(canvas.get_pixel(x, y), Some(1));
            }
        }
    }

    #[test]
    fn test_corner_order_does_not_matter() {
        let corners = [(3, 4, 10, 9), (10, 9, 3, 4), (3, 9, 10, 4), (10, 4, 3, 9)];
        let mut reference = Canvas::new(32, 32);
        fill_rect(&mut reference, 3, 4, 10, 9, 1);
        let expected = lit(&reference);

        for &(x0, y0, x1, y1) in &corners[1..] {
            let mut canvas = Canvas::new(32, 32);
            fill_rect(&mut canvas, x0, y0, x1, y1, 1);
            assert_eq!(lit(&canvas), expected, "corners ({x0},{y0})-({x1},{y1})");
        }

        let mut outline_a = Canvas::new(32, 32);
        let mut outline_b = Canvas::new(32, 32);
        draw_rect(&mut outline_a, 3, 4, 10, 9, 1);
        draw_rect(&mut outline_b, 10, 9, 3, 4, 1);
        assert_eq!(lit(&outline_a), lit(&outline_b));
    }

    #[test]
    fn test_outline_pixel_count() {
        // Perimeter of an in-bounds w x h rectangle is 2w + 2h - 4
        let mut canvas = Canvas::new(32, 32);
        draw_rect(&mut canvas, 5, 5, 14, 12, 1);
        let w = 10;
        let h = 8;
        assert_eq!(lit(&canvas).len(), 2 * w + 2 * h - 4);
    }

    #[test]
    fn test_outline_leaves_interior_blank() {
        let mut canvas = Canvas::new(32, 32);
        draw_rect(&mut canvas, 5, 5, 14, 12, 1);
        for y in 6..=11 {
            for x in 6..=13 {
                assert_eq!(canvas.get_pixel(x, y), Some(0));
            }
        }
    }

    #[test]
    fn test_fill_clips_to_canvas() {
        let mut canvas = Canvas::new(16, 16);
        fill_rect(&mut canvas, -5, -5, 20, 3, 1);
        assert_eq!(lit(&canvas).len(), 16 * 4);
        for y in 0..=3 {
            for x in 0..16 {
                assert_eq!(canvas.get_pixel(x, y), Some(1));
            }
        }
    }

    #[test]
    fn test_degenerate_rect_is_a_span() {
        let mut canvas = Canvas::new(16, 16);
        fill_rect(&mut canvas, 2, 7, 12, 7, 1);
        assert_eq!(lit(&canvas).len(), 11);

        let mut canvas = Canvas::new(16, 16);
        fill_rect(&mut canvas, 9, 2, 9, 11, 1);
        assert_eq!(lit(&canvas).len(), 10);
    }
}
