//! Placement helpers for the angle scene.

use super::config::FrameConfig;
use kurbo::{Point, Rect};

/// Rows in the summary grid.
pub const GRID_ROWS: usize = 3;

/// Cell centers for `count` shrunken circles, filled column by column from
/// the top-left of the frame.
///
/// The vertical gap is chosen so that three rows of circles with diameter
/// `circle_diameter * scale` split the frame height into equal gaps; the same
/// gap is used horizontally.
pub fn grid_targets(
    frame: &FrameConfig,
    circle_diameter: f64,
    scale: f64,
    count: usize,
) -> Vec<Point> {
    let cd = circle_diameter * scale;
    let buf = (frame.height - GRID_ROWS as f64 * cd) / (GRID_ROWS as f64 + 1.0);
    let x0 = -frame.width / 2.0 + (buf + cd / 2.0);
    let y0 = frame.height / 2.0 - (buf + cd / 2.0);
    let incr = cd + buf;

    (0..count)
        .map(|k| {
            let column = (k / GRID_ROWS) as f64;
            let row = (k % GRID_ROWS) as f64;
            Point::new(x0 + column * incr, y0 - row * incr)
        })
        .collect()
}

/// Center of a box of `size` placed right of `anchor`, tops aligned.
pub fn right_of_top_aligned(anchor: Rect, size: (f64, f64)) -> Point {
    let (width, height) = size;
    Point::new(anchor.x1 + width / 2.0, anchor.y1 - height / 2.0)
}

/// Center of a box of `size` placed left of `anchor`, tops aligned.
pub fn left_of_top_aligned(anchor: Rect, size: (f64, f64)) -> Point {
    let (width, height) = size;
    Point::new(anchor.x0 - width / 2.0, anchor.y1 - height / 2.0)
}

/// Centers for boxes of `sizes` stacked downward from `top`, left edges on
/// `left`, with `spacing` between consecutive boxes.
pub fn stacked_left_aligned(left: f64, top: f64, sizes: &[(f64, f64)], spacing: f64) -> Vec<Point> {
    let mut y = top;
    sizes
        .iter()
        .map(|&(width, height)| {
            let center = Point::new(left + width / 2.0, y - height / 2.0);
            y -= height + spacing;
            center
        })
        .collect()
}
