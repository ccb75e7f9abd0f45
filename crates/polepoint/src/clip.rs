//! Clip multi-lines to an axis-aligned rectangle.
//!
//! Each segment is clipped against the four half-planes `x >= min_x`,
//! `y >= min_y`, `x < max_x`, `y < max_y` in that order. Interpolated points
//! snap to the integer grid (round half up), which is what tile-space callers
//! expect. Consecutive surviving segments are stitched back into one line when
//! the new segment starts where the previous one ended.

use crate::geom::{BoundingBox, Point, Ring};

/// Clip every line in `lines` to `bbox`, returning the surviving pieces.
pub fn clip_line<L: AsRef<[Point]>>(lines: &[L], bbox: BoundingBox) -> Vec<Ring> {
    let BoundingBox {
        min_x: x1,
        min_y: y1,
        max_x: x2,
        max_y: y2,
    } = bbox;
    let mut clipped: Vec<Ring> = Vec::new();

    for line in lines {
        let line = line.as_ref();
        // index into `clipped` of the piece this line is currently extending
        let mut current: Option<usize> = None;

        for seg in line.windows(2) {
            let (mut p0, mut p1) = (seg[0], seg[1]);

            if p0.x < x1 && p1.x < x1 {
                continue;
            }
            if p0.x < x1 {
                p0 = grid_point(x1, p0.y + (p1.y - p0.y) * ((x1 - p0.x) / (p1.x - p0.x)));
            } else if p1.x < x1 {
                p1 = grid_point(x1, p0.y + (p1.y - p0.y) * ((x1 - p0.x) / (p1.x - p0.x)));
            }

            if p0.y < y1 && p1.y < y1 {
                continue;
            }
            if p0.y < y1 {
                p0 = grid_point(p0.x + (p1.x - p0.x) * ((y1 - p0.y) / (p1.y - p0.y)), y1);
            } else if p1.y < y1 {
                p1 = grid_point(p0.x + (p1.x - p0.x) * ((y1 - p0.y) / (p1.y - p0.y)), y1);
            }

            if p0.x >= x2 && p1.x >= x2 {
                continue;
            }
            if p0.x >= x2 {
                p0 = grid_point(x2, p0.y + (p1.y - p0.y) * ((x2 - p0.x) / (p1.x - p0.x)));
            } else if p1.x >= x2 {
                p1 = grid_point(x2, p0.y + (p1.y - p0.y) * ((x2 - p0.x) / (p1.x - p0.x)));
            }

            if p0.y >= y2 && p1.y >= y2 {
                continue;
            }
            if p0.y >= y2 {
                p0 = grid_point(p0.x + (p1.x - p0.x) * ((y2 - p0.y) / (p1.y - p0.y)), y2);
            } else if p1.y >= y2 {
                p1 = grid_point(p0.x + (p1.x - p0.x) * ((y2 - p0.y) / (p1.y - p0.y)), y2);
            }

            match current {
                Some(k) if clipped[k].last() == Some(&p0) => clipped[k].push(p1),
                _ => {
                    clipped.push(vec![p0, p1]);
                    current = Some(clipped.len() - 1);
                }
            }
        }
    }
    clipped
}

#[inline]
fn grid_point(x: f64, y: f64) -> Point {
    Point::new(round_half_up(x), round_half_up(y))
}

/// Round to the nearest integer, ties toward +∞ (`-2.5 → -2`, `2.5 → 3`).
#[inline]
fn round_half_up(v: f64) -> f64 {
    let f = v.floor();
    if v - f >= 0.5 {
        f + 1.0
    } else {
        f
    }
}
