//! Signed distance to a polygon with holes, cell construction, and the centroid seed.

use std::f64::consts::SQRT_2;

use crate::geom::{closed_edges, crosses_ray, dist_to_segment_squared, Point};

use super::types::Cell;

/// Below this `|3·Σ cross|` the outer ring is treated as zero-area.
const CENTROID_AREA_EPS: f64 = 1e-10;

/// Signed distance from `p` to the nearest edge of any ring: positive inside
/// (even-odd over all rings, so holes flip parity), negative outside.
///
/// Rings are implicitly closed. NaN coordinates propagate as a non-finite
/// result rather than a panic.
pub fn point_to_polygon_distance<R: AsRef<[Point]>>(p: Point, rings: &[R]) -> f64 {
    let mut inside = false;
    let mut min_dist_sq = f64::INFINITY;

    for ring in rings {
        for (a, b) in closed_edges(ring.as_ref()) {
            if crosses_ray(p, a, b) {
                inside = !inside;
            }
            let d = dist_to_segment_squared(p, a, b);
            if d < min_dist_sq {
                min_dist_sq = d;
            }
        }
    }

    let min_dist = min_dist_sq.sqrt();
    if inside {
        min_dist
    } else {
        -min_dist
    }
}

/// Build a cell at `(x, y)` with half-size `h`. `h = 0` is a single sample point.
pub fn make_cell<R: AsRef<[Point]>>(x: f64, y: f64, h: f64, rings: &[R]) -> Cell {
    let center = Point::new(x, y);
    let distance = point_to_polygon_distance(center, rings);
    Cell {
        center,
        half: h,
        distance,
        bound: distance + h * SQRT_2,
    }
}

/// Zero-size cell at the outer ring's area centroid.
///
/// Zero-area outer rings fall back to their first point; an empty or missing
/// outer ring yields the origin.
pub fn centroid_cell<R: AsRef<[Point]>>(rings: &[R]) -> Cell {
    let points = match rings.first().map(|r| r.as_ref()) {
        Some(points) if !points.is_empty() => points,
        _ => return make_cell(0.0, 0.0, 0.0, rings),
    };

    let mut area = 0.0;
    let mut x = 0.0;
    let mut y = 0.0;
    for (a, b) in closed_edges(points) {
        let f = a.x * b.y - b.x * a.y;
        x += (a.x + b.x) * f;
        y += (a.y + b.y) * f;
        area += f * 3.0;
    }

    if area.abs() < CENTROID_AREA_EPS {
        return make_cell(points[0].x, points[0].y, 0.0, rings);
    }
    make_cell(x / area, y / area, 0.0, rings)
}
