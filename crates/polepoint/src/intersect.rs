//! Hit-testing predicates between polygons, polylines, buffered points and boxes.
//!
//! These are independent peers of the solver: closed-form, no search state.
//! Polygons passed here are treated as polylines when walking edges, so a ring
//! only contributes its closing edge if the first point is repeated last.
//! Containment uses the even-odd rule (`geom::ring_contains_point`).
//!
//! Code cross-refs: `geom::{dist_to_segment_squared, is_counter_clockwise, bounding_box}`.

use crate::geom::{
    bounding_box, dist_sqr, dist_to_segment_squared, is_counter_clockwise, ring_contains_point,
    rings_contain_point, BoundingBox, Point,
};

/// Closed-interval overlap of two boxes (touching edges intersect).
#[inline]
pub fn boxes_intersect(a: &BoundingBox, b: &BoundingBox) -> bool {
    !(a.max_x < b.min_x || b.max_x < a.min_x || a.max_y < b.min_y || b.max_y < a.min_y)
}

/// Whether two polygons share any area or edge crossing. Empty inputs never intersect.
pub fn polygon_intersects_polygon(a: &[Point], b: &[Point]) -> bool {
    if a.is_empty() || b.is_empty() {
        return false;
    }
    if !boxes_intersect(&bounding_box(a), &bounding_box(b)) {
        return false;
    }
    if a.iter().any(|&p| ring_contains_point(b, p)) {
        return true;
    }
    if b.iter().any(|&p| ring_contains_point(a, p)) {
        return true;
    }
    line_intersects_line(a, b)
}

/// Whether a polygon touches the disc of `radius` around `point`.
///
/// The boundary test is strict: a point exactly `radius` away does not hit.
pub fn polygon_intersects_buffered_point(polygon: &[Point], point: Point, radius: f64) -> bool {
    ring_contains_point(polygon, point) || point_intersects_buffered_line(point, polygon, radius)
}

/// Whether a polygon intersects any ring of a multi-polygon (rings combined by even-odd).
pub fn polygon_intersects_multi_polygon<R: AsRef<[Point]>>(
    polygon: &[Point],
    multi_polygon: &[R],
) -> bool {
    if polygon.len() == 1 {
        return rings_contain_point(multi_polygon, polygon[0]);
    }
    let vertex_inside = multi_polygon
        .iter()
        .flat_map(|ring| ring.as_ref().iter())
        .any(|&p| ring_contains_point(polygon, p));
    if vertex_inside {
        return true;
    }
    if polygon
        .iter()
        .any(|&p| rings_contain_point(multi_polygon, p))
    {
        return true;
    }
    multi_polygon
        .iter()
        .any(|line| line_intersects_line(polygon, line.as_ref()))
}

/// Whether a polygon intersects any line of a multi-line widened by `radius`.
pub fn polygon_intersects_buffered_multi_line<L: AsRef<[Point]>>(
    polygon: &[Point],
    multi_line: &[L],
    radius: f64,
) -> bool {
    for line in multi_line {
        let line = line.as_ref();
        if polygon.len() >= 3 && line.iter().any(|&p| ring_contains_point(polygon, p)) {
            return true;
        }
        if line_intersects_buffered_line(polygon, line, radius) {
            return true;
        }
    }
    false
}

/// Whether a ring (or polyline) intersects the closed box `bbox`.
pub fn polygon_intersects_box(ring: &[Point], bbox: BoundingBox) -> bool {
    if ring.iter().any(|&p| bbox.contains(p)) {
        return true;
    }
    let corners = [
        Point::new(bbox.min_x, bbox.min_y),
        Point::new(bbox.min_x, bbox.max_y),
        Point::new(bbox.max_x, bbox.max_y),
        Point::new(bbox.max_x, bbox.min_y),
    ];
    if ring.len() > 2 && corners.iter().any(|&c| ring_contains_point(ring, c)) {
        return true;
    }
    ring.windows(2)
        .any(|e| edge_intersects_box(e[0], e[1], &corners))
}

fn edge_intersects_box(e1: Point, e2: Point, corners: &[Point; 4]) -> bool {
    let tl = corners[0];
    let br = corners[2];
    // disjoint along x or y
    if (e1.x < tl.x && e2.x < tl.x)
        || (e1.x > br.x && e2.x > br.x)
        || (e1.y < tl.y && e2.y < tl.y)
        || (e1.y > br.y && e2.y > br.y)
    {
        return false;
    }
    // straddles unless every corner lies on the same side of the edge
    let dir = is_counter_clockwise(e1, e2, corners[0]);
    corners[1..]
        .iter()
        .any(|&c| is_counter_clockwise(e1, e2, c) != dir)
}

fn line_intersects_buffered_line(a: &[Point], b: &[Point], radius: f64) -> bool {
    if a.len() > 1 {
        if line_intersects_line(a, b) {
            return true;
        }
        if b
            .iter()
            .any(|&p| point_intersects_buffered_line(p, a, radius))
        {
            return true;
        }
    }
    a.iter()
        .any(|&p| point_intersects_buffered_line(p, b, radius))
}

/// Any pair of segments from the two polylines crosses.
fn line_intersects_line(a: &[Point], b: &[Point]) -> bool {
    a.windows(2).any(|sa| {
        b.windows(2)
            .any(|sb| segments_intersect(sa[0], sa[1], sb[0], sb[1]))
    })
}

/// Proper crossing of `[a0, a1]` and `[b0, b1]` via orientation parity.
#[inline]
fn segments_intersect(a0: Point, a1: Point, b0: Point, b1: Point) -> bool {
    is_counter_clockwise(a0, b0, b1) != is_counter_clockwise(a1, b0, b1)
        && is_counter_clockwise(a0, a1, b0) != is_counter_clockwise(a0, a1, b1)
}

fn point_intersects_buffered_line(p: Point, line: &[Point], radius: f64) -> bool {
    let r2 = radius * radius;
    if line.len() == 1 {
        return dist_sqr(p, line[0]) < r2;
    }
    line.windows(2)
        .any(|s| dist_to_segment_squared(p, s[0], s[1]) < r2)
}
