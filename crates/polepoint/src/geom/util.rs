use super::types::{BoundingBox, Point};

/// Edges of an implicitly closed ring as `(current, previous)` pairs, starting
/// with `(ring[0], ring[len-1])`. Empty rings yield nothing; a single point
/// yields one zero-length edge.
#[inline]
pub fn closed_edges(ring: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let prev = ring.last().into_iter().chain(ring.iter());
    ring.iter().copied().zip(prev.copied())
}

/// Bounding box of a point sequence; the empty sequence maps to the zero box.
pub fn bounding_box(points: &[Point]) -> BoundingBox {
    if points.is_empty() {
        return BoundingBox::default();
    }
    let mut bb = BoundingBox::new(
        f64::INFINITY,
        f64::INFINITY,
        f64::NEG_INFINITY,
        f64::NEG_INFINITY,
    );
    for p in points {
        if p.x < bb.min_x {
            bb.min_x = p.x;
        }
        if p.y < bb.min_y {
            bb.min_y = p.y;
        }
        if p.x > bb.max_x {
            bb.max_x = p.x;
        }
        if p.y > bb.max_y {
            bb.max_y = p.y;
        }
    }
    bb
}

/// Squared Euclidean distance between two points.
#[inline]
pub fn dist_sqr(p: Point, q: Point) -> f64 {
    let dx = p.x - q.x;
    let dy = p.y - q.y;
    dx * dx + dy * dy
}

/// Squared distance from `p` to the closed segment `[v, w]`.
///
/// The projection parameter is clamped to `[0, 1]`; a zero-length segment
/// degrades to the point distance `|p - v|²`.
pub fn dist_to_segment_squared(p: Point, v: Point, w: Point) -> f64 {
    let l2 = dist_sqr(v, w);
    if l2 == 0.0 {
        return dist_sqr(p, v);
    }
    let t = ((p.x - v.x) * (w.x - v.x) + (p.y - v.y) * (w.y - v.y)) / l2;
    if t < 0.0 {
        return dist_sqr(p, v);
    }
    if t > 1.0 {
        return dist_sqr(p, w);
    }
    let proj = Point::new((w.x - v.x) * t + v.x, (w.y - v.y) * t + v.y);
    dist_sqr(p, proj)
}

/// Whether the horizontal ray from `p` toward +x crosses the edge `(a, b)`.
///
/// Half-open in y (`a.y > p.y != b.y > p.y`) so a vertex on the ray is counted
/// once; horizontal edges never cross and never reach the division.
#[inline]
pub fn crosses_ray(p: Point, a: Point, b: Point) -> bool {
    (a.y > p.y) != (b.y > p.y) && p.x < (b.x - a.x) * (p.y - a.y) / (b.y - a.y) + a.x
}

/// Even-odd containment of `p` in a single ring.
pub fn ring_contains_point(ring: &[Point], p: Point) -> bool {
    closed_edges(ring).fold(false, |inside, (a, b)| inside ^ crosses_ray(p, a, b))
}

/// Even-odd containment across all rings together, so holes invert parity.
pub fn rings_contain_point<R: AsRef<[Point]>>(rings: &[R], p: Point) -> bool {
    rings
        .iter()
        .fold(false, |inside, ring| inside ^ ring_contains_point(ring.as_ref(), p))
}

/// Strict counter-clockwise test for `a → b → c` (y-up). Collinear is `false`.
#[inline]
pub fn is_counter_clockwise(a: Point, b: Point, c: Point) -> bool {
    (c.y - a.y) * (b.x - a.x) > (b.y - a.y) * (c.x - a.x)
}

/// Twice the signed area of a ring. Positive when the ring winds clockwise in
/// y-down (screen/tile) coordinates, which marks an exterior ring; negative
/// for interior rings. Empty → 0.
pub fn signed_area(ring: &[Point]) -> f64 {
    closed_edges(ring).fold(0.0, |sum, (p1, p2)| sum + (p2.x - p1.x) * (p1.y + p2.y))
}

/// Explicitly closed ring (first point repeated last, at least four points)
/// whose area is not negligible.
pub fn is_closed_polygon(points: &[Point]) -> bool {
    // Two points that coincide form a point; three with equal ends form a line.
    if points.len() < 4 {
        return false;
    }
    let first = points[0];
    let last = points[points.len() - 1];
    if (first.x - last.x).abs() > 0.0 || (first.y - last.y).abs() > 0.0 {
        return false;
    }
    // Simplification can leave zero-area rings with many points.
    signed_area(points).abs() > 0.01
}
