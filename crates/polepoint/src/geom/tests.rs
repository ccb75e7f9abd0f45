use super::*;

fn ring(coords: &[(f64, f64)]) -> Ring {
    coords.iter().map(|&(x, y)| Point::new(x, y)).collect()
}

#[test]
fn orientation_ccw_cw_collinear_identical() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(1.0, 0.0);
    let c = Point::new(1.0, 1.0);
    assert!(is_counter_clockwise(a, b, c));
    assert!(!is_counter_clockwise(c, b, a));
    assert!(!is_counter_clockwise(a, b, Point::new(2.0, 0.0)));
    let p = Point::new(1.0, 1.0);
    assert!(!is_counter_clockwise(p, p, p));
}

#[test]
fn signed_area_sign_follows_winding() {
    let cw = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
    assert_eq!(signed_area(&cw), 200.0);
    let ccw = ring(&[(0.0, 0.0), (0.0, 10.0), (10.0, 10.0), (10.0, 0.0), (0.0, 0.0)]);
    assert_eq!(signed_area(&ccw), -200.0);
    let tri = ring(&[(0.0, 0.0), (6.0, 0.0), (3.0, 4.0), (0.0, 0.0)]);
    assert_eq!(signed_area(&tri), 24.0);
}

#[test]
fn signed_area_degenerate_rings_are_zero() {
    assert_eq!(signed_area(&[]), 0.0);
    assert_eq!(signed_area(&ring(&[(5.0, 5.0)])), 0.0);
    assert_eq!(signed_area(&ring(&[(0.0, 0.0), (5.0, 5.0)])), 0.0);
    let collapsed = ring(&[(0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (0.0, 0.0), (0.0, 0.0)]);
    assert_eq!(signed_area(&collapsed), 0.0);
}

#[test]
fn closed_polygon_detection() {
    assert!(!is_closed_polygon(&ring(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)])));
    assert!(!is_closed_polygon(&ring(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (0.0, 1.0),
        (1.0, 1.0)
    ])));
    assert!(is_closed_polygon(&ring(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 1.0),
        (0.0, 1.0),
        (0.0, 0.0)
    ])));
    assert!(!is_closed_polygon(&ring(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 0.0),
        (0.0, 0.0),
        (0.0, 0.0)
    ])));
    // |2A| = 0.02 passes the threshold, 0.005 does not.
    assert!(is_closed_polygon(&ring(&[
        (0.0, 0.0),
        (0.1, 0.0),
        (0.1, 0.1),
        (0.0, 0.1),
        (0.0, 0.0)
    ])));
    assert!(!is_closed_polygon(&ring(&[
        (0.0, 0.0),
        (0.05, 0.0),
        (0.05, 0.05),
        (0.0, 0.05),
        (0.0, 0.0)
    ])));
}

#[test]
fn bounding_box_cases() {
    assert_eq!(bounding_box(&[]), BoundingBox::new(0.0, 0.0, 0.0, 0.0));
    assert_eq!(
        bounding_box(&ring(&[(5.0, 3.0)])),
        BoundingBox::new(5.0, 3.0, 5.0, 3.0)
    );
    let irregular = ring(&[(2.0, 1.0), (7.0, 3.0), (5.0, 8.0), (-1.0, 4.0), (2.0, 1.0)]);
    assert_eq!(
        bounding_box(&irregular),
        BoundingBox::new(-1.0, 1.0, 7.0, 8.0)
    );
    let negative = ring(&[(-5.0, -3.0), (-2.0, -7.0), (-8.0, -1.0), (-5.0, -3.0)]);
    assert_eq!(
        bounding_box(&negative),
        BoundingBox::new(-8.0, -7.0, -2.0, -1.0)
    );
    let decimal = ring(&[(1.5, 2.7), (3.2, 1.1), (0.8, 4.9), (1.5, 2.7)]);
    assert_eq!(
        bounding_box(&decimal),
        BoundingBox::new(0.8, 1.1, 3.2, 4.9)
    );
    let horizontal = ring(&[(1.0, 5.0), (3.0, 5.0), (7.0, 5.0), (2.0, 5.0)]);
    let bb = bounding_box(&horizontal);
    assert_eq!(bb.height(), 0.0);
    assert_eq!(bb.width(), 6.0);
}

#[test]
fn segment_distance_projection_and_endpoints() {
    let v = Point::new(0.0, 0.0);
    let w = Point::new(10.0, 0.0);
    assert_eq!(dist_to_segment_squared(Point::new(5.0, 3.0), v, w), 9.0);
    assert_eq!(dist_to_segment_squared(Point::new(-2.0, 3.0), v, w), 13.0);
    assert_eq!(dist_to_segment_squared(Point::new(12.0, 3.0), v, w), 13.0);
    assert_eq!(dist_to_segment_squared(Point::new(5.0, 0.0), v, w), 0.0);
    // zero-length segment
    assert_eq!(dist_to_segment_squared(Point::new(3.0, 4.0), v, v), 25.0);
}

#[test]
fn closed_edges_wraps_around() {
    let r = ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0)]);
    let edges: Vec<_> = closed_edges(&r).collect();
    assert_eq!(edges.len(), 3);
    assert_eq!(edges[0], (r[0], r[2]));
    assert_eq!(edges[1], (r[1], r[0]));
    assert_eq!(edges[2], (r[2], r[1]));
    assert_eq!(closed_edges(&[]).count(), 0);
}

#[test]
fn even_odd_containment_with_holes() {
    let outer = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0)]);
    let hole = ring(&[(4.0, 4.0), (6.0, 4.0), (6.0, 6.0), (4.0, 6.0)]);
    assert!(ring_contains_point(&outer, Point::new(5.0, 5.0)));
    assert!(!ring_contains_point(&outer, Point::new(15.0, 5.0)));
    let poly = vec![outer, hole];
    assert!(!rings_contain_point(&poly, Point::new(5.0, 5.0)));
    assert!(rings_contain_point(&poly, Point::new(2.0, 2.0)));
    // An explicitly closed ring gives the same answer as the implicit one.
    let closed = ring(&[(0.0, 0.0), (10.0, 0.0), (10.0, 10.0), (0.0, 10.0), (0.0, 0.0)]);
    assert!(ring_contains_point(&closed, Point::new(5.0, 5.0)));
}
