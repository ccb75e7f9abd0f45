//! Planar geometry primitives shared by the solver and the hit-testing predicates.
//!
//! Purpose
//! - Keep the point/ring vocabulary in one place: `Point` is the nalgebra
//!   2-vector, a `Ring` is an implicitly closed sequence of points (the first
//!   point may or may not be repeated at the end), and a polygon is a slice of
//!   rings with the outer ring first.
//! - Provide the closed-form, non-iterative predicates (bounding box, even-odd
//!   containment, squared point-to-segment distance, orientation, signed area).
//!
//! Conventions
//! - Coordinates carry no unit; all predicates are exact IEEE evaluations of
//!   their closed forms with no epsilon slack, except `is_closed_polygon`
//!   which uses a fixed area threshold.
//! - Code cross-refs: `poi::point_to_polygon_distance`, `intersect`, `clip`.

mod types;
mod util;

pub use types::{BoundingBox, Point, Ring};
pub use util::{
    bounding_box, closed_edges, crosses_ray, dist_sqr, dist_to_segment_squared,
    is_closed_polygon, is_counter_clockwise, ring_contains_point, rings_contain_point,
    signed_area,
};

#[cfg(test)]
mod tests;
