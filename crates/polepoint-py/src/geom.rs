//! Solver and hit-testing bindings (kept separate so `lib.rs` stays tiny).

use crate::common::{from_point, map_pole_err, to_point, to_ring, to_rings, PyPoint};
use polepoint::BoundingBox;
use pyo3::prelude::*;

/// Pole of inaccessibility of `rings` (outer ring first) to within `precision`.
#[pyfunction]
#[pyo3(signature = (rings, precision = 1.0))]
pub fn find_pole_of_inaccessibility(rings: Vec<Vec<PyPoint>>, precision: f64) -> PyResult<PyPoint> {
    polepoint::find_pole_of_inaccessibility(&to_rings(rings), precision)
        .map(from_point)
        .map_err(map_pole_err)
}

/// Signed distance from `point` to the polygon boundary; positive inside.
#[pyfunction]
pub fn point_to_polygon_distance(point: PyPoint, rings: Vec<Vec<PyPoint>>) -> f64 {
    polepoint::poi::point_to_polygon_distance(to_point(point), &to_rings(rings))
}

#[pyfunction]
pub fn polygon_intersects_buffered_point(ring: Vec<PyPoint>, point: PyPoint, radius: f64) -> bool {
    polepoint::intersect::polygon_intersects_buffered_point(&to_ring(ring), to_point(point), radius)
}

/// Clip polylines to the box `[x1, x2] x [y1, y2]`, snapping crossings to whole units.
#[pyfunction]
pub fn clip_line(
    lines: Vec<Vec<PyPoint>>,
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
) -> Vec<Vec<PyPoint>> {
    polepoint::clip::clip_line(&to_rings(lines), BoundingBox::new(x1, y1, x2, y2))
        .into_iter()
        .map(|line| line.into_iter().map(from_point).collect())
        .collect()
}

pub fn register(m: &PyModule) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(find_pole_of_inaccessibility, m)?)?;
    m.add_function(wrap_pyfunction!(point_to_polygon_distance, m)?)?;
    m.add_function(wrap_pyfunction!(polygon_intersects_buffered_point, m)?)?;
    m.add_function(wrap_pyfunction!(clip_line, m)?)?;
    Ok(())
}
