use polepoint::{Point, PoleError, Ring};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

pub type PyPoint = (f64, f64);

pub fn to_point((x, y): PyPoint) -> Point {
    Point::new(x, y)
}

pub fn from_point(p: Point) -> PyPoint {
    (p.x, p.y)
}

pub fn to_ring(ring: Vec<PyPoint>) -> Ring {
    ring.into_iter().map(to_point).collect()
}

pub fn to_rings(rings: Vec<Vec<PyPoint>>) -> Vec<Ring> {
    rings.into_iter().map(to_ring).collect()
}

pub fn map_pole_err(err: PoleError) -> PyErr {
    PyValueError::new_err(err.to_string())
}
