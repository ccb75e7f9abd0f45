//! PyO3 bindings for selected `polepoint` functions.
//!
//! Notes
//! - Keep bindings thin and predictable: points cross the boundary as `(x, y)`
//!   tuples, polygons as lists of rings.
//! - Solver errors surface as `ValueError`.

use pyo3::prelude::*;

mod common;
mod geom;

#[pymodule]
fn polepoint_native(_py: Python, m: &PyModule) -> PyResult<()> {
    geom::register(m)
}
