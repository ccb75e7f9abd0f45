//! Value types for the pole search: cells, config, result, and errors.

use std::fmt;

use crate::geom::Point;

/// Square search region centered at `center` with half-size `half`.
///
/// Invariant: `bound = distance + half·√2` is an upper bound on the signed
/// distance of every point inside the square.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cell {
    pub center: Point,
    pub half: f64,
    /// Signed distance of `center` to the polygon outline.
    pub distance: f64,
    pub bound: f64,
}

/// Search configuration.
#[derive(Clone, Copy, Debug)]
pub struct PoleCfg {
    /// Tolerance in input units. Negative or NaN is read as `0`.
    pub precision: f64,
    /// Optional cap on evaluated cells, covering both the initial tiling and
    /// subdivision. The centroid seed and its box-center fallback are always
    /// evaluated, so a run costs at most `max(cap, 2)` cells. Long slivers and
    /// ridges of constant distance make small tolerances blow up. `None`
    /// searches until the queue drains.
    pub max_probes: Option<usize>,
}

impl Default for PoleCfg {
    fn default() -> Self {
        Self {
            precision: 1.0,
            max_probes: None,
        }
    }
}

/// Result of a search.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pole {
    pub point: Point,
    /// Signed distance of `point` to the outline (negative if outside).
    pub distance: f64,
    /// Number of distance evaluations (cells built) during the search.
    pub probes: usize,
    /// True when `max_probes` stopped subdivision before the queue drained.
    pub truncated: bool,
}

/// Errors surfaced by the pole search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PoleError {
    /// The outer ring is missing or has no points.
    InvalidPolygon,
}

impl fmt::Display for PoleError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PoleError::InvalidPolygon => write!(f, "invalid polygon: empty outer ring"),
        }
    }
}

impl std::error::Error for PoleError {}
