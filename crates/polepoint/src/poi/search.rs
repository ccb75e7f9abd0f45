//! Branch-and-bound driver.

use tracing::{debug, trace, warn};

use crate::geom::{bounding_box, Point};

use super::distance::{centroid_cell, make_cell};
use super::queue::CellQueue;
use super::types::{Cell, Pole, PoleCfg, PoleError};

/// Approximate the pole of inaccessibility of `polygon` (outer ring first,
/// then holes) to within `precision` input units.
///
/// Fails only when the outer ring is missing or empty; degenerate but
/// non-empty rings (a point, collinear points, zero area) return a point.
pub fn find_pole_of_inaccessibility<R: AsRef<[Point]>>(
    polygon: &[R],
    precision: f64,
) -> Result<Point, PoleError> {
    let cfg = PoleCfg {
        precision,
        ..PoleCfg::default()
    };
    find_pole(polygon, &cfg).map(|pole| pole.point)
}

/// Like [`find_pole_of_inaccessibility`] but with full config and a detailed result.
pub fn find_pole<R: AsRef<[Point]>>(polygon: &[R], cfg: &PoleCfg) -> Result<Pole, PoleError> {
    let outer = match polygon.first().map(|r| r.as_ref()) {
        Some(outer) if !outer.is_empty() => outer,
        _ => return Err(PoleError::InvalidPolygon),
    };
    Ok(SearchRunner::new(polygon, cfg).solve(outer))
}

/// Pick the initial incumbent from the centroid seed.
///
/// The box-center fallback is only built when the centroid is outside or
/// non-finite. A non-finite centroid always loses to the fallback, even when
/// the fallback's own distance is lower.
pub(super) fn select_seed(centroid: Cell, fallback: impl FnOnce() -> Cell) -> Cell {
    if centroid.distance < 0.0 || !centroid.distance.is_finite() {
        let center = fallback();
        if center.distance > centroid.distance || !centroid.distance.is_finite() {
            return center;
        }
    }
    centroid
}

/// One search invocation: borrowed rings, tolerance, and the probe counter.
struct SearchRunner<'a, R> {
    rings: &'a [R],
    precision: f64,
    max_probes: Option<usize>,
    probes: usize,
}

impl<'a, R: AsRef<[Point]>> SearchRunner<'a, R> {
    fn new(rings: &'a [R], cfg: &PoleCfg) -> Self {
        Self {
            rings,
            // f64::max maps NaN to the other operand
            precision: cfg.precision.max(0.0),
            max_probes: cfg.max_probes,
            probes: 0,
        }
    }

    #[inline]
    fn cell(&mut self, x: f64, y: f64, h: f64) -> Cell {
        self.probes += 1;
        make_cell(x, y, h, self.rings)
    }

    fn finish(&self, best: Cell, truncated: bool) -> Pole {
        debug!(
            distance = best.distance,
            probes = self.probes,
            truncated,
            "pole search finished"
        );
        Pole {
            point: best.center,
            distance: best.distance,
            probes: self.probes,
            truncated,
        }
    }

    fn solve(mut self, outer: &[Point]) -> Pole {
        let bb = bounding_box(outer);
        let width = bb.width();
        let height = bb.height();
        let cell_size = width.min(height);

        // Collinear or coincident outer ring, or an unbounded one: nothing to search.
        if cell_size == 0.0 || !width.is_finite() || !height.is_finite() {
            let corner = self.cell(bb.min_x, bb.min_y, 0.0);
            return self.finish(corner, false);
        }

        // The centroid and box-center seeds are always evaluated.
        let tile_budget = self.max_probes.map(|cap| cap.saturating_sub(2));
        let h = cell_size / 2.0;
        let mut seeds = Vec::new();
        let mut tiling_cut = false;
        let mut x = bb.min_x;
        'tiles: while x < bb.max_x {
            let mut y = bb.min_y;
            while y < bb.max_y {
                if tile_budget.is_some_and(|budget| seeds.len() >= budget) {
                    tiling_cut = true;
                    break 'tiles;
                }
                seeds.push(self.cell(x + h, y + h, h));
                y += cell_size;
            }
            x += cell_size;
        }

        let centroid = centroid_cell(self.rings);
        self.probes += 1;
        let center = bb.center();
        let mut best = select_seed(centroid, || self.cell(center.x, center.y, 0.0));
        trace!(distance = best.distance, "seeded incumbent");

        if tiling_cut {
            warn!(
                tiles = seeds.len(),
                "probe cap reached while tiling; returning best seed"
            );
            for cell in seeds {
                if cell.distance > best.distance || best.distance == 0.0 {
                    best = cell;
                }
            }
            return self.finish(best, true);
        }

        let mut queue = CellQueue::from_cells(seeds);

        while let Some(cell) = queue.pop() {
            // A zero incumbent (seed on the outline) is always replaced.
            if cell.distance > best.distance || best.distance == 0.0 {
                best = cell;
                trace!(distance = best.distance, probes = self.probes, "found best");
            }

            if cell.bound - best.distance <= self.precision {
                continue;
            }

            if let Some(cap) = self.max_probes {
                if self.probes + 4 > cap {
                    warn!(
                        cap,
                        pending = queue.len() + 1,
                        "probe cap reached; returning best so far"
                    );
                    return self.finish(best, true);
                }
            }

            let h = cell.half / 2.0;
            let c = cell.center;
            queue.push(self.cell(c.x - h, c.y - h, h));
            queue.push(self.cell(c.x + h, c.y - h, h));
            queue.push(self.cell(c.x - h, c.y + h, h));
            queue.push(self.cell(c.x + h, c.y + h, h));
        }

        self.finish(best, false)
    }
}
