//! Random star-shaped rings for benches and property tests.
//!
//! A ring is built by walking once around `center`: the turn is split into
//! `n` random angular gaps, and every vertex gets its own jittered radius.
//! Angles increase monotonically over exactly one turn, so the ring is simple
//! and star-shaped with respect to `center` (which lies inside whenever every
//! gap is below π; always the case for `n >= 5` with the default jitter cap).
//!
//! Draws are keyed by a [`ReplayToken`]; the same token always gives the same ring.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::geom::{Point, Ring};

/// Star sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct StarCfg {
    /// Vertex count is drawn uniformly from `min_vertices..=max_vertices` (at least 3).
    pub min_vertices: usize,
    pub max_vertices: usize,
    /// Relative spread of the angular gaps, clamped to `[0, 0.5]`. Zero gives equal spacing.
    pub gap_jitter: f64,
    /// Radii are `base_radius * (1 + u)` with `u ∈ [-radial_jitter, radial_jitter]`,
    /// floored at 5% of `base_radius`.
    pub radial_jitter: f64,
    pub base_radius: f64,
    pub center: Point,
    /// Rotate the first vertex by a random angle instead of starting at 0.
    pub random_phase: bool,
}

impl StarCfg {
    /// Config drawing exactly `n` vertices.
    pub fn with_vertices(n: usize) -> Self {
        Self {
            min_vertices: n,
            max_vertices: n,
            ..Self::default()
        }
    }
}

impl Default for StarCfg {
    fn default() -> Self {
        Self {
            min_vertices: 12,
            max_vertices: 12,
            gap_jitter: 0.3,
            radial_jitter: 0.5,
            base_radius: 1.0,
            center: Point::zeros(),
            random_phase: true,
        }
    }
}

/// Key of one draw: `seed` picks the stream, `index` the draw within it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    fn rng(self) -> StdRng {
        let mut key = [0u8; 32];
        key[..8].copy_from_slice(&self.seed.to_le_bytes());
        key[8..16].copy_from_slice(&self.index.to_le_bytes());
        StdRng::from_seed(key)
    }

    /// Token for the next draw in the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }
}

/// Draw a simple star-shaped ring (counter-clockwise in y-up, not explicitly closed).
pub fn draw_star_polygon(cfg: StarCfg, tok: ReplayToken) -> Ring {
    let mut rng = tok.rng();
    let lo = cfg.min_vertices.max(3);
    let n = rng.gen_range(lo..=cfg.max_vertices.max(lo));
    let spread = cfg.gap_jitter.clamp(0.0, 0.5);
    let radial = cfg.radial_jitter.max(0.0);
    let r0 = cfg.base_radius.max(1e-9);
    let phase = if cfg.random_phase {
        rng.gen_range(0.0..TAU)
    } else {
        0.0
    };

    let gaps: Vec<f64> = (0..n)
        .map(|_| 1.0 + spread * rng.gen_range(-1.0..=1.0))
        .collect();
    let scale = TAU / gaps.iter().sum::<f64>();

    let mut theta = phase;
    let mut ring = Ring::with_capacity(n);
    for gap in gaps {
        let r = (1.0 + radial * rng.gen_range(-1.0..=1.0)).max(0.05) * r0;
        ring.push(cfg.center + Point::new(theta.cos(), theta.sin()) * r);
        theta += gap * scale;
    }
    ring
}

/// Regular `n`-gon of circumradius `radius` around `center`, first vertex at angle 0.
pub fn regular_polygon(n: usize, radius: f64, center: Point) -> Ring {
    let n = n.max(3);
    (0..n)
        .map(|k| {
            let th = (k as f64) * TAU / (n as f64);
            center + Point::new(radius * th.cos(), radius * th.sin())
        })
        .collect()
}
