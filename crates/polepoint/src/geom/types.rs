//! Basic planar types.
//!
//! - `Point`: alias for `nalgebra::Vector2<f64>` so callers get vector algebra for free.
//! - `Ring`: owned point sequence, implicitly closed.
//! - `BoundingBox`: axis-aligned extent of a ring.

use nalgebra::Vector2;

/// A point in the plane.
pub type Point = Vector2<f64>;

/// Ordered loop of points; the closing edge from the last point back to the
/// first is implied.
pub type Ring = Vec<Point>;

/// Axis-aligned bounding box `[min_x, max_x] × [min_y, max_y]`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl BoundingBox {
    #[inline]
    pub fn new(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self {
            min_x,
            min_y,
            max_x,
            max_y,
        }
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
    /// Center as `min + extent / 2` per axis.
    #[inline]
    pub fn center(&self) -> Point {
        Point::new(
            self.min_x + self.width() / 2.0,
            self.min_y + self.height() / 2.0,
        )
    }
    /// Closed containment (boundary counts as inside).
    #[inline]
    pub fn contains(&self, p: Point) -> bool {
        self.min_x <= p.x && self.min_y <= p.y && self.max_x >= p.x && self.max_y >= p.y
    }
}
