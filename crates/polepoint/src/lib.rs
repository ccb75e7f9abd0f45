//! Pole of inaccessibility search and planar hit-testing.
//!
//! Layout
//! - `geom`: point/ring/box vocabulary and closed-form primitives.
//! - `poi`: branch-and-bound search for the interior point farthest from the outline.
//! - `intersect`, `clip`: hit-testing and tile clipping built on the same primitives.
//! - `rand`: reproducible random rings for benches and property tests.
//!
//! Polygons are slices of rings, outer ring first, holes after; anything that
//! derefs to `[Point]` works as a ring.

pub mod clip;
pub mod geom;
pub mod intersect;
pub mod poi;
pub mod rand;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use geom::{BoundingBox, Point, Ring};
pub use poi::{find_pole, find_pole_of_inaccessibility, Pole, PoleCfg, PoleError};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::clip::clip_line;
    pub use crate::geom::{
        bounding_box, dist_to_segment_squared, ring_contains_point, rings_contain_point,
        BoundingBox, Point, Ring,
    };
    pub use crate::intersect::{
        boxes_intersect, polygon_intersects_box, polygon_intersects_buffered_multi_line,
        polygon_intersects_buffered_point, polygon_intersects_multi_polygon,
        polygon_intersects_polygon,
    };
    pub use crate::poi::{
        find_pole, find_pole_of_inaccessibility, point_to_polygon_distance, Pole, PoleCfg,
        PoleError,
    };
}
