//! Pole of inaccessibility: the interior point farthest from any boundary edge.
//!
//! Purpose
//! - Approximate the pole of a polygon with holes to a caller-chosen tolerance
//!   using branch-and-bound over square cells.
//!
//! Model
//! - `point_to_polygon_distance` is the signed distance to the nearest edge of
//!   any ring (positive inside, net of holes). It is 1-Lipschitz, so a cell of
//!   half-size `h` can hold no point better than `distance + h·√2`.
//! - The driver tiles the outer ring's bounding box with square cells, seeds
//!   the incumbent with the area centroid (or the box center when the centroid
//!   is outside or non-finite), then repeatedly pops the cell with the highest
//!   bound, updates the incumbent, and splits cells whose bound still beats the
//!   incumbent by more than `precision`.
//! - All state (queue, incumbent, probe counter) lives in one call.
//!
//! Code cross-refs: `geom::{bounding_box, dist_to_segment_squared, crosses_ray}`.

mod distance;
mod queue;
mod search;
mod types;

pub use distance::{centroid_cell, make_cell, point_to_polygon_distance};
pub use queue::CellQueue;
pub use search::{find_pole, find_pole_of_inaccessibility};
pub use types::{Cell, Pole, PoleCfg, PoleError};
