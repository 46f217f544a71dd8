//! Coordinate conversion for gridview.
//!
//! Implements spherical great-circle maths and a linear viewport
//! projection from scratch. The [`CoordinateProjector`] contract itself
//! lives in `grid-common` so that grids can compute their own envelopes.

pub mod geodesic;
pub mod viewport;

pub use geodesic::{
    destination_point, great_circle, great_circle_nautical, to_nautical_miles, EARTH_RADIUS_M,
    METRES_PER_NAUTICAL_MILE,
};
pub use grid_common::CoordinateProjector;
pub use viewport::{ProjectionError, ViewportProjector};
