//! Common types shared across the gridview workspace.
//!
//! - [`Grid`]: a 2D array of optional samples over irregular row/column axes
//! - [`GridCube`]: a stack of grids keyed by z-plane
//! - [`Line`]: equally spaced points between two coordinates
//! - [`Filter`]: threshold band predicate
//! - [`Rect`]: axis-aligned rectangle in device or map units
//! - [`CoordinateProjector`]: the geo/device conversion contract

pub mod bbox;
pub mod cube;
pub mod error;
pub mod filter;
pub mod grid;
pub mod line;
pub mod projector;

pub use bbox::Rect;
pub use cube::GridCube;
pub use error::{GridError, GridResult};
pub use filter::Filter;
pub use grid::{closest_index, trip_bucket, Grid, GridBounds, Range, Sample};
pub use line::Line;
pub use projector::CoordinateProjector;
