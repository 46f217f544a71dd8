//! Derived views over depth-keyed grids.
//!
//! A survey is usually delivered as one horizontal [`Grid`] per depth. This
//! crate turns such a set into secondary views:
//!
//! ```text
//! DepthStack (depth, property) -> Grid
//!      │
//!      ├─► DepthGrid: sample a line across every depth
//!      │        rows = depths, columns = distance along the line
//!      │
//!      └─► DepthProfile: one column of a DepthGrid
//!               (depth, value) pairs plus axis ranges for plotting
//! ```
//!
//! [`Grid`]: grid_common::Grid

pub mod depth;
pub mod error;
pub mod profile;
pub mod stack;

// Re-export commonly used types at crate root
pub use depth::{DepthGrid, LineSample, VolumeSource, NUM_COLUMNS};
pub use error::{ProcessorError, Result};
pub use profile::{DepthProfile, ProfilePoint, DEFAULT_MARGIN_PERCENT};
pub use stack::{DepthLayer, DepthStack};
