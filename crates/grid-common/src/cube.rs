//! Stacks of grids keyed by z-plane.

use crate::{Grid, GridError, GridResult};
use tracing::trace;

/// A set of XY grids, one per integer z-plane.
#[derive(Debug, Clone, Default)]
pub struct GridCube {
    planes: Vec<(i32, Grid)>,
}

impl GridCube {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a plane. Duplicate `z` values are kept; lookups find the first.
    pub fn insert(&mut self, z: i32, grid: Grid) {
        self.planes.push((z, grid));
    }

    pub fn len(&self) -> usize {
        self.planes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.planes.is_empty()
    }

    /// The grid registered for plane `z`.
    pub fn plane(&self, z: i32) -> Option<&Grid> {
        self.planes
            .iter()
            .find(|(plane_z, _)| *plane_z == z)
            .map(|(_, grid)| grid)
    }

    /// Nearest value at `(x, y)` on plane `z`.
    ///
    /// An unknown plane is not an error and yields `Ok(None)`; querying a cube
    /// with no planes at all is [`GridError::EmptyCube`].
    pub fn value(&self, x: f64, y: f64, z: i32) -> GridResult<Option<f64>> {
        if self.planes.is_empty() {
            return Err(GridError::EmptyCube);
        }

        match self.plane(z) {
            Some(grid) => Ok(grid.closest_value(x, y)),
            None => {
                trace!(z, "z-plane outside cube");
                Ok(None)
            }
        }
    }
}
