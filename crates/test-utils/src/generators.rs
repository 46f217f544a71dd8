//! Test data generators for grids, radials and projectors.
//!
//! These generators create predictable, verifiable data patterns that can be
//! used across the test suite.

use grid_common::{CoordinateProjector, Grid, GridBounds};

/// Creates a grid with regular unit spacing and predictable values.
///
/// Columns are `0..width`, rows are `0..height` and each cell value is
/// `col * 1000 + row`.
///
/// # Example
///
/// ```
/// use test_utils::create_test_grid;
///
/// let grid = create_test_grid(10, 5);
/// assert_eq!(grid.num_columns(), 10);
/// assert_eq!(grid.get(1, 0), Some(1000.0));
/// assert_eq!(grid.get(0, 1), Some(1.0));
/// ```
pub fn create_test_grid(width: usize, height: usize) -> Grid {
    create_grid_with(width, height, |col, row| (col * 1000 + row) as f64)
}

/// Creates a unit-spaced grid whose values come from `value(col, row)`.
pub fn create_grid_with<F>(width: usize, height: usize, value: F) -> Grid
where
    F: Fn(usize, usize) -> f64,
{
    let rows = (0..height).map(|r| r as f64).collect();
    let columns = (0..width).map(|c| c as f64).collect();
    let mut grid = Grid::new(rows, columns);
    for row in 0..height {
        for col in 0..width {
            grid.set(col, row, value(col, row));
        }
    }
    grid
}

/// Creates a geographic grid covering `[min_lon, max_lon] x [min_lat, max_lat]`
/// with cell nodes on a regular lattice and bounds set to the extent.
///
/// Rows run north to south like a loaded ASCII grid. Values grow eastwards
/// from `base` in steps of 1.
pub fn create_geo_grid(
    width: usize,
    height: usize,
    (min_lon, min_lat, max_lon, max_lat): (f64, f64, f64, f64),
    base: f64,
) -> Grid {
    let dx = (max_lon - min_lon) / (width.max(2) - 1) as f64;
    let dy = (max_lat - min_lat) / (height.max(2) - 1) as f64;
    let rows = (0..height).map(|r| max_lat - r as f64 * dy).collect();
    let columns = (0..width).map(|c| min_lon + c as f64 * dx).collect();
    let bounds = GridBounds::new(min_lon, max_lon, min_lat, max_lat);
    let mut grid = Grid::with_bounds(rows, columns, bounds);
    for row in 0..height {
        for col in 0..width {
            grid.set(col, row, base + col as f64);
        }
    }
    grid
}

/// Creates a radial grid: columns are distances in metres, rows are the
/// `sample_rows` coordinates, every cell holds `value`.
pub fn create_radial_grid(distances: &[f64], sample_rows: &[f64], value: f64) -> Grid {
    let mut grid = Grid::new(sample_rows.to_vec(), distances.to_vec());
    for row in 0..sample_rows.len() {
        for col in 0..distances.len() {
            grid.set(col, row, value);
        }
    }
    grid
}

/// Projector that maps lon/lat straight onto device x/y, scaled.
///
/// Device y grows with latitude, so device rectangles and geographic
/// rectangles share orientation. Great-circle maths is spherical.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IdentityProjector {
    pub scale: f64,
}

impl Default for IdentityProjector {
    fn default() -> Self {
        Self { scale: 1.0 }
    }
}

impl CoordinateProjector for IdentityProjector {
    fn device_to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        (x / self.scale, y / self.scale)
    }

    fn geo_to_device(&self, lon: f64, lat: f64) -> (f64, f64) {
        (lon * self.scale, lat * self.scale)
    }

    fn great_circle(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
        projection::great_circle(lat1, lon1, lat2, lon2)
    }

    fn point_at_bearing(&self, lat: f64, lon: f64, bearing: f64, distance: f64) -> (f64, f64) {
        projection::destination_point(lat, lon, bearing, distance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_test_grid_pattern() {
        let grid = create_test_grid(4, 3);
        assert_eq!(grid.get(3, 2), Some(3002.0));
        assert_eq!(grid.min_z(), 0.0);
        assert_eq!(grid.max_z(), 3002.0);
    }

    #[test]
    fn test_create_geo_grid_layout() {
        let grid = create_geo_grid(3, 3, (0.0, 0.0, 2.0, 2.0), 5.0);
        assert_eq!(grid.rows(), &[2.0, 1.0, 0.0]);
        assert_eq!(grid.columns(), &[0.0, 1.0, 2.0]);
        assert_eq!(grid.closest_value(2.0, 0.0), Some(7.0));
        assert_eq!(grid.closest_value(3.0, 0.0), None);
    }

    #[test]
    fn test_identity_projector() {
        let projector = IdentityProjector { scale: 2.0 };
        assert_eq!(projector.geo_to_device(1.0, 3.0), (2.0, 6.0));
        assert_eq!(projector.device_to_geo(2.0, 6.0), (1.0, 3.0));
    }
}
