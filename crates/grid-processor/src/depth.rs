//! Vertical cross-sections: a grid whose rows are depths.

use grid_common::{CoordinateProjector, Grid, Line};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// Number of samples taken along a cross-section line.
pub const NUM_COLUMNS: usize = 50;

/// One point returned by a volumetric line query.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSample {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// An external volumetric data source (a terrain or bathymetry database).
pub trait VolumeSource {
    /// Sample `count` points from `start` to `end`.
    ///
    /// Returns `None` when the source cannot answer the query.
    fn query_line(
        &self,
        start: (f64, f64),
        end: (f64, f64),
        count: usize,
    ) -> Option<Vec<LineSample>>;
}

/// Distance-vs-depth grid built by sampling a line at several depths.
///
/// Rows are the input depths in the order given. The grid is created by the
/// first depth level that yields data, so it is `None` when no level does.
#[derive(Debug, Clone, Default)]
pub struct DepthGrid {
    grid: Option<Grid>,
}

impl DepthGrid {
    /// Build from volumetric sources, one per depth.
    ///
    /// Columns are the `x` coordinates returned by the first successful
    /// query.
    pub fn from_volume(
        levels: &[(f64, Option<&dyn VolumeSource>)],
        start: (f64, f64),
        end: (f64, f64),
    ) -> Self {
        let depths: Vec<f64> = levels.iter().map(|(depth, _)| *depth).collect();
        let mut grid: Option<Grid> = None;

        for (y, (depth, source)) in levels.iter().enumerate() {
            let Some(samples) = source.and_then(|s| s.query_line(start, end, NUM_COLUMNS)) else {
                trace!(depth, "No volume data for depth");
                continue;
            };

            let grid = grid.get_or_insert_with(|| {
                let columns = samples.iter().map(|s| s.x).collect();
                Grid::new(depths.clone(), columns)
            });

            let width = grid.num_columns();
            for (x, sample) in samples.iter().take(width).enumerate() {
                grid.set(x, y, sample.z);
            }
        }

        debug!(
            levels = levels.len(),
            built = grid.is_some(),
            "Built depth grid from volume sources"
        );
        Self { grid }
    }

    /// Build from horizontal grids, one per depth.
    ///
    /// `start` and `end` are `(lon, lat)`. Columns are great-circle
    /// distances in metres from `start` to each of [`NUM_COLUMNS`] points on
    /// the line. Samples outside a grid, on a no-data cell or negative are
    /// stored as NaN. The output takes the bounds of the first present
    /// source grid.
    pub fn from_grids<P>(
        levels: &[(f64, Option<&Grid>)],
        start: (f64, f64),
        end: (f64, f64),
        projector: &P,
    ) -> Self
    where
        P: CoordinateProjector + ?Sized,
    {
        let depths: Vec<f64> = levels.iter().map(|(depth, _)| *depth).collect();
        let points = Line::new(start, end).points(NUM_COLUMNS);
        let columns: Vec<f64> = points
            .iter()
            .map(|&(lon, lat)| projector.great_circle(start.1, start.0, lat, lon).0)
            .collect();

        let mut grid: Option<Grid> = None;

        for (y, (_, source)) in levels.iter().enumerate() {
            let Some(source) = source else {
                continue;
            };

            let grid = grid.get_or_insert_with(|| match source.bounds() {
                Some(bounds) => Grid::with_bounds(depths.clone(), columns.clone(), *bounds),
                None => Grid::new(depths.clone(), columns.clone()),
            });

            for (x, &(lon, lat)) in points.iter().enumerate() {
                let value = match source.closest_value(lon, lat) {
                    Some(v) if v >= 0.0 => v,
                    _ => f64::NAN,
                };
                grid.set(x, y, value);
            }
        }

        debug!(
            levels = levels.len(),
            built = grid.is_some(),
            "Built depth grid from horizontal grids"
        );
        Self { grid }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn into_grid(self) -> Option<Grid> {
        self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedVolume {
        z: f64,
    }

    impl VolumeSource for FixedVolume {
        fn query_line(
            &self,
            start: (f64, f64),
            end: (f64, f64),
            count: usize,
        ) -> Option<Vec<LineSample>> {
            let line = Line::new(start, end);
            Some(
                line.points(count)
                    .into_iter()
                    .map(|(x, y)| LineSample { x, y, z: self.z })
                    .collect(),
            )
        }
    }

    struct FailingVolume;

    impl VolumeSource for FailingVolume {
        fn query_line(&self, _: (f64, f64), _: (f64, f64), _: usize) -> Option<Vec<LineSample>> {
            None
        }
    }

    #[test]
    fn test_from_volume_columns_from_first_success() {
        let shallow = FailingVolume;
        let mid = FixedVolume { z: 4.0 };
        let deep = FixedVolume { z: 9.0 };
        let levels: Vec<(f64, Option<&dyn VolumeSource>)> = vec![
            (5.0, Some(&shallow)),
            (10.0, None),
            (20.0, Some(&mid)),
            (30.0, Some(&deep)),
        ];

        let depth = DepthGrid::from_volume(&levels, (0.0, 0.0), (49.0, 0.0));
        let grid = depth.grid().unwrap();

        assert_eq!(grid.rows(), &[5.0, 10.0, 20.0, 30.0]);
        assert_eq!(grid.num_columns(), NUM_COLUMNS);
        assert_eq!(grid.columns()[0], 0.0);
        assert_eq!(grid.columns()[49], 49.0);
        assert_eq!(grid.get(0, 0), None);
        assert_eq!(grid.get(0, 1), None);
        assert_eq!(grid.get(10, 2), Some(4.0));
        assert_eq!(grid.get(49, 3), Some(9.0));
    }

    #[test]
    fn test_from_volume_without_data() {
        let levels: Vec<(f64, Option<&dyn VolumeSource>)> = vec![(5.0, Some(&FailingVolume))];
        assert!(DepthGrid::from_volume(&levels, (0.0, 0.0), (1.0, 1.0))
            .grid()
            .is_none());
    }
}
