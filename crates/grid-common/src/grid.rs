//! Grids of optional samples over ordered coordinate axes.
//!
//! A [`Grid`] stores one optional value per (row, column) cell. The axes are
//! arbitrary monotonic sequences, so irregular spacing is allowed. Rows are
//! usually latitude (or depth for derived views) and columns longitude (or
//! distance along a line).

use crate::{CoordinateProjector, GridError, GridResult, Rect};
use serde::{Deserialize, Serialize};

/// Declared extent of a grid in its own axis units.
///
/// Any NaN component marks the extent as incomplete, in which case every
/// point is accepted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridBounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl GridBounds {
    pub fn new(min_x: f64, max_x: f64, min_y: f64, max_y: f64) -> Self {
        Self {
            min_x,
            max_x,
            min_y,
            max_y,
        }
    }

    /// Bounds with no known extent; accepts every point.
    pub fn unset() -> Self {
        Self::new(f64::NAN, f64::NAN, f64::NAN, f64::NAN)
    }

    /// True when all four components are known.
    pub fn is_complete(&self) -> bool {
        !(self.min_x.is_nan() || self.max_x.is_nan() || self.min_y.is_nan() || self.max_y.is_nan())
    }

    /// Check whether a point lies inside (inclusive) the bounds.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        if !self.is_complete() {
            return true;
        }
        x >= self.min_x && y >= self.min_y && x <= self.max_x && y <= self.max_y
    }
}

/// Outcome of a nearest-cell query.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Sample {
    /// The query point lies outside the grid bounds.
    OutOfBounds,
    /// The nearest cell holds no value.
    NoData,
    /// The nearest cell value.
    Value(f64),
}

impl Sample {
    /// Collapse into an option, treating both empty cases alike.
    pub fn value(self) -> Option<f64> {
        match self {
            Sample::Value(v) => Some(v),
            Sample::OutOfBounds | Sample::NoData => None,
        }
    }
}

/// A run of cells in one row that fall in the same trip band.
///
/// `start` and `end` are inclusive column indices.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Range {
    pub trip: f64,
    pub start: usize,
    pub end: usize,
}

impl Range {
    /// Number of cells covered.
    pub fn cell_count(&self) -> usize {
        self.end - self.start + 1
    }
}

/// Band a value belongs to: the largest trip not above it.
///
/// `trips` must be sorted ascending. Missing values, NaN values and values
/// below every trip have no band (NaN).
pub fn trip_bucket(trips: &[f64], value: Option<f64>) -> f64 {
    match value {
        Some(v) if !v.is_nan() => trips
            .iter()
            .rev()
            .find(|&&trip| trip <= v)
            .copied()
            .unwrap_or(f64::NAN),
        _ => f64::NAN,
    }
}

/// Index of the axis element nearest to `target`.
///
/// The axis must be monotonic: the scan stops as soon as the distance starts
/// growing again. Returns `None` for an empty axis.
pub fn closest_index(axis: &[f64], target: f64) -> Option<usize> {
    if axis.is_empty() {
        return None;
    }

    let mut closest = 0;
    let mut min_difference = f64::MAX;
    let mut min_difference_set = false;

    for (i, &value) in axis.iter().enumerate() {
        let difference = (value - target).abs();
        if difference < min_difference {
            min_difference = difference;
            closest = i;
            min_difference_set = true;
        } else if min_difference_set && difference > min_difference {
            break;
        }
    }

    Some(closest)
}

/// A rectangular grid of optional scalar values.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: Vec<f64>,
    columns: Vec<f64>,
    /// Row-major cells, `rows.len() * columns.len()` long.
    cells: Vec<Option<f64>>,
    bounds: Option<GridBounds>,
    min_z: f64,
    max_z: f64,
}

impl Grid {
    /// Create an empty grid over the given axes.
    pub fn new(rows: Vec<f64>, columns: Vec<f64>) -> Self {
        let cells = vec![None; rows.len() * columns.len()];
        Self {
            rows,
            columns,
            cells,
            bounds: None,
            min_z: f64::INFINITY,
            max_z: f64::NEG_INFINITY,
        }
    }

    /// Create an empty grid that rejects queries outside `bounds`.
    pub fn with_bounds(rows: Vec<f64>, columns: Vec<f64>, bounds: GridBounds) -> Self {
        let mut grid = Self::new(rows, columns);
        grid.bounds = Some(bounds);
        grid
    }

    pub fn rows(&self) -> &[f64] {
        &self.rows
    }

    pub fn columns(&self) -> &[f64] {
        &self.columns
    }

    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    pub fn bounds(&self) -> Option<&GridBounds> {
        self.bounds.as_ref()
    }

    /// Smallest value written so far (`+inf` before any write).
    pub fn min_z(&self) -> f64 {
        self.min_z
    }

    /// Largest value written so far (`-inf` before any write).
    pub fn max_z(&self) -> f64 {
        self.max_z
    }

    /// True once a comparable value has been written.
    pub fn has_data(&self) -> bool {
        self.min_z != f64::INFINITY && self.max_z != f64::NEG_INFINITY
    }

    fn offset(&self, x: usize, y: usize) -> GridResult<usize> {
        if x >= self.columns.len() || y >= self.rows.len() {
            return Err(GridError::index_out_of_range(
                x,
                y,
                self.columns.len(),
                self.rows.len(),
            ));
        }
        Ok(y * self.columns.len() + x)
    }

    /// Value at column `x`, row `y`, or an error when out of range.
    pub fn try_get(&self, x: usize, y: usize) -> GridResult<Option<f64>> {
        let offset = self.offset(x, y)?;
        Ok(self.cells[offset])
    }

    /// Value at column `x`, row `y`.
    ///
    /// # Panics
    ///
    /// Panics if `x >= num_columns()` or `y >= num_rows()`.
    pub fn get(&self, x: usize, y: usize) -> Option<f64> {
        match self.try_get(x, y) {
            Ok(value) => value,
            Err(err) => panic!("{}", err),
        }
    }

    /// Store a value, returning an error when out of range.
    pub fn try_set(&mut self, x: usize, y: usize, value: f64) -> GridResult<()> {
        let offset = self.offset(x, y)?;

        self.min_z = if value < self.min_z { value } else { self.min_z };
        self.max_z = if value > self.max_z { value } else { self.max_z };
        self.cells[offset] = Some(value);

        Ok(())
    }

    /// Store a value at column `x`, row `y` and widen the z range.
    ///
    /// # Panics
    ///
    /// Panics if `x >= num_columns()` or `y >= num_rows()`.
    pub fn set(&mut self, x: usize, y: usize, value: f64) {
        if let Err(err) = self.try_set(x, y, value) {
            panic!("{}", err);
        }
    }

    /// Nearest-cell lookup distinguishing out-of-bounds from missing data.
    pub fn sample(&self, x: f64, y: f64) -> Sample {
        if let Some(bounds) = &self.bounds {
            if !bounds.contains(x, y) {
                return Sample::OutOfBounds;
            }
        }

        let (Some(column), Some(row)) = (
            closest_index(&self.columns, x),
            closest_index(&self.rows, y),
        ) else {
            return Sample::NoData;
        };

        match self.get(column, row) {
            Some(value) => Sample::Value(value),
            None => Sample::NoData,
        }
    }

    /// Value of the cell nearest to `(x, y)` in axis units.
    ///
    /// `None` both outside the bounds and on a cell without data; use
    /// [`Grid::sample`] to tell the two apart.
    pub fn closest_value(&self, x: f64, y: f64) -> Option<f64> {
        self.sample(x, y).value()
    }

    /// Split a row into runs of cells sharing a trip band.
    ///
    /// `trips` is sorted in place. Cells without a band end the current run
    /// and are never covered by a returned range.
    ///
    /// # Panics
    ///
    /// Panics if `row >= num_rows()`.
    pub fn row_ranges(&self, row: usize, trips: &mut [f64]) -> Vec<Range> {
        if row >= self.rows.len() {
            panic!(
                "{}",
                GridError::index_out_of_range(0, row, self.columns.len(), self.rows.len())
            );
        }

        trips.sort_by(|a, b| a.total_cmp(b));

        let mut ranges = Vec::new();
        let mut current: Option<Range> = None;

        for x in 0..self.columns.len() {
            let trip = trip_bucket(trips, self.get(x, row));

            match current.as_mut() {
                Some(range) if range.trip == trip => range.end = x,
                _ => {
                    if let Some(range) = current.take() {
                        ranges.push(range);
                    }
                    if !trip.is_nan() {
                        current = Some(Range {
                            trip,
                            start: x,
                            end: x,
                        });
                    }
                }
            }
        }

        if let Some(range) = current {
            ranges.push(range);
        }

        ranges
    }

    /// `(row coordinate, value)` pairs for one column.
    ///
    /// Missing, zero and NaN cells are skipped.
    ///
    /// # Panics
    ///
    /// Panics if `column >= num_columns()`.
    pub fn profile(&self, column: usize) -> Vec<(f64, f64)> {
        let mut profile = Vec::with_capacity(self.rows.len());

        for (row, &depth) in self.rows.iter().enumerate() {
            if let Some(value) = self.get(column, row) {
                if value != 0.0 && !value.is_nan() {
                    profile.push((depth, value));
                }
            }
        }

        profile
    }

    /// Device-unit extent of the grid, including half a cell at each edge.
    ///
    /// Columns are treated as longitude and rows as latitude. Returns `None`
    /// when either axis has fewer than 3 samples.
    pub fn envelope<P>(&self, projector: &P) -> Option<Rect>
    where
        P: CoordinateProjector + ?Sized,
    {
        if self.columns.len() < 3 || self.rows.len() < 3 {
            return None;
        }

        let last_column = self.columns.len() - 1;
        let last_row = self.rows.len() - 1;

        let first = projector.geo_to_device(self.columns[0], self.rows[0]);
        let first_inner = projector.geo_to_device(self.columns[1], self.rows[1]);
        let last = projector.geo_to_device(self.columns[last_column], self.rows[last_row]);
        let last_inner =
            projector.geo_to_device(self.columns[last_column - 1], self.rows[last_row - 1]);

        let (min_x, max_x) = widen_to_cell_edges(first.0, first_inner.0, last.0, last_inner.0);
        let (min_y, max_y) = widen_to_cell_edges(first.1, first_inner.1, last.1, last_inner.1);

        Some(Rect::new(min_x, min_y, max_x, max_y))
    }
}

/// Move the outer sample positions out by half the spacing to their
/// interior neighbours, returning `(low, high)`.
fn widen_to_cell_edges(first: f64, first_inner: f64, last: f64, last_inner: f64) -> (f64, f64) {
    let first_half = (first_inner - first).abs() / 2.0;
    let last_half = (last - last_inner).abs() / 2.0;

    if first <= last {
        (first - first_half, last + last_half)
    } else {
        (last - last_half, first + first_half)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(rows: usize, columns: usize) -> Grid {
        let mut grid = Grid::new(
            (0..rows).map(|r| r as f64).collect(),
            (0..columns).map(|c| c as f64).collect(),
        );
        for y in 0..rows {
            for x in 0..columns {
                grid.set(x, y, (y * columns + x) as f64);
            }
        }
        grid
    }

    #[test]
    fn test_set_tracks_min_max() {
        let mut grid = Grid::new(vec![0.0, 1.0], vec![0.0, 1.0]);
        assert!(!grid.has_data());

        grid.set(0, 0, 5.0);
        grid.set(1, 1, -2.0);
        grid.set(1, 0, f64::NAN);

        assert_eq!(grid.min_z(), -2.0);
        assert_eq!(grid.max_z(), 5.0);
        assert!(grid.has_data());
        assert!(grid.get(1, 0).unwrap().is_nan());
        assert_eq!(grid.get(0, 1), None);
    }

    #[test]
    fn test_try_get_out_of_range() {
        let grid = filled(2, 3);
        assert_eq!(
            grid.try_get(3, 0),
            Err(GridError::index_out_of_range(3, 0, 3, 2))
        );
        assert!(grid.try_get(0, 2).is_err());
        assert_eq!(grid.try_get(2, 1), Ok(Some(5.0)));
    }

    #[test]
    #[should_panic(expected = "outside a 3x2 grid")]
    fn test_get_panics_out_of_range() {
        let grid = filled(2, 3);
        grid.get(0, 2);
    }

    #[test]
    #[should_panic]
    fn test_set_panics_out_of_range() {
        let mut grid = filled(2, 3);
        grid.set(3, 0, 1.0);
    }

    #[test]
    fn test_closest_index() {
        let ascending = [0.0, 1.0, 2.0, 3.0];
        assert_eq!(closest_index(&ascending, 1.2), Some(1));
        assert_eq!(closest_index(&ascending, 2.6), Some(3));
        assert_eq!(closest_index(&ascending, -10.0), Some(0));
        assert_eq!(closest_index(&ascending, 99.0), Some(3));

        let descending = [3.0, 2.0, 1.0, 0.0];
        assert_eq!(closest_index(&descending, 2.9), Some(0));
        assert_eq!(closest_index(&descending, 0.4), Some(3));

        assert_eq!(closest_index(&[], 1.0), None);
    }

    #[test]
    fn test_trip_bucket() {
        let trips = [0.0, 10.0, 20.0];
        assert_eq!(trip_bucket(&trips, Some(15.0)), 10.0);
        assert_eq!(trip_bucket(&trips, Some(10.0)), 10.0);
        assert_eq!(trip_bucket(&trips, Some(99.0)), 20.0);
        assert!(trip_bucket(&trips, Some(-1.0)).is_nan());
        assert!(trip_bucket(&trips, None).is_nan());
        assert!(trip_bucket(&trips, Some(f64::NAN)).is_nan());
    }

    #[test]
    fn test_bounds_with_nan_accept_everything() {
        let bounds = GridBounds::new(0.0, f64::NAN, 0.0, 1.0);
        assert!(!bounds.is_complete());
        assert!(bounds.contains(-1000.0, 1000.0));
        assert!(GridBounds::unset().contains(5.0, 5.0));

        let bounds = GridBounds::new(0.0, 1.0, 0.0, 1.0);
        assert!(bounds.contains(1.0, 0.0));
        assert!(!bounds.contains(1.1, 0.0));
    }

    #[test]
    fn test_sample_distinguishes_out_of_bounds() {
        let mut grid =
            Grid::with_bounds(vec![1.0, 0.0], vec![0.0, 1.0], GridBounds::new(0.0, 1.0, 0.0, 1.0));
        grid.set(0, 0, 7.0);

        assert_eq!(grid.sample(0.0, 1.0), Sample::Value(7.0));
        assert_eq!(grid.sample(1.0, 0.0), Sample::NoData);
        assert_eq!(grid.sample(5.0, 0.0), Sample::OutOfBounds);
        assert_eq!(grid.closest_value(5.0, 0.0), None);
        assert_eq!(grid.closest_value(1.0, 0.0), None);
    }

    #[test]
    fn test_widen_to_cell_edges() {
        assert_eq!(widen_to_cell_edges(0.0, 10.0, 100.0, 90.0), (-5.0, 105.0));
        assert_eq!(widen_to_cell_edges(100.0, 90.0, 0.0, 10.0), (-5.0, 105.0));
    }
}
