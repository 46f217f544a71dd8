//! Depth profiles: the values of one cross-section column.

use crate::error::{ProcessorError, Result};
use grid_common::{Grid, Rect};
use serde::{Deserialize, Serialize};

/// Margin added either side of the value range when plotting.
pub const DEFAULT_MARGIN_PERCENT: f64 = 10.0;

/// A vertex of a plotted profile line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProfilePoint {
    pub x: f64,
    pub y: f64,
    /// Sample value at this vertex, for colouring the segment ending here.
    pub value: f64,
}

/// `(depth, value)` pairs for one column of a depth grid.
///
/// Missing, zero and NaN cells are left out.
#[derive(Debug, Clone, PartialEq)]
pub struct DepthProfile {
    values: Vec<(f64, f64)>,
    last_depth: Option<f64>,
}

impl DepthProfile {
    pub fn from_grid(grid: &Grid, column: usize) -> Result<Self> {
        if column >= grid.num_columns() {
            return Err(ProcessorError::ColumnOutOfRange {
                column,
                columns: grid.num_columns(),
            });
        }
        Ok(Self {
            values: grid.profile(column),
            last_depth: grid.rows().last().copied(),
        })
    }

    pub fn values(&self) -> &[(f64, f64)] {
        &self.values
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Depths that hold a value, in row order.
    pub fn valid_depths(&self) -> Vec<f64> {
        self.values.iter().map(|(depth, _)| *depth).collect()
    }

    /// Deepest valid depth, falling back to the grid's last row.
    pub fn max_depth(&self) -> Option<f64> {
        self.values
            .iter()
            .map(|(depth, _)| *depth)
            .reduce(f64::max)
            .or(self.last_depth)
    }

    /// Smallest and largest value.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        let mut values = self.values.iter().map(|(_, value)| *value);
        let first = values.next()?;
        Some(values.fold((first, first), |(min, max), v| (min.min(v), max.max(v))))
    }

    /// Value range widened by `margin_percent` of its width on each side.
    pub fn min_max_with_margin(&self, margin_percent: f64) -> Option<(f64, f64)> {
        let (min, max) = self.min_max()?;
        let margin = (max - min) / 100.0 * margin_percent;
        Some((min - margin, max + margin))
    }

    /// Polyline vertices for drawing the profile inside `area`.
    ///
    /// Value runs along x over `x_range` (default: the range with
    /// [`DEFAULT_MARGIN_PERCENT`]); depth runs down from `area.min_y` scaled
    /// so that [`max_depth`](Self::max_depth) reaches the bottom edge.
    pub fn polyline(&self, area: Rect, x_range: Option<(f64, f64)>) -> Vec<ProfilePoint> {
        let Some((x_min, x_max)) =
            x_range.or_else(|| self.min_max_with_margin(DEFAULT_MARGIN_PERCENT))
        else {
            return Vec::new();
        };
        let Some(max_depth) = self.max_depth() else {
            return Vec::new();
        };

        let x_extent = x_max - x_min;
        self.values
            .iter()
            .map(|&(depth, value)| {
                let x = if x_extent > 0.0 {
                    area.width() / x_extent * (value - x_min)
                } else {
                    area.width() / 2.0
                };
                let y = if max_depth > 0.0 {
                    area.height() / max_depth * depth
                } else {
                    0.0
                };
                ProfilePoint {
                    x: area.min_x + x,
                    y: area.min_y + y,
                    value,
                }
            })
            .collect()
    }
}
