//! Registry of horizontal grids keyed by depth and property.

use crate::depth::DepthGrid;
use grid_common::{CoordinateProjector, Grid};
use tracing::debug;

/// One horizontal grid of a survey.
#[derive(Debug, Clone)]
pub struct DepthLayer {
    pub depth: f64,
    pub property: String,
    pub grid: Grid,
}

/// Horizontal grids for several properties at several depths.
#[derive(Debug, Clone, Default)]
pub struct DepthStack {
    layers: Vec<DepthLayer>,
}

impl DepthStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a layer. A layer with the same depth and property is replaced.
    pub fn insert(&mut self, depth: f64, property: impl Into<String>, grid: Grid) {
        let property = property.into();
        if let Some(existing) = self
            .layers
            .iter_mut()
            .find(|l| l.depth == depth && l.property == property)
        {
            debug!(depth, property = %property, "Replacing depth layer");
            existing.grid = grid;
            return;
        }
        self.layers.push(DepthLayer {
            depth,
            property,
            grid,
        });
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn layers(&self) -> &[DepthLayer] {
        &self.layers
    }

    /// Grid for an exact depth and property.
    pub fn layer(&self, depth: f64, property: &str) -> Option<&Grid> {
        self.layers
            .iter()
            .find(|l| l.depth == depth && l.property == property)
            .map(|l| &l.grid)
    }

    /// Distinct property names in insertion order.
    pub fn properties(&self) -> Vec<&str> {
        let mut properties: Vec<&str> = Vec::new();
        for layer in &self.layers {
            if !properties.contains(&layer.property.as_str()) {
                properties.push(&layer.property);
            }
        }
        properties
    }

    /// Every distinct depth, ascending.
    pub fn all_depths(&self) -> Vec<f64> {
        let mut depths: Vec<f64> = self.layers.iter().map(|l| l.depth).collect();
        depths.sort_by(f64::total_cmp);
        depths.dedup();
        depths
    }

    /// `(depth, grid)` pairs for one property, ascending by depth.
    pub fn depth_grid_values(&self, property: &str) -> Vec<(f64, &Grid)> {
        let mut values: Vec<(f64, &Grid)> = self
            .layers
            .iter()
            .filter(|l| l.property == property)
            .map(|l| (l.depth, &l.grid))
            .collect();
        values.sort_by(|a, b| a.0.total_cmp(&b.0));
        values
    }

    /// Depths at which `property` has data.
    ///
    /// Falls back to [`all_depths`](Self::all_depths) when no grid of the
    /// property holds a value.
    pub fn depths(&self, property: &str) -> Vec<f64> {
        let depths: Vec<f64> = self
            .layers
            .iter()
            .filter(|l| l.property == property && l.grid.has_data())
            .map(|l| l.depth)
            .collect();

        if depths.is_empty() {
            self.all_depths()
        } else {
            depths
        }
    }

    /// Cross-section of `property` along `start` to `end` (`(lon, lat)`).
    pub fn cross_section<P>(
        &self,
        property: &str,
        start: (f64, f64),
        end: (f64, f64),
        projector: &P,
    ) -> DepthGrid
    where
        P: CoordinateProjector + ?Sized,
    {
        let levels: Vec<(f64, Option<&Grid>)> = self
            .depth_grid_values(property)
            .into_iter()
            .map(|(depth, grid)| (depth, Some(grid)))
            .collect();
        DepthGrid::from_grids(&levels, start, end, projector)
    }
}
