//! Radial grids: distance-vs-row grids fanned out by compass bearing around
//! a central point.

use crate::config::RadialConfig;
use grid_common::{closest_index, CoordinateProjector, Grid, Rect};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::debug;

/// Bearing in degrees, totally ordered for use as a map key.
#[derive(Debug, Clone, Copy)]
struct Bearing(f64);

impl PartialEq for Bearing {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Bearing {}

impl PartialOrd for Bearing {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Bearing {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// Radial grids keyed by bearing from a centre point.
///
/// Each radial's columns are distances in metres from the centre. Every
/// radial is also registered at `bearing + 360` so that bearings just below
/// 360 find radials registered near 0.
#[derive(Debug, Clone, Default)]
pub struct RadialSource {
    config: RadialConfig,
    radials: BTreeMap<Bearing, Arc<Grid>>,
    bearings: Vec<f64>,
    max_distance: Option<f64>,
}

impl RadialSource {
    pub fn new(config: RadialConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    pub fn config(&self) -> &RadialConfig {
        &self.config
    }

    /// Replace all radials.
    pub fn set_radials<I>(&mut self, radials: I)
    where
        I: IntoIterator<Item = (f64, Grid)>,
    {
        self.radials.clear();
        for (bearing, grid) in radials {
            let grid = Arc::new(grid);
            self.radials.insert(Bearing(bearing + 360.0), Arc::clone(&grid));
            self.radials.insert(Bearing(bearing), grid);
        }

        self.bearings = self.radials.keys().map(|b| b.0).collect();
        self.max_distance = self
            .radials
            .values()
            .filter_map(|grid| grid.columns().iter().copied().reduce(f64::max))
            .reduce(f64::max);

        debug!(
            radials = self.radials.len() / 2,
            max_distance = ?self.max_distance,
            "Set radial grids"
        );
    }

    /// Registered bearings, including the `+360` duplicates, ascending.
    pub fn bearings(&self) -> &[f64] {
        &self.bearings
    }

    pub fn is_empty(&self) -> bool {
        self.radials.is_empty()
    }

    /// Furthest distance covered by any radial.
    pub fn max_distance(&self) -> Option<f64> {
        self.max_distance
    }

    /// The radial whose bearing is nearest to `bearing`.
    pub fn closest_radial(&self, bearing: f64) -> Option<&Grid> {
        let index = closest_index(&self.bearings, bearing)?;
        self.radials
            .get(&Bearing(self.bearings[index]))
            .map(|grid| grid.as_ref())
    }

    /// Value at a geographic point.
    ///
    /// `None` beyond [`max_distance`](Self::max_distance), with no radials,
    /// or when the nearest radial has no value at that distance.
    pub fn pixel_value<P>(&self, projector: &P, lon: f64, lat: f64) -> Option<f64>
    where
        P: CoordinateProjector + ?Sized,
    {
        let max_distance = self.max_distance?;
        let (distance, bearing) =
            projector.great_circle(self.config.centre_lat, self.config.centre_lon, lat, lon);

        if distance > max_distance {
            return None;
        }

        self.closest_radial(bearing)?
            .closest_value(distance, self.config.sample_row)
    }

    /// Device rectangle covering every radial.
    ///
    /// Built from the points at [`max_distance`](Self::max_distance) due
    /// north, east, south and west of the centre.
    pub fn extent<P>(&self, projector: &P) -> Option<Rect>
    where
        P: CoordinateProjector + ?Sized,
    {
        let distance = self.max_distance?;
        let (lat, lon) = (self.config.centre_lat, self.config.centre_lon);

        let (north, _) = projector.point_at_bearing(lat, lon, 0.0, distance);
        let (_, east) = projector.point_at_bearing(lat, lon, 90.0, distance);
        let (south, _) = projector.point_at_bearing(lat, lon, 180.0, distance);
        let (_, west) = projector.point_at_bearing(lat, lon, 270.0, distance);

        Some(Rect::from_corners(
            projector.geo_to_device(west, south),
            projector.geo_to_device(east, north),
        ))
    }
}
