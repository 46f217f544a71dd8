//! Linear (equirectangular) viewport projection.
//!
//! Maps a geographic extent onto a device rectangle of `width` x `height`
//! units with the origin at the bottom-left (south-west) corner and y
//! growing northwards.

use crate::geodesic;
use grid_common::{CoordinateProjector, Rect};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors building a projection.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ProjectionError {
    #[error("geographic extent has zero or negative size: {0:?}")]
    EmptyExtent(Rect),

    #[error("device size must be positive, got {width}x{height}")]
    EmptyDevice { width: f64, height: f64 },
}

/// Projects a lon/lat extent linearly onto device space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportProjector {
    /// Visible extent: x is longitude, y is latitude (degrees).
    pub geo: Rect,
    /// Device width in units.
    pub width: f64,
    /// Device height in units.
    pub height: f64,
}

impl ViewportProjector {
    pub fn new(geo: Rect, width: f64, height: f64) -> Result<Self, ProjectionError> {
        if !(geo.width() > 0.0 && geo.height() > 0.0) {
            return Err(ProjectionError::EmptyExtent(geo));
        }
        if !(width > 0.0 && height > 0.0) {
            return Err(ProjectionError::EmptyDevice { width, height });
        }
        Ok(Self { geo, width, height })
    }

    /// The whole device area.
    pub fn device_rect(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Device units per degree of longitude and latitude.
    pub fn resolution(&self) -> (f64, f64) {
        (self.width / self.geo.width(), self.height / self.geo.height())
    }
}

impl CoordinateProjector for ViewportProjector {
    fn device_to_geo(&self, x: f64, y: f64) -> (f64, f64) {
        let (x_res, y_res) = self.resolution();
        (self.geo.min_x + x / x_res, self.geo.min_y + y / y_res)
    }

    fn geo_to_device(&self, lon: f64, lat: f64) -> (f64, f64) {
        let (x_res, y_res) = self.resolution();
        ((lon - self.geo.min_x) * x_res, (lat - self.geo.min_y) * y_res)
    }

    fn great_circle(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
        geodesic::great_circle(lat1, lon1, lat2, lon2)
    }

    fn point_at_bearing(&self, lat: f64, lon: f64, bearing: f64, distance: f64) -> (f64, f64) {
        geodesic::destination_point(lat, lon, bearing, distance)
    }
}
