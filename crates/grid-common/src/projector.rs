//! Contract for the coordinate conversion collaborator.

use crate::Rect;

/// Converts between geographic, device and great-circle spaces.
///
/// Geographic coordinates are degrees, device coordinates are whatever unit
/// the rendering surface uses (normally pixels), distances are metres and
/// bearings are degrees clockwise from north in `[0, 360)`.
pub trait CoordinateProjector {
    /// Device coordinate to `(longitude, latitude)`.
    fn device_to_geo(&self, x: f64, y: f64) -> (f64, f64);

    /// `(longitude, latitude)` to device coordinate.
    fn geo_to_device(&self, lon: f64, lat: f64) -> (f64, f64);

    /// Distance in metres and initial bearing from point 1 to point 2.
    fn great_circle(&self, lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64);

    /// The `(latitude, longitude)` reached travelling `distance` metres on `bearing`.
    fn point_at_bearing(&self, lat: f64, lon: f64, bearing: f64, distance: f64) -> (f64, f64);

    /// Whether two extents overlap.
    fn rect_intersects(&self, a: &Rect, b: &Rect) -> bool {
        a.intersects(b)
    }
}
