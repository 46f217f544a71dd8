//! Great-circle calculations on a spherical Earth.
//!
//! All angles are degrees in and out; distances are metres. Bearings are
//! measured clockwise from true north and normalised to `[0, 360)`.

/// Mean Earth radius (IUGG) in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_008.8;

/// Metres in one international nautical mile.
pub const METRES_PER_NAUTICAL_MILE: f64 = 1852.0;

/// Haversine distance and initial bearing from point 1 to point 2.
pub fn great_circle(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
    let lat1_rad = lat1.to_radians();
    let lat2_rad = lat2.to_radians();
    let delta_lat = (lat2 - lat1).to_radians();
    let delta_lon = (lon2 - lon1).to_radians();

    let a = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().min(1.0).asin();
    let distance = EARTH_RADIUS_M * c;

    let y = delta_lon.sin() * lat2_rad.cos();
    let x = lat1_rad.cos() * lat2_rad.sin() - lat1_rad.sin() * lat2_rad.cos() * delta_lon.cos();
    let bearing = normalise_bearing(y.atan2(x).to_degrees());

    (distance, bearing)
}

/// The point reached travelling `distance` metres from `(lat, lon)` on `bearing`.
///
/// Returns `(latitude, longitude)` with longitude wrapped to `[-180, 180)`.
pub fn destination_point(lat: f64, lon: f64, bearing: f64, distance: f64) -> (f64, f64) {
    let lat_rad = lat.to_radians();
    let lon_rad = lon.to_radians();
    let bearing_rad = bearing.to_radians();
    let angular = distance / EARTH_RADIUS_M;

    let lat2 = (lat_rad.sin() * angular.cos()
        + lat_rad.cos() * angular.sin() * bearing_rad.cos())
    .asin();
    let lon2 = lon_rad
        + (bearing_rad.sin() * angular.sin() * lat_rad.cos())
            .atan2(angular.cos() - lat_rad.sin() * lat2.sin());

    let lon2 = (lon2.to_degrees() + 540.0).rem_euclid(360.0) - 180.0;
    (lat2.to_degrees(), lon2)
}

/// Convert metres to nautical miles.
pub fn to_nautical_miles(metres: f64) -> f64 {
    metres / METRES_PER_NAUTICAL_MILE
}

/// [`great_circle`] with the distance in nautical miles.
pub fn great_circle_nautical(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> (f64, f64) {
    let (distance, bearing) = great_circle(lat1, lon1, lat2, lon2);
    (to_nautical_miles(distance), bearing)
}

fn normalise_bearing(degrees: f64) -> f64 {
    let bearing = degrees.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360 for tiny negative inputs
    if bearing >= 360.0 {
        0.0
    } else {
        bearing
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE_DEGREE_M: f64 = EARTH_RADIUS_M * std::f64::consts::PI / 180.0;

    #[test]
    fn test_distance_one_degree_on_equator() {
        let (distance, bearing) = great_circle(0.0, 0.0, 0.0, 1.0);
        assert!((distance - ONE_DEGREE_M).abs() < 0.01);
        assert!((bearing - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_cardinal_bearings() {
        let (_, north) = great_circle(0.0, 0.0, 1.0, 0.0);
        let (_, south) = great_circle(0.0, 0.0, -1.0, 0.0);
        let (_, west) = great_circle(0.0, 0.0, 0.0, -1.0);
        assert!(north.abs() < 1e-9);
        assert!((south - 180.0).abs() < 1e-9);
        assert!((west - 270.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_distance() {
        let (distance, bearing) = great_circle(51.5, -0.12, 51.5, -0.12);
        assert_eq!(distance, 0.0);
        assert!((0.0..360.0).contains(&bearing));
    }

    #[test]
    fn test_destination_round_trip() {
        let (lat, lon) = destination_point(50.0, -4.0, 45.0, 25_000.0);
        let (distance, bearing) = great_circle(50.0, -4.0, lat, lon);
        assert!((distance - 25_000.0).abs() < 0.01);
        assert!((bearing - 45.0).abs() < 1e-6);
    }

    #[test]
    fn test_destination_due_north() {
        let (lat, lon) = destination_point(0.0, 10.0, 0.0, ONE_DEGREE_M);
        assert!((lat - 1.0).abs() < 1e-9);
        assert!((lon - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_destination_wraps_longitude() {
        let (_, lon) = destination_point(0.0, 179.5, 90.0, ONE_DEGREE_M);
        assert!((lon - (-179.5)).abs() < 1e-9);
    }

    #[test]
    fn test_nautical_miles() {
        assert_eq!(to_nautical_miles(1852.0), 1.0);
        assert_eq!(to_nautical_miles(0.0), 0.0);

        // One minute of latitude is close to one nautical mile.
        let (distance, bearing) = great_circle_nautical(50.0, 0.0, 50.0 + 1.0 / 60.0, 0.0);
        assert!((distance - 1.0).abs() < 0.01);
        assert!(bearing.abs() < 1e-9);
    }
}
