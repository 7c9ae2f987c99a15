use crate::constants::EARTH_RADIUS_METERS;

/// Great-circle distance in meters between two points given in degrees.
pub fn haversine_meters(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_METERS * a.sqrt().min(1.0).asin()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub south: f64,
    pub north: f64,
    pub west: f64,
    pub east: f64,
}

/// Smallest lat/lon box containing every point within `radius` meters of the centre.
///
/// Falls back to the full longitude range when the circle reaches a pole or
/// crosses the antimeridian.
pub fn bounding_box(latitude: f64, longitude: f64, radius: f64) -> BoundingBox {
    let d_lat = (radius / EARTH_RADIUS_METERS).to_degrees();
    let south = (latitude - d_lat).max(-90.0);
    let north = (latitude + d_lat).min(90.0);

    if south <= -90.0 || north >= 90.0 {
        return BoundingBox {
            south,
            north,
            west: -180.0,
            east: 180.0,
        };
    }

    let max_abs_lat = latitude.abs() + d_lat;
    let d_lon = d_lat / max_abs_lat.to_radians().cos();
    let west = longitude - d_lon;
    let east = longitude + d_lon;

    if west < -180.0 || east > 180.0 {
        return BoundingBox {
            south,
            north,
            west: -180.0,
            east: 180.0,
        };
    }

    BoundingBox {
        south,
        north,
        west,
        east,
    }
}

/// Renders a point as WKT, longitude first.
pub fn format_point(latitude: f64, longitude: f64) -> String {
    format!("POINT({} {})", longitude, latitude)
}
