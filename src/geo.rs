//! Geographic utilities: great-circle distance and result rounding.
//!
//! All distances are kilometers on a spherical Earth approximation.
//! Coordinate range validation happens upstream in query construction;
//! these functions assume valid input.

use crate::GeoPoint;

/// Mean Earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two points in kilometers, using the
/// haversine formula.
///
/// Symmetric, zero for identical points, and monotonic in angular
/// separation.
///
/// # Example
/// ```
/// use nearfind::GeoPoint;
/// use nearfind::geo::haversine_distance_km;
///
/// let delhi = GeoPoint::new(28.6139, 77.2090);
/// let mumbai = GeoPoint::new(19.0760, 72.8777);
/// let d = haversine_distance_km(&delhi, &mumbai);
/// assert!((d - 1150.0).abs() < 20.0);
/// ```
pub fn haversine_distance_km(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat_a = a.latitude.to_radians();
    let lat_b = b.latitude.to_radians();
    let d_lat = (b.latitude - a.latitude).to_radians();
    let d_lng = (b.longitude - a.longitude).to_radians();

    let h = (d_lat / 2.0).sin().powi(2)
        + lat_a.cos() * lat_b.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().asin()
}

/// Round a distance to two decimal places (10 meter resolution) for
/// result presentation.
pub fn round_km(distance_km: f64) -> f64 {
    (distance_km * 100.0).round() / 100.0
}
