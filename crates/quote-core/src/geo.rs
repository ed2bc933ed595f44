//! Great-circle distance between gazetteer points and aircraft bases.

use crate::models::GeoPoint;

pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Haversine distance between two points in kilometres, unrounded.
///
/// Coordinates are not range-checked.
pub fn haversine_km(a: GeoPoint, b: GeoPoint) -> f64 {
    let phi1 = a.latitude.to_radians();
    let phi2 = b.latitude.to_radians();
    let dphi = (b.latitude - a.latitude).to_radians();
    let dlambda = (b.longitude - a.longitude).to_radians();
    let h = (dphi / 2.0).sin().powi(2) + phi1.cos() * phi2.cos() * (dlambda / 2.0).sin().powi(2);
    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}

/// Distance between two points rounded to the nearest whole kilometre.
///
/// This is the figure every quote and ranking is built on.
pub fn distance_km(a: GeoPoint, b: GeoPoint) -> u32 {
    // NaN saturates to 0.
    haversine_km(a, b).round() as u32
}
