//! Great-circle distance.

use civic_map_geography_models::Coordinate;

/// Mean Earth radius in kilometers.
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Computes the great-circle distance between two coordinates in
/// kilometers using the haversine formula.
///
/// Standard double-precision evaluation. Antipodal points and filters
/// spanning the ±180° meridian get no special handling; a radius filter
/// crossing the dateline will behave incorrectly. This is a known,
/// documented limitation.
#[must_use]
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let lat1 = a.lat.to_radians();
    let lat2 = b.lat.to_radians();
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lng / 2.0).sin().powi(2);

    2.0 * EARTH_RADIUS_KM * h.sqrt().atan2((1.0 - h).sqrt())
}
