//! Geographic calculations
//!
//! Pure functions over coordinates; no hardware involved.

use libm::{atan2f, cosf, sinf, sqrtf};

/// Calculate great-circle distance between two positions using the Haversine formula
///
/// # Arguments
///
/// * `lat1`, `lon1` - Start position in degrees
/// * `lat2`, `lon2` - End position in degrees
///
/// # Returns
///
/// Distance in meters. Symmetric in its arguments and zero for identical
/// coordinates.
pub fn haversine_distance_m(lat1: f32, lon1: f32, lat2: f32, lon2: f32) -> f32 {
    const EARTH_RADIUS_M: f32 = 6_371_000.0;
    const DEG_TO_RAD: f32 = core::f32::consts::PI / 180.0;

    let lat1_rad = lat1 * DEG_TO_RAD;
    let lat2_rad = lat2 * DEG_TO_RAD;
    let delta_lat = (lat2 - lat1) * DEG_TO_RAD;
    let delta_lon = (lon2 - lon1) * DEG_TO_RAD;

    let sin_dlat = sinf(delta_lat / 2.0);
    let sin_dlon = sinf(delta_lon / 2.0);
    let a = sin_dlat * sin_dlat + cosf(lat1_rad) * cosf(lat2_rad) * sin_dlon * sin_dlon;
    let c = 2.0 * atan2f(sqrtf(a), sqrtf(1.0 - a));

    EARTH_RADIUS_M * c
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_haversine_distance_north() {
        // Known distance: ~111km per degree of latitude
        let distance = haversine_distance_m(35.0, 139.0, 36.0, 139.0);
        assert!((distance - 111_000.0).abs() < 1000.0);
    }

    #[test]
    fn test_haversine_distance_zero() {
        let distance = haversine_distance_m(48.1173, 11.5167, 48.1173, 11.5167);
        assert!(distance.abs() < 0.5);
    }

    #[test]
    fn test_haversine_distance_symmetric() {
        let there = haversine_distance_m(35.0, 139.0, 36.0, 140.0);
        let back = haversine_distance_m(36.0, 140.0, 35.0, 139.0);
        assert!((there - back).abs() < 0.5);
    }

    #[test]
    fn test_haversine_distance_short_range() {
        // ~0.00009 degrees of latitude is about 10 meters
        let distance = haversine_distance_m(0.0, 0.0, 0.00009, 0.0);
        assert!((distance - 10.0).abs() < 0.5);
    }
}
