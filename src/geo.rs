//! Geographic helper functions.

/// Mean Earth radius in kilometres.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// geo_distance - Great-circle distance in kilometres between two
/// latitude/longitude pairs given in decimal degrees.
///
/// Uses the spherical law of cosines with a fixed 6371 km radius; the result
/// is rounded to 6 decimal places. The cosine argument is clamped so that
/// identical coordinates come out as exactly 0 instead of a NaN from
/// floating-point drift past 1.
pub fn geo_distance(latitude_a: f64, longitude_a: f64, latitude_b: f64, longitude_b: f64) -> f64 {
    // Coincident points short-circuit: a dot product one ulp under 1 would
    // make acos report tens of metres.
    if latitude_a == latitude_b && longitude_a == longitude_b {
        return 0.0;
    }
    let lat_a = latitude_a.to_radians();
    let lat_b = latitude_b.to_radians();
    let delta_lon = longitude_b.to_radians() - longitude_a.to_radians();

    let central = (lat_a.cos() * lat_b.cos() * delta_lon.cos() + lat_a.sin() * lat_b.sin())
        .clamp(-1.0, 1.0);
    let distance = EARTH_RADIUS_KM * central.acos();
    (distance * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identical_coordinates() {
        assert_eq!(geo_distance(41.9028, 12.4964, 41.9028, 12.4964), 0.0);
        assert_eq!(geo_distance(0.0, 0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn test_rome_to_milan() {
        // Rome to Milan is just under 480 km as the crow flies.
        let distance = geo_distance(41.9028, 12.4964, 45.4642, 9.1900);
        assert!(distance > 470.0 && distance < 485.0, "got {}", distance);
    }

    #[test]
    fn test_symmetry_and_rounding() {
        let ab = geo_distance(41.9028, 12.4964, 45.4642, 9.1900);
        let ba = geo_distance(45.4642, 9.1900, 41.9028, 12.4964);
        assert_eq!(ab, ba);
        assert_eq!(ab, (ab * 1e6).round() / 1e6);
    }

    #[test]
    fn test_quarter_circumference() {
        // Pole to equator along a meridian: a quarter of the circumference.
        let distance = geo_distance(90.0, 0.0, 0.0, 0.0);
        let expected = EARTH_RADIUS_KM * std::f64::consts::FRAC_PI_2;
        assert!((distance - expected).abs() < 1e-4, "got {}", distance);
    }
}
