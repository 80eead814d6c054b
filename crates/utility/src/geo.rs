pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Great-circle distance between two WGS84 coordinates, in kilometers.
pub fn haversine_distance(
    latitude_1: f64,
    longitude_1: f64,
    latitude_2: f64,
    longitude_2: f64,
) -> f64 {
    let dlat = (latitude_2 - latitude_1).to_radians();
    let dlon = (longitude_2 - longitude_1).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + latitude_1.to_radians().cos()
            * latitude_2.to_radians().cos()
            * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

#[cfg(test)]
mod tests {
    use super::haversine_distance;

    #[test]
    fn zero_distance_between_identical_points() {
        assert_eq!(haversine_distance(52.1, 0.1, 52.1, 0.1), 0.0);
    }

    #[test]
    fn oslo_to_trondheim_is_roughly_390_km() {
        let km = haversine_distance(59.9139, 10.7522, 63.4305, 10.3951);
        assert!((km - 391.0).abs() < 5.0, "got {} km", km);
    }

    #[test]
    fn distance_is_symmetric() {
        let a = haversine_distance(60.0, 10.0, 61.0, 11.0);
        let b = haversine_distance(61.0, 11.0, 60.0, 10.0);
        assert!((a - b).abs() < 1e-9);
    }
}
