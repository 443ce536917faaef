// Geographic primitives: validated coordinates and great-circle distance
use crate::domain::error::{CoreError, CoreResult};
use crate::domain::policy::POLICY;
use serde::Serialize;

/// A point on the globe in signed degrees. Construction validates the range,
/// so every `Coordinate` in the crate is known to be finite and in bounds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> CoreResult<Self> {
        let valid = latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude);

        if !valid {
            return Err(CoreError::invalid_coordinate(latitude, longitude));
        }

        Ok(Self { latitude, longitude })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

/// Parse a coordinate from untyped upstream text ("28.61", " 77.2 ", "N/A", "").
pub fn parse_coordinate(latitude: &str, longitude: &str) -> CoreResult<Coordinate> {
    let parse = |s: &str| s.trim().parse::<f64>().ok();

    match (parse(latitude), parse(longitude)) {
        (Some(lat), Some(lon)) => {
            Coordinate::new(lat, lon).map_err(|_| CoreError::invalid_coordinate(latitude, longitude))
        }
        _ => Err(CoreError::invalid_coordinate(latitude, longitude)),
    }
}

/// Great-circle distance in kilometres using the haversine formula.
pub fn distance_km(a: Coordinate, b: Coordinate) -> f64 {
    let (lat1, lon1) = (a.latitude.to_radians(), a.longitude.to_radians());
    let (lat2, lon2) = (b.latitude.to_radians(), b.longitude.to_radians());

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let h = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    // Rounding can push h a hair above 1 for antipodal points
    let c = 2.0 * h.sqrt().min(1.0).asin();

    POLICY.earth_radius_km * c
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coord(lat: f64, lon: f64) -> Coordinate {
        Coordinate::new(lat, lon).unwrap()
    }

    #[test]
    fn test_coordinate_validation() {
        assert!(Coordinate::new(0.0, 0.0).is_ok());
        assert!(Coordinate::new(90.0, 180.0).is_ok());
        assert!(Coordinate::new(-90.0, -180.0).is_ok());
        assert!(Coordinate::new(91.0, 0.0).is_err());
        assert!(Coordinate::new(0.0, 181.0).is_err());
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_out_of_range_is_not_clamped() {
        let err = Coordinate::new(95.5, 10.0).unwrap_err();
        assert!(matches!(err, CoreError::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_parse_coordinate() {
        let c = parse_coordinate(" 28.6139", "77.2090 ").unwrap();
        assert_eq!(c.latitude(), 28.6139);
        assert_eq!(c.longitude(), 77.2090);

        assert!(parse_coordinate("N/A", "77.2").is_err());
        assert!(parse_coordinate("", "").is_err());
        assert!(parse_coordinate("NaN", "1.0").is_err());
        assert!(parse_coordinate("100", "1.0").is_err());
    }

    #[test]
    fn test_distance_identity() {
        for c in [coord(0.0, 0.0), coord(28.6139, 77.2090), coord(-33.86, 151.2), coord(90.0, 0.0)] {
            assert_eq!(distance_km(c, c), 0.0);
        }
    }

    #[test]
    fn test_distance_symmetry() {
        let delhi = coord(28.6139, 77.2090);
        let mumbai = coord(19.0760, 72.8777);
        let ab = distance_km(delhi, mumbai);
        let ba = distance_km(mumbai, delhi);
        assert!((ab - ba).abs() < 1e-9);
        // Delhi to Mumbai is roughly 1150 km
        assert!((ab - 1150.0).abs() < 15.0);
    }

    #[test]
    fn test_one_degree_at_equator() {
        let d = distance_km(coord(0.0, 0.0), coord(0.0, 1.0));
        assert!((d - 111.19).abs() < 0.01);

        let d = distance_km(coord(0.0, 0.0), coord(1.0, 0.0));
        assert!((d - 111.19).abs() < 0.01);
    }

    #[test]
    fn test_antipodal_points() {
        let d = distance_km(coord(0.0, 0.0), coord(0.0, 180.0));
        let half_circumference = std::f64::consts::PI * POLICY.earth_radius_km;
        assert!((d - half_circumference).abs() < 1e-6);
    }
}
