use schemars::JsonSchema;
use serde::Serialize;

use crate::error::CoordinateError;

pub const DEFAULT_DESTINATION_LABEL: &str = "Destination";

/// A WGS84 position. Latitude and longitude are validated on construction.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, JsonSchema)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::Latitude(latitude));
        }

        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::Longitude(longitude));
        }

        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// `"lat, lng"` with six decimals, the way the destination card shows it.
    pub fn to_display_string(&self) -> String {
        format!("{:.6}, {:.6}", self.latitude, self.longitude)
    }
}

impl From<Coordinate> for geo_types::Point {
    fn from(coordinate: Coordinate) -> Self {
        geo_types::Point::new(coordinate.longitude, coordinate.latitude)
    }
}

impl From<&Coordinate> for geo_types::Point {
    fn from(coordinate: &Coordinate) -> Self {
        (*coordinate).into()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub struct Destination {
    pub coordinate: Coordinate,
    pub label: String,
}

impl Destination {
    pub fn new(coordinate: Coordinate, label: impl Into<String>) -> Self {
        let label = label.into();
        let label = if label.trim().is_empty() {
            DEFAULT_DESTINATION_LABEL.to_string()
        } else {
            label
        };

        Self { coordinate, label }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_out_of_range() {
        assert_eq!(
            Coordinate::new(90.5, 0.0),
            Err(CoordinateError::Latitude(90.5))
        );
        assert_eq!(
            Coordinate::new(0.0, -180.1),
            Err(CoordinateError::Longitude(-180.1))
        );
        assert!(Coordinate::new(f64::NAN, 0.0).is_err());
        assert!(Coordinate::new(-90.0, 180.0).is_ok());
    }

    #[test]
    fn test_point_is_lon_lat() {
        let coordinate = Coordinate::new(-24.0167, -46.4667).unwrap();
        let point: geo_types::Point = coordinate.into();

        assert_eq!(point.x(), -46.4667);
        assert_eq!(point.y(), -24.0167);
    }

    #[test]
    fn test_display_string() {
        let coordinate = Coordinate::new(-24.018, -46.468).unwrap();
        assert_eq!(coordinate.to_display_string(), "-24.018000, -46.468000");
    }

    #[test]
    fn test_empty_label_defaults() {
        let coordinate = Coordinate::new(0.0, 0.0).unwrap();
        assert_eq!(Destination::new(coordinate, "  ").label, "Destination");
        assert_eq!(Destination::new(coordinate, "Cantina").label, "Cantina");
    }
}
