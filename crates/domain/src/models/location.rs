//! Location domain model.
//!
//! Each user owns at most one location record. The record is created on the
//! first coordinate update and mutated in place on every update after that.

use chrono::{DateTime, Utc};
use geo::{point, HaversineDistance};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Meters per statute mile.
const METERS_PER_MILE: f64 = 1609.344;

/// A user's current location record.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub id: Uuid,
    pub user_id: Uuid,
    pub latitude: f64,
    pub longitude: f64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A bare coordinate pair, as pushed to location subscribers.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Point {
    pub latitude: f64,
    pub longitude: f64,
}

impl Point {
    /// Haversine great-circle distance to another point, in miles.
    pub fn distance_miles(&self, other: &Point) -> f64 {
        let a = point!(x: self.longitude, y: self.latitude);
        let b = point!(x: other.longitude, y: other.latitude);
        a.haversine_distance(&b) / METERS_PER_MILE
    }
}

impl From<&Location> for Point {
    fn from(location: &Location) -> Self {
        Self {
            latitude: location.latitude,
            longitude: location.longitude,
        }
    }
}

/// Request payload for a coordinate update.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LocationInput {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_location_input_validation() {
        let input = LocationInput {
            latitude: 36.2168,
            longitude: -81.6746,
        };
        assert!(validator::Validate::validate(&input).is_ok());

        let input = LocationInput {
            latitude: 91.0,
            longitude: 0.0,
        };
        assert!(validator::Validate::validate(&input).is_err());
    }

    #[test]
    fn test_distance_zero_for_same_point() {
        let p = Point {
            latitude: 36.2168,
            longitude: -81.6746,
        };
        assert!(p.distance_miles(&p) < 1e-9);
    }

    #[test]
    fn test_distance_boone_to_charlotte() {
        // Boone, NC to Charlotte, NC is roughly 80 miles as the crow flies.
        let boone = Point {
            latitude: 36.2168,
            longitude: -81.6746,
        };
        let charlotte = Point {
            latitude: 35.2271,
            longitude: -80.8431,
        };
        let miles = boone.distance_miles(&charlotte);
        assert!((75.0..90.0).contains(&miles), "got {} miles", miles);
    }

    #[test]
    fn test_point_camel_case_wire_format() {
        let p = Point {
            latitude: 1.5,
            longitude: -2.5,
        };
        let json = serde_json::to_string(&p).unwrap();
        assert_eq!(json, r#"{"latitude":1.5,"longitude":-2.5}"#);
    }
}
