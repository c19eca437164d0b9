//! Common validation utilities.

use validator::ValidationError;

/// Validates that a latitude value is within valid range (-90 to 90).
pub fn validate_latitude(lat: f64) -> Result<(), ValidationError> {
    if (-90.0..=90.0).contains(&lat) {
        Ok(())
    } else {
        let mut err = ValidationError::new("latitude_range");
        err.message = Some("Latitude must be between -90 and 90".into());
        Err(err)
    }
}

/// Validates that a longitude value is within valid range (-180 to 180).
pub fn validate_longitude(lon: f64) -> Result<(), ValidationError> {
    if (-180.0..=180.0).contains(&lon) {
        Ok(())
    } else {
        let mut err = ValidationError::new("longitude_range");
        err.message = Some("Longitude must be between -180 and 180".into());
        Err(err)
    }
}

/// Validates a star rating (1 to 5).
pub fn validate_stars(stars: i32) -> Result<(), ValidationError> {
    if (1..=5).contains(&stars) {
        Ok(())
    } else {
        let mut err = ValidationError::new("stars_range");
        err.message = Some("Stars must be between 1 and 5".into());
        Err(err)
    }
}

/// Validates a beeper search radius in miles.
pub fn validate_radius(radius: f64) -> Result<(), ValidationError> {
    if radius > 0.0 && radius <= 100.0 {
        Ok(())
    } else {
        let mut err = ValidationError::new("radius_range");
        err.message = Some("Radius must be between 0 and 100 miles".into());
        Err(err)
    }
}

/// Validates a rider group size against the hard cap.
/// Per-beeper capacity is enforced separately against the target's settings.
pub fn validate_group_size(size: i32) -> Result<(), ValidationError> {
    if (1..=16).contains(&size) {
        Ok(())
    } else {
        let mut err = ValidationError::new("group_size_range");
        err.message = Some("Group size must be between 1 and 16".into());
        Err(err)
    }
}

/// Validates a beeper rider capacity.
pub fn validate_capacity(capacity: i32) -> Result<(), ValidationError> {
    if (1..=16).contains(&capacity) {
        Ok(())
    } else {
        let mut err = ValidationError::new("capacity_range");
        err.message = Some("Capacity must be between 1 and 16".into());
        Err(err)
    }
}

/// Validates a per-ride rate in dollars.
pub fn validate_rate(rate: f64) -> Result<(), ValidationError> {
    if (0.0..=1000.0).contains(&rate) {
        Ok(())
    } else {
        let mut err = ValidationError::new("rate_range");
        err.message = Some("Rate must be between 0 and 1000".into());
        Err(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_latitude_bounds() {
        assert!(validate_latitude(0.0).is_ok());
        assert!(validate_latitude(90.0).is_ok());
        assert!(validate_latitude(-90.0).is_ok());
        assert!(validate_latitude(90.01).is_err());
        assert!(validate_latitude(-90.01).is_err());
    }

    #[test]
    fn test_longitude_bounds() {
        assert!(validate_longitude(180.0).is_ok());
        assert!(validate_longitude(-180.0).is_ok());
        assert!(validate_longitude(180.5).is_err());
    }

    #[test]
    fn test_stars_bounds() {
        assert!(validate_stars(1).is_ok());
        assert!(validate_stars(5).is_ok());
        assert!(validate_stars(0).is_err());
        assert!(validate_stars(6).is_err());
    }

    #[test]
    fn test_radius_bounds() {
        assert!(validate_radius(20.0).is_ok());
        assert!(validate_radius(0.0).is_err());
        assert!(validate_radius(101.0).is_err());
    }

    #[test]
    fn test_group_size_bounds() {
        assert!(validate_group_size(1).is_ok());
        assert!(validate_group_size(16).is_ok());
        assert!(validate_group_size(0).is_err());
        assert!(validate_group_size(17).is_err());
    }

    #[test]
    fn test_capacity_bounds() {
        assert!(validate_capacity(4).is_ok());
        assert!(validate_capacity(0).is_err());
    }

    #[test]
    fn test_rate_bounds() {
        assert!(validate_rate(3.0).is_ok());
        assert!(validate_rate(-1.0).is_err());
        assert!(validate_rate(1001.0).is_err());
    }
}
