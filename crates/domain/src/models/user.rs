//! User domain models and auth payloads.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;
use validator::Validate;

use crate::models::location::Point;

/// Role attached to a user account. Admin unlocks the moderation surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::User => "user",
            UserRole::Admin => "admin",
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, UserRole::Admin)
    }
}

impl FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "user" => Ok(UserRole::User),
            "admin" => Ok(UserRole::Admin),
            _ => Err(format!("Invalid user role: {}", s)),
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Represents a user account in the system.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub first: String,
    pub last: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub venmo: Option<String>,
    pub cashapp: Option<String>,
    pub photo: Option<String>,
    #[serde(skip_serializing)] // Never serialize password hash to API responses
    pub password_hash: Option<String>,
    pub role: UserRole,
    pub is_beeping: bool,
    pub singles_rate: f64,
    pub group_rate: f64,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl User {
    /// Full display name.
    pub fn name(&self) -> String {
        format!("{} {}", self.first, self.last)
    }
}

/// Compact user reference embedded in reports, ratings and payments.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    pub id: Uuid,
    pub first: String,
    pub last: String,
    pub username: String,
    pub photo: Option<String>,
}

/// Request payload for account creation.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    #[validate(length(min = 1, max = 50, message = "First name is required"))]
    pub first: String,

    #[validate(length(min = 1, max = 50, message = "Last name is required"))]
    pub last: String,

    #[validate(length(min = 3, max = 32, message = "Username must be 3-32 characters"))]
    pub username: String,

    #[validate(email(message = "Invalid email address"))]
    pub email: String,

    #[validate(length(min = 7, max = 20, message = "Invalid phone number"))]
    pub phone: String,

    #[validate(length(min = 8, message = "Password must be at least 8 characters"))]
    pub password: String,

    pub venmo: Option<String>,
    pub cashapp: Option<String>,
}

/// Request payload for login.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// The token bundle clients persist in local storage and attach to every
/// request (bearer header) and subscription socket (query parameter).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenBundle {
    pub access_token: String,
    pub refresh_token: String,
}

/// Response payload for signup/login.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub user: User,
    pub tokens: TokenBundle,
}

/// Request payload for toggling beeper availability and rates.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeeperSettingsInput {
    pub is_beeping: bool,

    #[validate(custom(function = "shared::validation::validate_rate"))]
    pub singles_rate: f64,

    #[validate(custom(function = "shared::validation::validate_rate"))]
    pub group_rate: f64,

    #[validate(custom(function = "shared::validation::validate_capacity"))]
    pub capacity: i32,

    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: Option<f64>,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: Option<f64>,
}

/// Response payload for the beeper settings update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeeperSettings {
    pub id: Uuid,
    pub is_beeping: bool,
    pub singles_rate: f64,
    pub group_rate: f64,
    pub capacity: i32,
    pub queue_size: i64,
    pub location: Option<Point>,
}

/// Query parameters for beeper discovery.
#[derive(Debug, Clone, Copy, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct BeeperListQuery {
    #[validate(custom(function = "shared::validation::validate_latitude"))]
    pub latitude: f64,

    #[validate(custom(function = "shared::validation::validate_longitude"))]
    pub longitude: f64,

    #[validate(custom(function = "shared::validation::validate_radius"))]
    pub radius: Option<f64>,
}

/// Default discovery radius in miles when the client does not send one.
pub const DEFAULT_SEARCH_RADIUS_MILES: f64 = 20.0;

impl BeeperListQuery {
    pub fn radius_miles(&self) -> f64 {
        self.radius.unwrap_or(DEFAULT_SEARCH_RADIUS_MILES)
    }
}

/// A currently-beeping driver as shown on the rider's pick screen.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BeeperCandidate {
    pub id: Uuid,
    pub name: String,
    pub first: String,
    pub photo: Option<String>,
    pub role: UserRole,
    pub rating: Option<f64>,
    pub queue_size: i64,
    pub capacity: i32,
    pub singles_rate: f64,
    pub group_rate: f64,
    pub venmo: Option<String>,
    pub cashapp: Option<String>,
    /// Haversine distance in miles from the rider's coordinate.
    /// Zero when the beeper has no stored location.
    pub distance_miles: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_role_round_trip() {
        assert_eq!(UserRole::from_str("admin").unwrap(), UserRole::Admin);
        assert_eq!(UserRole::from_str("User").unwrap(), UserRole::User);
        assert!(UserRole::from_str("root").is_err());
        assert_eq!(UserRole::Admin.to_string(), "admin");
    }

    #[test]
    fn test_user_role_is_admin() {
        assert!(UserRole::Admin.is_admin());
        assert!(!UserRole::User.is_admin());
    }

    #[test]
    fn test_signup_request_validation() {
        let request = SignupRequest {
            first: "Banks".to_string(),
            last: "Nussman".to_string(),
            username: "banks".to_string(),
            email: "banks@example.com".to_string(),
            phone: "7048414949".to_string(),
            password: "super-secret".to_string(),
            venmo: Some("banksnussman".to_string()),
            cashapp: None,
        };
        assert!(validator::Validate::validate(&request).is_ok());
    }

    #[test]
    fn test_signup_request_rejects_bad_email() {
        let request = SignupRequest {
            first: "B".to_string(),
            last: "N".to_string(),
            username: "banks".to_string(),
            email: "not-an-email".to_string(),
            phone: "7048414949".to_string(),
            password: "super-secret".to_string(),
            venmo: None,
            cashapp: None,
        };
        assert!(validator::Validate::validate(&request).is_err());
    }

    #[test]
    fn test_beeper_settings_input_rejects_bad_capacity() {
        let input = BeeperSettingsInput {
            is_beeping: true,
            singles_rate: 3.0,
            group_rate: 2.0,
            capacity: 0,
            latitude: None,
            longitude: None,
        };
        assert!(validator::Validate::validate(&input).is_err());
    }

    #[test]
    fn test_beeper_list_query_default_radius() {
        let query = BeeperListQuery {
            latitude: 36.0,
            longitude: -81.0,
            radius: None,
        };
        assert_eq!(query.radius_miles(), DEFAULT_SEARCH_RADIUS_MILES);
    }

    #[test]
    fn test_password_hash_never_serialized() {
        let user = User {
            id: Uuid::new_v4(),
            first: "Banks".to_string(),
            last: "Nussman".to_string(),
            username: "banks".to_string(),
            email: "banks@example.com".to_string(),
            phone: "7048414949".to_string(),
            venmo: None,
            cashapp: None,
            photo: None,
            password_hash: Some("$argon2id$secret".to_string()),
            role: UserRole::User,
            is_beeping: false,
            singles_rate: 3.0,
            group_rate: 2.0,
            capacity: 4,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        let json = serde_json::to_string(&user).unwrap();
        assert!(!json.contains("argon2id"));
        assert!(!json.contains("passwordHash"));
    }
}
