//! Car domain model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A car registered by a beeper. Listing only; no mutation surface here.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Car {
    pub id: Uuid,
    pub user_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub photo: Option<String>,
    /// Whether this is the car shown to riders by default.
    pub default: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_car_wire_format_uses_camel_case() {
        let car = Car {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            make: "Subaru".to_string(),
            model: "Crosstrek".to_string(),
            year: 2019,
            color: "white".to_string(),
            photo: None,
            default: true,
            created_at: Utc::now(),
        };
        let json = serde_json::to_string(&car).unwrap();
        assert!(json.contains("\"userId\""));
        assert!(json.contains("\"default\":true"));
        assert!(json.contains("\"createdAt\""));
    }
}
