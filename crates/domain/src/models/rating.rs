//! Rating domain models.
//!
//! Ratings are immutable once created; a user's displayed rating is the
//! average of the stars they have received, derived at query time.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::user::UserSummary;

/// A star rating one user left for another after a ride.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Rating {
    pub id: Uuid,
    pub rater: UserSummary,
    pub rated: UserSummary,
    pub stars: i32,
    pub message: Option<String>,
    pub beep_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
}

/// Request payload for rating a user.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RatingInput {
    /// The user being rated.
    pub user_id: Uuid,

    #[validate(custom(function = "shared::validation::validate_stars"))]
    pub stars: i32,

    #[validate(length(max = 500, message = "Message must be at most 500 characters"))]
    pub message: Option<String>,

    pub beep_id: Option<Uuid>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rating_input_validation() {
        let input = RatingInput {
            user_id: Uuid::new_v4(),
            stars: 5,
            message: Some("Great beep!".to_string()),
            beep_id: None,
        };
        assert!(validator::Validate::validate(&input).is_ok());
    }

    #[test]
    fn test_rating_input_rejects_out_of_range_stars() {
        let input = RatingInput {
            user_id: Uuid::new_v4(),
            stars: 6,
            message: None,
            beep_id: None,
        };
        assert!(validator::Validate::validate(&input).is_err());
    }
}
