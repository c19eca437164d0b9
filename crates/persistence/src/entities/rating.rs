//! Rating entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::rating::Rating;
use domain::models::user::UserSummary;

/// Database row mapping for a rating joined with rater and rated users.
#[derive(Debug, Clone, FromRow)]
pub struct RatingEntity {
    pub id: Uuid,
    pub stars: i32,
    pub message: Option<String>,
    pub beep_id: Option<Uuid>,
    pub timestamp: DateTime<Utc>,
    pub rater_id: Uuid,
    pub rater_first: String,
    pub rater_last: String,
    pub rater_username: String,
    pub rater_photo: Option<String>,
    pub rated_id: Uuid,
    pub rated_first: String,
    pub rated_last: String,
    pub rated_username: String,
    pub rated_photo: Option<String>,
}

impl From<RatingEntity> for Rating {
    fn from(entity: RatingEntity) -> Self {
        Self {
            id: entity.id,
            rater: UserSummary {
                id: entity.rater_id,
                first: entity.rater_first,
                last: entity.rater_last,
                username: entity.rater_username,
                photo: entity.rater_photo,
            },
            rated: UserSummary {
                id: entity.rated_id,
                first: entity.rated_first,
                last: entity.rated_last,
                username: entity.rated_username,
                photo: entity.rated_photo,
            },
            stars: entity.stars,
            message: entity.message,
            beep_id: entity.beep_id,
            timestamp: entity.timestamp,
        }
    }
}
