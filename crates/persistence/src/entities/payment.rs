//! Payment entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::payment::Payment;
use domain::models::user::UserSummary;

/// Database row mapping for a payment joined with its user.
#[derive(Debug, Clone, FromRow)]
pub struct PaymentEntity {
    pub id: Uuid,
    pub created: DateTime<Utc>,
    pub expires: DateTime<Utc>,
    pub user_id: Uuid,
    pub user_first: String,
    pub user_last: String,
    pub user_username: String,
    pub user_photo: Option<String>,
}

impl From<PaymentEntity> for Payment {
    fn from(entity: PaymentEntity) -> Self {
        Self {
            id: entity.id,
            user: UserSummary {
                id: entity.user_id,
                first: entity.user_first,
                last: entity.user_last,
                username: entity.user_username,
                photo: entity.user_photo,
            },
            created: entity.created,
            expires: entity.expires,
        }
    }
}
