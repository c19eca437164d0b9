//! Car entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::Car;

/// Database row mapping for the cars table.
#[derive(Debug, Clone, FromRow)]
pub struct CarEntity {
    pub id: Uuid,
    pub user_id: Uuid,
    pub make: String,
    pub model: String,
    pub year: i32,
    pub color: String,
    pub photo: Option<String>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

impl From<CarEntity> for Car {
    fn from(entity: CarEntity) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            make: entity.make,
            model: entity.model,
            year: entity.year,
            color: entity.color,
            photo: entity.photo,
            default: entity.is_default,
            created_at: entity.created_at,
        }
    }
}
