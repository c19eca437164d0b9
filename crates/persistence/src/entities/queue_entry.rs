//! Queue entry entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::queue::{QueueEntry, QueueStatus, RiderSummary};

/// Database row mapping for a queue entry joined with its rider.
#[derive(Debug, Clone, FromRow)]
pub struct QueueEntryEntity {
    pub id: Uuid,
    pub beeper_id: Uuid,
    pub rider_id: Uuid,
    pub origin: String,
    pub destination: String,
    pub group_size: i32,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub rider_first: String,
    pub rider_last: String,
    pub rider_phone: String,
    pub rider_venmo: Option<String>,
    pub rider_cashapp: Option<String>,
    pub rider_photo: Option<String>,
    pub rider_rating: Option<f64>,
}

impl From<QueueEntryEntity> for QueueEntry {
    fn from(entity: QueueEntryEntity) -> Self {
        Self {
            id: entity.id,
            beeper_id: entity.beeper_id,
            rider: RiderSummary {
                id: entity.rider_id,
                name: format!("{} {}", entity.rider_first, entity.rider_last),
                first: entity.rider_first,
                last: entity.rider_last,
                phone: entity.rider_phone,
                venmo: entity.rider_venmo,
                cashapp: entity.rider_cashapp,
                photo: entity.rider_photo,
                rating: entity.rider_rating,
            },
            origin: entity.origin,
            destination: entity.destination,
            group_size: entity.group_size,
            status: entity.status.parse().unwrap_or(QueueStatus::Waiting),
            created_at: entity.created_at,
        }
    }
}
