//! Report entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::report::Report;
use domain::models::user::UserSummary;

/// Database row mapping for a report joined with reporter, reported and
/// (optionally) the handling admin.
#[derive(Debug, Clone, FromRow)]
pub struct ReportEntity {
    pub id: Uuid,
    pub reason: String,
    pub beep_id: Option<Uuid>,
    pub notes: Option<String>,
    pub timestamp: DateTime<Utc>,
    pub reporter_id: Uuid,
    pub reporter_first: String,
    pub reporter_last: String,
    pub reporter_username: String,
    pub reporter_photo: Option<String>,
    pub reported_id: Uuid,
    pub reported_first: String,
    pub reported_last: String,
    pub reported_username: String,
    pub reported_photo: Option<String>,
    pub handler_id: Option<Uuid>,
    pub handler_first: Option<String>,
    pub handler_last: Option<String>,
    pub handler_username: Option<String>,
    pub handler_photo: Option<String>,
}

impl From<ReportEntity> for Report {
    fn from(entity: ReportEntity) -> Self {
        let handled_by = match (
            entity.handler_id,
            entity.handler_first,
            entity.handler_last,
            entity.handler_username,
        ) {
            (Some(id), Some(first), Some(last), Some(username)) => Some(UserSummary {
                id,
                first,
                last,
                username,
                photo: entity.handler_photo,
            }),
            _ => None,
        };

        Self {
            id: entity.id,
            reporter: UserSummary {
                id: entity.reporter_id,
                first: entity.reporter_first,
                last: entity.reporter_last,
                username: entity.reporter_username,
                photo: entity.reporter_photo,
            },
            reported: UserSummary {
                id: entity.reported_id,
                first: entity.reported_first,
                last: entity.reported_last,
                username: entity.reported_username,
                photo: entity.reported_photo,
            },
            reason: entity.reason,
            beep_id: entity.beep_id,
            notes: entity.notes,
            handled_by,
            timestamp: entity.timestamp,
        }
    }
}
