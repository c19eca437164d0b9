//! User entity (database row mapping).

use chrono::{DateTime, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use domain::models::location::Point;
use domain::models::user::{BeeperCandidate, User, UserRole, UserSummary};

/// Database row mapping for the users table.
#[derive(Debug, Clone, FromRow)]
pub struct UserEntity {
    pub id: Uuid,
    pub first: String,
    pub last: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub venmo: Option<String>,
    pub cashapp: Option<String>,
    pub photo: Option<String>,
    pub password_hash: String,
    pub role: String,
    pub is_beeping: bool,
    pub singles_rate: f64,
    pub group_rate: f64,
    pub capacity: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<UserEntity> for User {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            first: entity.first,
            last: entity.last,
            username: entity.username,
            email: entity.email,
            phone: entity.phone,
            venmo: entity.venmo,
            cashapp: entity.cashapp,
            photo: entity.photo,
            password_hash: Some(entity.password_hash),
            // The role column carries a CHECK constraint, so a parse failure
            // can only come from out-of-band writes; degrade to `user`.
            role: entity.role.parse().unwrap_or(UserRole::User),
            is_beeping: entity.is_beeping,
            singles_rate: entity.singles_rate,
            group_rate: entity.group_rate,
            capacity: entity.capacity,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }
}

impl From<UserEntity> for UserSummary {
    fn from(entity: UserEntity) -> Self {
        Self {
            id: entity.id,
            first: entity.first,
            last: entity.last,
            username: entity.username,
            photo: entity.photo,
        }
    }
}

/// Row mapping for beeper discovery: a beeping user joined with their last
/// known coordinate, derived rating and active queue size.
#[derive(Debug, Clone, FromRow)]
pub struct BeeperCandidateEntity {
    pub id: Uuid,
    pub first: String,
    pub last: String,
    pub photo: Option<String>,
    pub role: String,
    pub singles_rate: f64,
    pub group_rate: f64,
    pub capacity: i32,
    pub venmo: Option<String>,
    pub cashapp: Option<String>,
    pub rating: Option<f64>,
    pub queue_size: i64,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl BeeperCandidateEntity {
    /// Last known coordinate, when one has been stored.
    pub fn point(&self) -> Option<Point> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(Point {
                latitude,
                longitude,
            }),
            _ => None,
        }
    }

    /// Converts into the API model, attaching the rider-relative distance.
    pub fn into_candidate(self, distance_miles: f64) -> BeeperCandidate {
        BeeperCandidate {
            id: self.id,
            name: format!("{} {}", self.first, self.last),
            first: self.first,
            photo: self.photo,
            role: self.role.parse().unwrap_or(UserRole::User),
            rating: self.rating,
            queue_size: self.queue_size,
            capacity: self.capacity,
            singles_rate: self.singles_rate,
            group_rate: self.group_rate,
            venmo: self.venmo,
            cashapp: self.cashapp,
            distance_miles,
        }
    }
}
