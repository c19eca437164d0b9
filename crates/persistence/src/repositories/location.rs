//! Location repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::LocationEntity;

/// Repository for location-related database operations.
#[derive(Clone)]
pub struct LocationRepository {
    pool: PgPool,
}

impl LocationRepository {
    /// Creates a new LocationRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Set or replace a user's current location.
    ///
    /// The first call for a user inserts the row; every later call updates
    /// the same row in place (the id is stable across updates).
    pub async fn upsert_location(
        &self,
        user_id: Uuid,
        latitude: f64,
        longitude: f64,
    ) -> Result<LocationEntity, sqlx::Error> {
        sqlx::query_as::<_, LocationEntity>(
            r#"
            INSERT INTO locations (user_id, latitude, longitude)
            VALUES ($1, $2, $3)
            ON CONFLICT (user_id) DO UPDATE SET
                latitude = EXCLUDED.latitude,
                longitude = EXCLUDED.longitude,
                updated_at = NOW()
            RETURNING id, user_id, latitude, longitude, created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(latitude)
        .bind(longitude)
        .fetch_one(&self.pool)
        .await
    }

    /// Find a user's current location, if one has been stored.
    pub async fn find_by_user_id(
        &self,
        user_id: Uuid,
    ) -> Result<Option<LocationEntity>, sqlx::Error> {
        sqlx::query_as::<_, LocationEntity>(
            r#"
            SELECT id, user_id, latitude, longitude, created_at, updated_at
            FROM locations
            WHERE user_id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }
}
