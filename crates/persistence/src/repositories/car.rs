//! Car repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::CarEntity;

/// Repository for car-related database operations.
#[derive(Clone)]
pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    /// Creates a new CarRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One page of cars, newest first, optionally filtered to one owner.
    pub async fn list(
        &self,
        user_id: Option<Uuid>,
        offset: i64,
        limit: i64,
    ) -> Result<Vec<CarEntity>, sqlx::Error> {
        sqlx::query_as::<_, CarEntity>(
            r#"
            SELECT id, user_id, make, model, year, color, photo, is_default, created_at
            FROM cars
            WHERE ($1::uuid IS NULL OR user_id = $1)
            ORDER BY created_at DESC, id DESC
            OFFSET $2 LIMIT $3
            "#,
        )
        .bind(user_id)
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Total number of cars matching the filter.
    pub async fn count(&self, user_id: Option<Uuid>) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as(
            r#"
            SELECT COUNT(*)
            FROM cars
            WHERE ($1::uuid IS NULL OR user_id = $1)
            "#,
        )
        .bind(user_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(count.0)
    }
}
