//! Payment repository for database operations.
//!
//! Payments are written by the external payment processor; this service only
//! lists them.

use sqlx::PgPool;

use crate::entities::PaymentEntity;

/// Repository for payment-related database operations.
#[derive(Clone)]
pub struct PaymentRepository {
    pool: PgPool,
}

impl PaymentRepository {
    /// Creates a new PaymentRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// One page of payments, newest first.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<PaymentEntity>, sqlx::Error> {
        sqlx::query_as::<_, PaymentEntity>(
            r#"
            SELECT p.id, p.created, p.expires,
                   u.id AS user_id, u.first AS user_first, u.last AS user_last,
                   u.username AS user_username, u.photo AS user_photo
            FROM payments p
            JOIN users u ON u.id = p.user_id
            ORDER BY p.created DESC, p.id DESC
            OFFSET $1 LIMIT $2
            "#,
        )
        .bind(offset)
        .bind(limit)
        .fetch_all(&self.pool)
        .await
    }

    /// Total number of payments.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM payments")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
