//! Queue repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::QueueEntryEntity;
use crate::repositories::user::ACTIVE_STATUSES;

/// Select fragment joining a queue entry with its rider and derived rating.
fn entry_select(where_clause: &str, order_clause: &str) -> String {
    format!(
        r#"
        SELECT q.id, q.beeper_id, q.rider_id, q.origin, q.destination, q.group_size,
               q.status, q.created_at,
               u.first AS rider_first, u.last AS rider_last, u.phone AS rider_phone,
               u.venmo AS rider_venmo, u.cashapp AS rider_cashapp, u.photo AS rider_photo,
               (SELECT AVG(r.stars)::DOUBLE PRECISION FROM ratings r WHERE r.rated_id = u.id) AS rider_rating
        FROM queue_entries q
        JOIN users u ON u.id = q.rider_id
        {where_clause}
        {order_clause}
        "#
    )
}

/// Repository for queue-related database operations.
#[derive(Clone)]
pub struct QueueRepository {
    pool: PgPool,
}

impl QueueRepository {
    /// Creates a new QueueRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a waiting entry and return its id.
    pub async fn insert_entry(
        &self,
        beeper_id: Uuid,
        rider_id: Uuid,
        origin: &str,
        destination: &str,
        group_size: i32,
    ) -> Result<Uuid, sqlx::Error> {
        let row: (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO queue_entries (beeper_id, rider_id, origin, destination, group_size)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(beeper_id)
        .bind(rider_id)
        .bind(origin)
        .bind(destination)
        .bind(group_size)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.0)
    }

    /// Find a single entry (with rider) by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<QueueEntryEntity>, sqlx::Error> {
        let sql = entry_select("WHERE q.id = $1", "");
        sqlx::query_as::<_, QueueEntryEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// All active entries for a beeper, oldest first.
    pub async fn find_active_by_beeper(
        &self,
        beeper_id: Uuid,
    ) -> Result<Vec<QueueEntryEntity>, sqlx::Error> {
        let sql = entry_select(
            &format!("WHERE q.beeper_id = $1 AND q.status IN {ACTIVE_STATUSES}"),
            "ORDER BY q.created_at ASC",
        );
        sqlx::query_as::<_, QueueEntryEntity>(&sql)
            .bind(beeper_id)
            .fetch_all(&self.pool)
            .await
    }

    /// Whether the rider already holds an active entry in this beeper's queue.
    pub async fn rider_has_active_entry(
        &self,
        beeper_id: Uuid,
        rider_id: Uuid,
    ) -> Result<bool, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM queue_entries
            WHERE beeper_id = $1 AND rider_id = $2 AND status IN {ACTIVE_STATUSES}
            "#
        );
        let count: (i64,) = sqlx::query_as(&sql)
            .bind(beeper_id)
            .bind(rider_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0 > 0)
    }

    /// Number of active entries in a beeper's queue.
    pub async fn count_active_for_beeper(&self, beeper_id: Uuid) -> Result<i64, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT COUNT(*)
            FROM queue_entries
            WHERE beeper_id = $1 AND status IN {ACTIVE_STATUSES}
            "#
        );
        let count: (i64,) = sqlx::query_as(&sql)
            .bind(beeper_id)
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    /// Set an entry's status. Returns the number of rows affected.
    pub async fn update_status(&self, id: Uuid, status: &str) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE queue_entries
            SET status = $2
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(status)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Remove an entry. Returns the number of rows affected.
    pub async fn delete_entry(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM queue_entries
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
