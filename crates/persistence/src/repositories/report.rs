//! Report repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::ReportEntity;

/// Select fragment joining a report with reporter, reported and handler.
fn report_select(where_clause: &str, tail: &str) -> String {
    format!(
        r#"
        SELECT rp.id, rp.reason, rp.beep_id, rp.notes, rp.timestamp,
               reporter.id AS reporter_id, reporter.first AS reporter_first,
               reporter.last AS reporter_last, reporter.username AS reporter_username,
               reporter.photo AS reporter_photo,
               reported.id AS reported_id, reported.first AS reported_first,
               reported.last AS reported_last, reported.username AS reported_username,
               reported.photo AS reported_photo,
               handler.id AS handler_id, handler.first AS handler_first,
               handler.last AS handler_last, handler.username AS handler_username,
               handler.photo AS handler_photo
        FROM reports rp
        JOIN users reporter ON reporter.id = rp.reporter_id
        JOIN users reported ON reported.id = rp.reported_id
        LEFT JOIN users handler ON handler.id = rp.handled_by
        {where_clause}
        {tail}
        "#
    )
}

/// Repository for report-related database operations.
#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    /// Creates a new ReportRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// File a report and return its id.
    pub async fn insert_report(
        &self,
        reporter_id: Uuid,
        reported_id: Uuid,
        reason: &str,
        beep_id: Option<Uuid>,
    ) -> Result<Uuid, sqlx::Error> {
        let row: (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO reports (reporter_id, reported_id, reason, beep_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(reporter_id)
        .bind(reported_id)
        .bind(reason)
        .bind(beep_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.0)
    }

    /// Find a single report by id.
    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ReportEntity>, sqlx::Error> {
        let sql = report_select("WHERE rp.id = $1", "");
        sqlx::query_as::<_, ReportEntity>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
    }

    /// One page of reports, newest first.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<ReportEntity>, sqlx::Error> {
        let sql = report_select("", "ORDER BY rp.timestamp DESC, rp.id DESC OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, ReportEntity>(&sql)
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }

    /// Total number of reports.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM reports")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }

    /// Replace a report's mutable fields. Returns the number of rows affected
    /// (0 when the report does not exist; nothing is written in that case).
    pub async fn update_report(
        &self,
        id: Uuid,
        reason: &str,
        notes: Option<&str>,
        handled_by: Option<Uuid>,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            UPDATE reports
            SET reason = $2, notes = $3, handled_by = $4
            WHERE id = $1
            "#,
        )
        .bind(id)
        .bind(reason)
        .bind(notes)
        .bind(handled_by)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete a report. Returns the number of rows affected.
    pub async fn delete_report(&self, id: Uuid) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            r#"
            DELETE FROM reports
            WHERE id = $1
            "#,
        )
        .bind(id)
        .execute(&self.pool)
        .await?;
        Ok(result.rows_affected())
    }
}
