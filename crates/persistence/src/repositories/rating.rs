//! Rating repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::RatingEntity;

/// Select fragment joining a rating with rater and rated users.
fn rating_select(where_clause: &str, tail: &str) -> String {
    format!(
        r#"
        SELECT rt.id, rt.stars, rt.message, rt.beep_id, rt.timestamp,
               rater.id AS rater_id, rater.first AS rater_first,
               rater.last AS rater_last, rater.username AS rater_username,
               rater.photo AS rater_photo,
               rated.id AS rated_id, rated.first AS rated_first,
               rated.last AS rated_last, rated.username AS rated_username,
               rated.photo AS rated_photo
        FROM ratings rt
        JOIN users rater ON rater.id = rt.rater_id
        JOIN users rated ON rated.id = rt.rated_id
        {where_clause}
        {tail}
        "#
    )
}

/// Repository for rating-related database operations.
#[derive(Clone)]
pub struct RatingRepository {
    pool: PgPool,
}

impl RatingRepository {
    /// Creates a new RatingRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create a rating and return its id. Ratings are immutable afterwards.
    pub async fn insert_rating(
        &self,
        rater_id: Uuid,
        rated_id: Uuid,
        stars: i32,
        message: Option<&str>,
        beep_id: Option<Uuid>,
    ) -> Result<Uuid, sqlx::Error> {
        let row: (Uuid,) = sqlx::query_as(
            r#"
            INSERT INTO ratings (rater_id, rated_id, stars, message, beep_id)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(rater_id)
        .bind(rated_id)
        .bind(stars)
        .bind(message)
        .bind(beep_id)
        .fetch_one(&self.pool)
        .await?;
        Ok(row.0)
    }

    /// One page of ratings, newest first.
    pub async fn list(&self, offset: i64, limit: i64) -> Result<Vec<RatingEntity>, sqlx::Error> {
        let sql = rating_select("", "ORDER BY rt.timestamp DESC, rt.id DESC OFFSET $1 LIMIT $2");
        sqlx::query_as::<_, RatingEntity>(&sql)
            .bind(offset)
            .bind(limit)
            .fetch_all(&self.pool)
            .await
    }

    /// Total number of ratings.
    pub async fn count(&self) -> Result<i64, sqlx::Error> {
        let count: (i64,) = sqlx::query_as("SELECT COUNT(*) FROM ratings")
            .fetch_one(&self.pool)
            .await?;
        Ok(count.0)
    }
}
