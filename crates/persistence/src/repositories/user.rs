//! User repository for database operations.

use sqlx::PgPool;
use uuid::Uuid;

use crate::entities::{BeeperCandidateEntity, UserEntity};

/// Active statuses occupy a queue slot; shared by the queue-size subqueries.
pub(crate) const ACTIVE_STATUSES: &str =
    "('waiting', 'accepted', 'on_the_way', 'here', 'in_progress')";

/// Input for creating a user account.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub first: String,
    pub last: String,
    pub username: String,
    pub email: String,
    pub phone: String,
    pub venmo: Option<String>,
    pub cashapp: Option<String>,
    pub password_hash: String,
}

/// Repository for user-related database operations.
#[derive(Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Creates a new UserRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Insert a new user account.
    pub async fn insert_user(&self, input: NewUser) -> Result<UserEntity, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            INSERT INTO users (first, last, username, email, phone, venmo, cashapp, password_hash)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING id, first, last, username, email, phone, venmo, cashapp, photo,
                      password_hash, role, is_beeping, singles_rate, group_rate, capacity,
                      created_at, updated_at
            "#,
        )
        .bind(&input.first)
        .bind(&input.last)
        .bind(&input.username)
        .bind(&input.email)
        .bind(&input.phone)
        .bind(&input.venmo)
        .bind(&input.cashapp)
        .bind(&input.password_hash)
        .fetch_one(&self.pool)
        .await
    }

    /// Find a user by id.
    pub async fn find_by_id(&self, user_id: Uuid) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, first, last, username, email, phone, venmo, cashapp, photo,
                   password_hash, role, is_beeping, singles_rate, group_rate, capacity,
                   created_at, updated_at
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
    }

    /// Find a user by username (login).
    pub async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            SELECT id, first, last, username, email, phone, venmo, cashapp, photo,
                   password_hash, role, is_beeping, singles_rate, group_rate, capacity,
                   created_at, updated_at
            FROM users
            WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await
    }

    /// Update a user's beeper availability and rates.
    /// Returns the updated row, or None when the user does not exist.
    pub async fn update_beeper_settings(
        &self,
        user_id: Uuid,
        is_beeping: bool,
        singles_rate: f64,
        group_rate: f64,
        capacity: i32,
    ) -> Result<Option<UserEntity>, sqlx::Error> {
        sqlx::query_as::<_, UserEntity>(
            r#"
            UPDATE users
            SET is_beeping = $2, singles_rate = $3, group_rate = $4, capacity = $5,
                updated_at = NOW()
            WHERE id = $1
            RETURNING id, first, last, username, email, phone, venmo, cashapp, photo,
                      password_hash, role, is_beeping, singles_rate, group_rate, capacity,
                      created_at, updated_at
            "#,
        )
        .bind(user_id)
        .bind(is_beeping)
        .bind(singles_rate)
        .bind(group_rate)
        .bind(capacity)
        .fetch_optional(&self.pool)
        .await
    }

    /// All currently-beeping users joined with their last known coordinate,
    /// derived rating and active queue size. Least-busy beepers first.
    pub async fn find_beeping_candidates(
        &self,
    ) -> Result<Vec<BeeperCandidateEntity>, sqlx::Error> {
        let sql = format!(
            r#"
            SELECT u.id, u.first, u.last, u.photo, u.role, u.singles_rate, u.group_rate,
                   u.capacity, u.venmo, u.cashapp,
                   (SELECT AVG(r.stars)::DOUBLE PRECISION FROM ratings r WHERE r.rated_id = u.id) AS rating,
                   (SELECT COUNT(*) FROM queue_entries q
                    WHERE q.beeper_id = u.id AND q.status IN {statuses}) AS queue_size,
                   l.latitude, l.longitude
            FROM users u
            LEFT JOIN locations l ON l.user_id = u.id
            WHERE u.is_beeping = TRUE
            ORDER BY queue_size ASC, u.created_at ASC
            "#,
            statuses = ACTIVE_STATUSES
        );

        sqlx::query_as::<_, BeeperCandidateEntity>(&sql)
            .fetch_all(&self.pool)
            .await
    }
}
