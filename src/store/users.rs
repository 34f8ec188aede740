use crate::{error::AppError, models::User};
use sqlx::SqlitePool;

/// Error message for a second registration with an existing email.
pub const DUPLICATE_ACCOUNT: &str = "User already exists";

/// Credential store backed by the `users` table.
#[derive(Debug, Clone)]
pub struct UserStore {
    pool: SqlitePool,
}

impl UserStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password_hash FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    /// Persists a new user.
    ///
    /// Callers check `find_by_email` first; the `UNIQUE` constraint on `email`
    /// catches registrations that race past that check and reports them with
    /// the same duplicate-account error.
    pub async fn insert(&self, user: &User) -> Result<(), AppError> {
        sqlx::query("INSERT INTO users (id, name, email, password_hash) VALUES (?, ?, ?, ?)")
            .bind(&user.id)
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .execute(&self.pool)
            .await
            .map_err(|e| match e {
                sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                    AppError::BadRequest(DUPLICATE_ACCOUNT.into())
                }
                other => other.into(),
            })?;
        Ok(())
    }
}
