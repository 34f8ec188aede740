//! SQLite pool creation and schema migration.
//!
//! The schema lives in `migrations/` and is embedded at compile time with
//! `sqlx::migrate!`, so a fresh database file is brought up to date on startup.

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

const MAX_CONNECTIONS: u32 = 5;

/// Opens a connection pool for `database_url`, creating the file if needed.
///
/// An in-memory URL (`sqlite::memory:`) gets a single, never-recycled
/// connection, because every SQLite connection to `:memory:` is a separate
/// database.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool_options = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        SqlitePoolOptions::new().max_connections(MAX_CONNECTIONS)
    };

    let pool = pool_options.connect_with(options).await?;
    log::info!("Connected to database at {}", database_url);
    Ok(pool)
}

/// Applies every pending migration.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    match sqlx::migrate!("./migrations").run(pool).await {
        Ok(()) => {
            log::info!("Database schema is up to date");
            Ok(())
        }
        Err(e) => {
            log::error!("Migration failed: {}", e);
            Err(e)
        }
    }
}

/// Round-trips a trivial query to confirm the database is reachable.
pub async fn ping(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[actix_rt::test]
    async fn test_migrations_create_tables() {
        let pool = connect("sqlite::memory:").await.unwrap();
        migrate(&pool).await.unwrap();

        let tables: Vec<(String,)> = sqlx::query_as(
            "SELECT name FROM sqlite_master WHERE type = 'table' AND name IN ('users', 'todos') ORDER BY name",
        )
        .fetch_all(&pool)
        .await
        .unwrap();

        let names: Vec<&str> = tables.iter().map(|(name,)| name.as_str()).collect();
        assert_eq!(names, vec!["todos", "users"]);
    }

    #[actix_rt::test]
    async fn test_migrate_is_idempotent() {
        let pool = connect("sqlite::memory:").await.unwrap();
        migrate(&pool).await.unwrap();
        migrate(&pool).await.unwrap();
    }
}
