pub mod course_repository;
pub mod repository;
pub mod student_repository;

use std::str::FromStr;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use tracing::info;

use crate::config::Config;

pub use course_repository::CourseRepository;
pub use repository::Repository;
pub use student_repository::StudentRepository;

/// Opens the pool described by `config` and brings the schema up to date.
pub async fn connect(config: &Config) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(&config.database_url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await?;

    migrate(&pool).await?;
    info!("connected to {}", config.database_url);

    Ok(pool)
}

/// Single-connection in-memory store; every pooled connection to `:memory:` would
/// otherwise see its own empty database.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")?.foreign_keys(true);
    let pool = memory_pool(options).await?;
    migrate(&pool).await?;
    Ok(pool)
}

async fn memory_pool(options: SqliteConnectOptions) -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect_with(options)
        .await
}

pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}

#[cfg(test)]
pub(crate) async fn setup_test_db() -> SqlitePool {
    connect_in_memory().await.expect("Failed to create test db")
}

/// Test store with foreign keys off, so orphaned students can be written.
#[cfg(test)]
pub(crate) async fn setup_test_db_without_foreign_keys() -> SqlitePool {
    let options = SqliteConnectOptions::from_str("sqlite::memory:")
        .expect("valid sqlite url")
        .foreign_keys(false);
    let pool = memory_pool(options).await.expect("Failed to create test db");
    migrate(&pool).await.expect("Failed to run migrations");
    pool
}
