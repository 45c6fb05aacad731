//! Storage layer for the reelbase movie catalog.
//!
//! Owns the Postgres connection pool helpers, the row models and
//! request DTOs, and the repositories. Repositories are zero-sized
//! structs whose async methods take `&PgPool` as the first argument;
//! every multi-statement mutation runs inside one transaction.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Cheap connectivity probe used by startup and the health endpoint.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply pending migrations from `db/migrations`.
///
/// Creates the `movies`, `genres`, and `ratings` relations the
/// repositories assume exist.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}
