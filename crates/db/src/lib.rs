//! Persistence layer for courtside: pool setup, migrations, row models,
//! repositories, the bundled seed catalog and the startup catalog loader.

pub mod catalog;
pub mod models;
pub mod repositories;
pub mod seed;

use sqlx::postgres::PgPoolOptions;

pub use catalog::{load_catalog, CatalogError};

pub type DbPool = sqlx::PgPool;

/// Create a connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(20)
        .connect(database_url)
        .await
}

/// Round-trip a trivial query to verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await?;
    Ok(())
}

/// Apply all pending migrations from `db/migrations`.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("../../db/migrations").run(pool).await
}

/// Wrap a row-to-domain conversion failure so repositories keep returning
/// `sqlx::Error`.
pub(crate) fn decode_error(err: courtside_core::error::CoreError) -> sqlx::Error {
    sqlx::Error::Decode(Box::new(err))
}
