//! Storage adapter for the school directory.
//!
//! Owns connection pool construction, schema migrations, and the
//! model/repository layer. The pool is created explicitly at startup and
//! injected into handlers; nothing in this crate holds global state.

pub mod models;
pub mod repositories;

use sqlx::postgres::PgPoolOptions;

/// Maximum concurrent connections held by the pool.
const MAX_CONNECTIONS: u32 = 20;

pub type DbPool = sqlx::PgPool;

/// Create a bounded connection pool from a database URL.
pub async fn create_pool(database_url: &str) -> Result<DbPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(MAX_CONNECTIONS)
        .connect(database_url)
        .await
}

/// Verify the database is reachable.
pub async fn health_check(pool: &DbPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1").execute(pool).await.map(|_| ())
}

/// Apply any pending migrations from this crate's `migrations/` directory.
pub async fn run_migrations(pool: &DbPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
