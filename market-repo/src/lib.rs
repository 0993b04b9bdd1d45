//! # Market Repository
//!
//! Concrete PostgreSQL adapters implementing the repository ports from
//! `market-types`, plus the storage error classifier every adapter routes
//! its failures through.

use sqlx::PgPool;

pub mod classify;
pub mod products;
pub mod users;

mod types;

pub use classify::classify;
pub use products::PgProductRepository;
pub use users::PgUserRepository;

/// Executes SQL statements from a migration file, splitting by semicolons.
async fn execute_migration(pool: &PgPool, sql: &str, name: &str) -> Result<(), anyhow::Error> {
    for statement in sql.split(';') {
        let stmt = statement.trim();
        if !stmt.is_empty() {
            sqlx::query(stmt)
                .execute(pool)
                .await
                .map_err(|e| anyhow::anyhow!("Migration {} failed: {}", name, e))?;
        }
    }
    Ok(())
}

/// Runs all database migrations.
async fn run_migrations(pool: &PgPool) -> Result<(), anyhow::Error> {
    execute_migration(
        pool,
        include_str!("../migrations/0001_create_tables.sql"),
        "0001",
    )
    .await?;

    execute_migration(
        pool,
        include_str!("../migrations/0002_seed_parents.sql"),
        "0002",
    )
    .await?;

    Ok(())
}

/// Connects a pool and brings the schema up to date.
///
/// Both adapters share the returned pool; it is safe for concurrent
/// independent use across requests.
pub async fn connect(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = PgPool::connect(database_url).await?;
    run_migrations(&pool).await?;
    tracing::info!("database schema up to date");
    Ok(pool)
}
