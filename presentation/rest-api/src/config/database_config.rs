use persistence::db::{DatabaseConfig, create_postgres_pool, run_migrations};
use sqlx::PgPool;

/// Initialize database connection pool and apply pending migrations
///
/// # Errors
/// Returns error if the connection or a migration fails
pub async fn init_database(database_url: &str) -> anyhow::Result<PgPool> {
    let pool = create_postgres_pool(&DatabaseConfig::new(database_url.to_string())).await?;
    run_migrations(&pool).await?;
    Ok(pool)
}
