use crate::config::DatabaseConfig;
use crate::error::Result;
use sqlx::{postgres::PgPoolOptions, PgPool};
use std::time::Duration;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let pool = pool_options(config)
        .connect_with(config.connect_options()?)
        .await?;
    Ok(pool)
}

/// Builds the pool without opening a connection; the first query connects.
pub fn create_lazy_pool(config: &DatabaseConfig) -> Result<PgPool> {
    Ok(pool_options(config).connect_lazy_with(config.connect_options()?))
}

fn pool_options(config: &DatabaseConfig) -> PgPoolOptions {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.acquire_timeout_secs))
}
