use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPool, PgPoolOptions};
use crate::config::DatabaseConfig;
use anyhow::Result;

pub use conversations::*;
pub use pool::*;

pub mod pool;
pub mod conversations;

pub async fn create_pool(config: &DatabaseConfig) -> Result<PgPool> {
    let mut options = PgConnectOptions::from_str(&config.url)?;
    if let Some(name) = &config.name {
        options = options.database(name);
    }

    let pool = PgPoolOptions::new()
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_with(options)
        .await?;

    // Test connection
    health_check(&pool).await?;

    Ok(pool)
}
