use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::{Pool, Sqlite};
use std::str::FromStr;
use std::time::Duration;
use tracing::info;

use crate::config::settings::DatabaseConfig;

pub type DbPool = Pool<Sqlite>;

pub async fn connect_to_db(config: &DatabaseConfig) -> Result<DbPool, sqlx::Error> {
    // Movies may point at directors/genres that no longer exist.
    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(false);

    let pool_options = SqlitePoolOptions::new().acquire_timeout(Duration::from_secs(5));

    // Every connection to `:memory:` opens its own empty database, so the pool
    // must keep exactly one connection alive for its whole lifetime.
    let pool_options = if config.is_in_memory() {
        pool_options
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
    } else {
        pool_options
            .max_connections(config.max_connections.max(1))
            .idle_timeout(Duration::from_secs(600))
    };

    let pool = pool_options.connect_with(options).await?;

    info!(url = %config.url, "Connected to SQLite");
    Ok(pool)
}
