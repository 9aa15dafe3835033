/// Database connection pool management
///
/// This module provides the SQLite connection pool used by the whole
/// application. The database lives in a single file which is created on
/// first start; foreign-key enforcement is switched on for every
/// connection since SQLite leaves it off by default.
///
/// # Example
///
/// ```no_run
/// use taskdeck_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let config = DatabaseConfig {
///         url: "sqlite://tasks.db".to_string(),
///         ..Default::default()
///     };
///
///     let pool = create_pool(config).await?;
///     Ok(())
/// }
/// ```

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, info};

/// Configuration for the database connection pool
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite connection URL (e.g. "sqlite://tasks.db" or "sqlite::memory:")
    pub url: String,

    /// Maximum number of connections in the pool
    ///
    /// SQLite serializes writes internally, so a handful of connections is
    /// plenty for a single-process server.
    pub max_connections: u32,

    /// Timeout for acquiring a connection from the pool (seconds)
    pub connect_timeout_seconds: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://tasks.db".to_string(),
            max_connections: 5,
            connect_timeout_seconds: 30,
        }
    }
}

/// Creates and initializes the SQLite connection pool
///
/// The database file is created if it does not exist yet. A health check
/// runs before the pool is handed out, so an unreachable or corrupt store
/// fails at startup instead of on the first request.
///
/// # Errors
///
/// Returns an error if the URL is invalid, the file cannot be opened or
/// created, or the health check fails.
pub async fn create_pool(config: DatabaseConfig) -> Result<SqlitePool, sqlx::Error> {
    info!(
        url = %config.url,
        max_connections = config.max_connections,
        "Creating database connection pool"
    );

    let options = SqliteConnectOptions::from_str(&config.url)?
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .acquire_timeout(Duration::from_secs(config.connect_timeout_seconds))
        .connect_with(options)
        .await?;

    health_check(&pool).await?;

    info!("Database connection pool created successfully");
    Ok(pool)
}

/// Performs a health check on the database connection
///
/// Executes a trivial query to verify the store is reachable and
/// responding.
pub async fn health_check(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    debug!("Performing database health check");

    let (value,): (i32,) = sqlx::query_as("SELECT 1").fetch_one(pool).await?;

    if value == 1 {
        debug!("Database health check passed");
        Ok(())
    } else {
        Err(sqlx::Error::Protocol(
            "Health check returned unexpected value".into(),
        ))
    }
}

/// Gracefully closes the connection pool
///
/// Called during shutdown so outstanding writes are flushed before the
/// process exits.
pub async fn close_pool(pool: SqlitePool) {
    info!("Closing database connection pool");
    pool.close().await;
}
