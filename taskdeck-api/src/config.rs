/// Configuration management for the API server
///
/// This module loads configuration from environment variables and provides
/// a type-safe configuration struct.
///
/// # Environment Variables
///
/// - `DATABASE_URL`: SQLite connection string (default: sqlite://tasks.db)
/// - `DATABASE_MAX_CONNECTIONS`: pool size (default: 5)
/// - `API_HOST`: host to bind to (default: 127.0.0.1)
/// - `API_PORT`: port to bind to (default: 5000)
/// - `CORS_ORIGINS`: comma-separated allowed origins, `*` for permissive
///   (default: *)
/// - `ENVIRONMENT`: `production` enables strict transport headers
/// - `RUST_LOG`: log filter (default: info-level for the app crates)
///
/// Every variable has a default — the store is an embedded file, so the
/// server can start with no configuration at all.
///
/// # Example
///
/// ```no_run
/// use taskdeck_api::config::Config;
///
/// # fn example() -> anyhow::Result<()> {
/// let config = Config::from_env()?;
/// println!("Server will listen on {}", config.bind_address());
/// # Ok(())
/// # }
/// ```

use serde::{Deserialize, Serialize};
use std::env;

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// API server configuration
    pub api: ApiConfig,

    /// Database configuration
    pub database: DatabaseConfig,
}

/// API server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Host to bind to
    pub host: String,

    /// Port to bind to
    pub port: u16,

    /// Allowed CORS origins; a `*` entry means permissive
    pub cors_origins: Vec<String>,

    /// Whether this is a production deployment
    pub production: bool,
}

/// Database configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite connection URL
    pub url: String,

    /// Maximum number of connections in pool
    pub max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is present but has an invalid value
    /// (e.g. a non-numeric port).
    pub fn from_env() -> anyhow::Result<Self> {
        // Load .env file if present (for development)
        dotenvy::dotenv().ok();

        let api_host = env::var("API_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let api_port = env::var("API_PORT")
            .unwrap_or_else(|_| "5000".to_string())
            .parse::<u16>()?;

        let cors_origins = env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let production = env::var("ENVIRONMENT")
            .map(|value| value == "production")
            .unwrap_or(false);

        let database_url =
            env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://tasks.db".to_string());

        let max_connections = env::var("DATABASE_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "5".to_string())
            .parse::<u32>()?;

        Ok(Self {
            api: ApiConfig {
                host: api_host,
                port: api_port,
                cors_origins,
                production,
            },
            database: DatabaseConfig {
                url: database_url,
                max_connections,
            },
        })
    }

    /// Returns the server bind address
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.api.host, self.api.port)
    }
}
