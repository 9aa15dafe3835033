/// Database layer for TaskDeck
///
/// This module provides the SQLite connection pool, the versioned schema
/// migrations, and the one-shot sample-data seeding that runs at startup.
///
/// # Modules
///
/// - `pool`: SQLite connection pool management with health checks
/// - `migrations`: embedded migration runner
/// - `seed`: sample data inserted once into an empty store
///
/// Models live in the `models` module at the crate root.
///
/// # Example
///
/// ```no_run
/// use taskdeck_shared::db::pool::{create_pool, DatabaseConfig};
/// use taskdeck_shared::db::migrations::run_migrations;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool(DatabaseConfig::default()).await?;
///     run_migrations(&pool).await?;
///     Ok(())
/// }
/// ```

pub mod migrations;
pub mod pool;
pub mod seed;
