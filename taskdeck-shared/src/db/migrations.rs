/// Database migration runner
///
/// Schema changes are a versioned list of SQL files embedded at compile
/// time from the `migrations/` directory and applied through sqlx's
/// migrator. Each migration runs at most once; re-running the set against
/// an up-to-date store is a no-op, so the runner can be called
/// unconditionally at every startup.
///
/// A migration failure leaves `_sqlx_migrations` marked accordingly and is
/// returned to the caller. The server treats that as fatal: a partially
/// migrated schema silently hides rows from ownership-scoped queries,
/// which is worse than refusing to start.
///
/// # Example
///
/// ```no_run
/// use taskdeck_shared::db::migrations::{get_migration_status, run_migrations};
/// use taskdeck_shared::db::pool::{create_pool, DatabaseConfig};
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let pool = create_pool(DatabaseConfig::default()).await?;
///     run_migrations(&pool).await?;
///
///     let status = get_migration_status(&pool).await?;
///     println!("Applied {} migrations", status.applied_migrations);
///     Ok(())
/// }
/// ```

use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Migration status information
#[derive(Debug, Clone)]
pub struct MigrationStatus {
    /// Number of migrations that have been applied successfully
    pub applied_migrations: usize,

    /// Latest applied migration version
    pub latest_version: Option<i64>,
}

/// Runs all pending database migrations
///
/// # Errors
///
/// Returns an error if a migration file fails to execute or a previously
/// applied migration no longer matches its recorded checksum.
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    info!("Starting database migrations");

    let migrations = sqlx::migrate!("./migrations");

    match migrations.run(pool).await {
        Ok(()) => {
            info!("All database migrations completed successfully");
            Ok(())
        }
        Err(e) => {
            warn!("Migration failed: {}", e);
            Err(e)
        }
    }
}

/// Gets the current migration status
///
/// Reports how many migrations have been recorded as applied. Useful for
/// diagnostics and for asserting idempotency in tests.
pub async fn get_migration_status(pool: &SqlitePool) -> Result<MigrationStatus, sqlx::Error> {
    debug!("Checking migration status");

    let table_exists: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM sqlite_master
         WHERE type = 'table' AND name = '_sqlx_migrations'",
    )
    .fetch_one(pool)
    .await?;

    if table_exists == 0 {
        debug!("Migrations table does not exist yet");
        return Ok(MigrationStatus {
            applied_migrations: 0,
            latest_version: None,
        });
    }

    let (count, latest_version): (i64, Option<i64>) = sqlx::query_as(
        "SELECT COUNT(*), MAX(version)
         FROM _sqlx_migrations
         WHERE success = 1",
    )
    .fetch_one(pool)
    .await?;

    debug!(
        applied_migrations = count,
        latest_version = ?latest_version,
        "Migration status retrieved"
    );

    Ok(MigrationStatus {
        applied_migrations: count as usize,
        latest_version,
    })
}
