//! # TaskDeck API Server
//!
//! JSON HTTP API for the TaskDeck task tracker: signup/login plus per-user
//! task CRUD over a SQLite file store.
//!
//! ## Startup sequence
//!
//! Configuration → pool → migrations → sample-data seeding → listener.
//! Migrations are versioned and a failure is fatal; seeding is best-effort.
//! Both finish before the listener binds, so initialization writes never
//! interleave with request traffic.
//!
//! ## Usage
//!
//! ```bash
//! cargo run -p taskdeck-api
//! ```

use taskdeck_api::{
    app::{build_router, AppState},
    config::Config,
};
use taskdeck_shared::db::{
    migrations::run_migrations,
    pool::{create_pool, DatabaseConfig},
    seed::seed_sample_data,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "taskdeck_api=debug,taskdeck_shared=debug,tower_http=debug".into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!(
        "TaskDeck API Server v{} starting...",
        env!("CARGO_PKG_VERSION")
    );
    tracing::warn!(
        "Credentials are stored and compared as plain text; \
         do not expose this server to untrusted networks"
    );

    let config = Config::from_env()?;

    let pool = create_pool(DatabaseConfig {
        url: config.database.url.clone(),
        max_connections: config.database.max_connections,
        ..Default::default()
    })
    .await?;

    // A partially migrated schema hides rows from ownership-scoped
    // queries, so a migration error aborts startup.
    run_migrations(&pool).await?;

    if let Err(error) = seed_sample_data(&pool).await {
        tracing::warn!(%error, "Sample data seeding failed");
    }

    let bind_address = config.bind_address();
    let state = AppState::new(pool, config);
    let app = build_router(state);

    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    tracing::info!("Server running on http://{}", bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "Failed to install shutdown handler");
        return;
    }
    tracing::info!("Shutdown signal received, exiting...");
}
