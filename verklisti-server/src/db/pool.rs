//! Database connection pool management
//!
//! Uses sqlx PgPool with explicit connection limits. The pool is created
//! once at startup and handed to the server by value; there is no lazy
//! global.

use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;

/// Default maximum connections for the pool.
/// Matches the node-postgres default the app ran with before.
const DEFAULT_MAX_CONNECTIONS: u32 = 10;

/// Interval between watchdog pings.
const WATCHDOG_INTERVAL: Duration = Duration::from_secs(30);

/// Create a PostgreSQL connection pool.
///
/// # Errors
///
/// Returns an error if the connection fails.
pub async fn create_pool(database_url: &str) -> Result<PgPool, sqlx::Error> {
    create_pool_with_options(database_url, DEFAULT_MAX_CONNECTIONS).await
}

/// Create a PostgreSQL connection pool with a custom connection limit.
pub async fn create_pool_with_options(
    database_url: &str,
    max_connections: u32,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .connect(database_url)
        .await
}

/// Spawn the pool watchdog.
///
/// Pings the database on a fixed interval and aborts the process when the
/// ping fails. Serving requests against a broken pool risks hangs, so a
/// dead database is fatal rather than something to limp along with.
pub fn spawn_pool_watchdog(pool: PgPool) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(WATCHDOG_INTERVAL);
        // First tick fires immediately and doubles as a startup probe.
        loop {
            interval.tick().await;
            if let Err(err) = sqlx::query("SELECT 1").execute(&pool).await {
                tracing::error!("pool watchdog ping failed, aborting: {err}");
                std::process::exit(1);
            }
        }
    })
}
