//! verklisti - server-rendered todo list
//!
//! Startup sequencing lives here: configuration, tracing, the database
//! pool and schema, then the HTTP server. A missing DATABASE_URL is a
//! fatal configuration error; the process exits before binding a
//! listener.

use std::net::SocketAddr;

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use verklisti_server::db::{create_pool, migrations, spawn_pool_watchdog};
use verklisti_server::http::{run_server, ServerConfig};

#[derive(Parser, Debug)]
#[command(
    name = "verklisti",
    author,
    version,
    about = "Server-rendered todo list over Postgres"
)]
struct Cli {
    /// Address to bind to (default: 127.0.0.1:3030)
    #[arg(long, short = 'b', default_value = "127.0.0.1:3030")]
    bind: SocketAddr,

    /// Database URL (overrides environment)
    #[arg(long, env = "DATABASE_URL")]
    database_url: Option<String>,
}

fn init_tracing() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .compact()
        .try_init()
        .map_err(|err| anyhow!(err))
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is optional; real environment wins
    dotenvy::dotenv().ok();
    init_tracing().ok();

    let cli = Cli::parse();

    let database_url = cli
        .database_url
        .context("DATABASE_URL not set. Set via --database-url or the DATABASE_URL env var")?;

    let pool = create_pool(&database_url)
        .await
        .context("Failed to create database pool")?;

    migrations::run(&pool)
        .await
        .context("Failed to run migrations")?;

    // Aborts the process if the database goes away mid-flight
    let _watchdog = spawn_pool_watchdog(pool.clone());

    tracing::info!("Starting verklisti on {}", cli.bind);

    let config = ServerConfig { bind_addr: cli.bind };
    run_server(pool, config).await.context("Server error")?;

    Ok(())
}
