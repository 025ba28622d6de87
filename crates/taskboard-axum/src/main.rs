//! `taskboard-server` entry point.
//!
//! Flags fall back to `TASKBOARD_*` environment variables, which may also
//! come from a `.env` file.

use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use taskboard_axum::{DEFAULT_PORT, ServerConfig, start_server};

/// Task tracking HTTP API backed by `SQLite`.
#[derive(Debug, Parser)]
#[command(name = "taskboard-server", version, about)]
struct Cli {
    /// Port to listen on
    #[arg(long, env = "TASKBOARD_PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Path to the SQLite database file (defaults to the data directory)
    #[arg(long, env = "TASKBOARD_DATABASE")]
    database: Option<PathBuf>,

    /// Allowed CORS origin; repeat or comma-separate for several (default: any)
    #[arg(long = "cors-origin", env = "TASKBOARD_CORS_ORIGINS", value_delimiter = ',')]
    cors_origins: Vec<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables before clap reads them
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let mut config =
        ServerConfig::for_database(cli.database)?.with_allowed_origins(cli.cors_origins);
    config.port = cli.port;

    start_server(config).await
}
