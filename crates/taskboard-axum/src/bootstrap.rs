//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together
//! for the Axum web adapter. Tests reuse [`AxumContext::from_pool`] with an
//! isolated pool instead of replacing dependencies after construction.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use taskboard_core::paths::database_path;
use taskboard_core::{AppCore, PathError};
use taskboard_db::{CoreFactory, SqlitePool, setup_database};

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 9876;

/// CORS configuration for the web server.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CorsConfig {
    /// Allow all origins (development mode).
    #[default]
    AllowAll,
    /// Allow specific origins (production mode).
    AllowOrigins(Vec<String>),
}

impl CorsConfig {
    /// Build from a list of origins; an empty list allows all.
    pub fn from_origins(origins: Vec<String>) -> Self {
        let origins: Vec<String> = origins
            .into_iter()
            .map(|o| o.trim().to_string())
            .filter(|o| !o.is_empty())
            .collect();
        if origins.is_empty() {
            Self::AllowAll
        } else {
            Self::AllowOrigins(origins)
        }
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Port for the HTTP server.
    pub port: u16,
    /// Path to the `SQLite` database file.
    pub database_path: PathBuf,
    /// CORS configuration.
    pub cors: CorsConfig,
}

impl ServerConfig {
    /// Create config for an explicit database file, falling back to the
    /// default location.
    ///
    /// The default location is only resolved (and created) when no file
    /// is given.
    pub fn for_database(database: Option<PathBuf>) -> Result<Self> {
        Self::resolve(database, database_path)
    }

    fn resolve<F>(database: Option<PathBuf>, default_path: F) -> Result<Self>
    where
        F: FnOnce() -> Result<PathBuf, PathError>,
    {
        let database_path = match database {
            Some(path) => path,
            None => default_path()?,
        };
        Ok(Self {
            port: DEFAULT_PORT,
            database_path,
            cors: CorsConfig::default(),
        })
    }

    /// Set CORS to allow specific origins.
    #[must_use]
    pub fn with_allowed_origins(mut self, origins: Vec<String>) -> Self {
        self.cors = CorsConfig::from_origins(origins);
        self
    }
}

/// Application context for the Axum adapter.
///
/// Holds all initialized services for the web server.
pub struct AxumContext {
    /// The core application facade.
    pub core: Arc<AppCore>,
}

impl AxumContext {
    /// Wire every service on top of an already prepared pool.
    ///
    /// The pool's database must already have the schema.
    pub fn from_pool(pool: SqlitePool) -> Self {
        Self {
            core: Arc::new(CoreFactory::build_app_core(pool)),
        }
    }
}

/// Bootstrap the Axum server with all services.
pub async fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    tracing::info!(
        target: "taskboard.paths",
        database_path = %config.database_path.display(),
        "Axum bootstrap resolved paths"
    );

    let pool = setup_database(&config.database_path).await?;
    Ok(AxumContext::from_pool(pool))
}

/// Start the web server on the configured port.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    use tokio::net::TcpListener;
    use tracing::info;

    let ctx = bootstrap(&config).await?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("taskboard API listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("taskboard API stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
