//! Axum web adapter for taskboard.
//!
//! [`bootstrap`] is the composition root: it opens the database and builds
//! an [`AxumContext`]. [`create_router`] turns a context into a router.
//! Tests build the same context from an isolated pool with
//! [`AxumContext::from_pool`], so the application under test is wired
//! exactly like production apart from the store it talks to.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Dev-dependencies used by integration tests
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use serde_json as _;
#[cfg(test)]
use tempfile as _;
#[cfg(test)]
use tower as _;

// Used by main.rs binary
use clap as _;
use dotenvy as _;
use tracing_subscriber as _;

pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use bootstrap::{AxumContext, CorsConfig, DEFAULT_PORT, ServerConfig, bootstrap, start_server};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
