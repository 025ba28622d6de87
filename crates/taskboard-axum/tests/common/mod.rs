//! Shared helpers for taskboard-axum integration tests.

pub mod client;

/// Origin used by CORS tests.
#[allow(dead_code)]
pub const TEST_CORS_ORIGIN: &str = "http://localhost:5173";
