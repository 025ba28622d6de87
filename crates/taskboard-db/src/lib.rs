//! `SQLite` persistence for taskboard.
//!
//! - [`schema`] declares every table and can create or drop them all
//! - [`setup`] opens the production database and ensures the schema
//! - [`repositories`] implements the core ports on top of `sqlx`
//! - [`factory`] wires repositories into `Repos` / `AppCore`
//!
//! With the `test-utils` feature, [`testing`] provides an ephemeral
//! file-backed store plus the fixtures integration tests run against.

#![deny(unsafe_code)]

pub mod factory;
pub mod repositories;
pub mod schema;
pub mod setup;

#[cfg(any(test, feature = "test-utils"))]
pub mod testing;

// Re-export factory for convenient access
pub use factory::CoreFactory;

// Re-export repository implementations
pub use repositories::SqliteTaskRepository;

pub use schema::{SCHEMA, Schema, TableDef};

// Adapters hand pools around without depending on sqlx directly
pub use sqlx::SqlitePool;

// Re-export setup functions for convenient access
pub use setup::setup_database;

// Re-export the test harness for integration tests
#[cfg(any(test, feature = "test-utils"))]
pub use testing::{EphemeralStore, Session, SessionFactory, TestHarness};
