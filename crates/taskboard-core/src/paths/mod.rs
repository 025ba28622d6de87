//! Path utilities for taskboard data directories.
//!
//! # Design
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No interactive/terminal I/O
//! - OS-specific logic is kept private in `platform`

mod database;
mod error;
mod platform;

#[cfg(test)]
mod test_utils;

pub use database::database_path;
pub use error::PathError;
pub use platform::data_root;
