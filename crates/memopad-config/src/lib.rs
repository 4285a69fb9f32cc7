//! Configuration model and loading for Memopad.
//!
//! This crate owns the Memopad config schema, validation, and JSON5 file
//! loading used by the CLI and embedding hosts.

mod error;
mod loader;
mod model;

/// Public error type returned by config loading and validation APIs.
pub use error::ConfigError;
/// Config file discovery and loading helpers.
pub use loader::{default_config_path, load_config};
/// Configuration schema models.
pub use model::*;
