//! Public SDK surface for Memopad.
//!
//! This crate re-exports the building blocks and provides a small
//! initialization helper to keep consumer setup consistent.

/// Re-export for convenience.
pub use memopad_config as config;
/// Re-export for convenience.
pub use memopad_store as store;

#[inline]
/// Initialize logging using env_logger.
///
/// Binaries are expected to call this early in startup to ensure log
/// output is wired up.
pub fn init_logging() {
    let _ = env_logger::try_init();
}
