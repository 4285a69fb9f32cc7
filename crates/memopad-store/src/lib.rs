//! Durable append-only memo log for Memopad.

pub mod backend;
pub mod error;
pub mod model;
pub mod store;

/// Storage backend interface and default implementations.
pub use backend::{FileBackend, InMemoryBackend, StorageBackend};
/// Memo error type.
pub use error::MemoError;
/// Ordered memo log model.
pub use model::MemoLog;
/// Memo store over a storage backend.
pub use store::{DEFAULT_MEMO_KEY, MemoStore};
