//! Error types for memo storage operations.

/// Errors returned by the memo store and its backends.
///
/// Every variant is recoverable by the caller; the store never swallows a
/// failure silently.
#[derive(Debug, thiserror::Error)]
pub enum MemoError {
    /// Stored value exists but is not a JSON array of strings.
    #[error("corrupt memo log at key {key:?}: {raw}")]
    CorruptState {
        /// Storage key holding the corrupt value.
        key: String,
        /// Raw stored value that failed to parse.
        raw: String,
    },
    /// Reading from or writing to the host store failed.
    #[error("persistence failure: {0}")]
    Persistence(String),
    /// `add` or `list` was called before `rehydrate`.
    #[error("memo store is not initialized; call rehydrate first")]
    NotInitialized,
}
