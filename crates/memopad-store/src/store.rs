//! Memo store mediating between the in-memory log and durable storage.

use crate::backend::StorageBackend;
use crate::error::MemoError;
use crate::model::MemoLog;
use log::{debug, info};

/// Storage key used when none is configured.
pub const DEFAULT_MEMO_KEY: &str = "memos";

/// Durable, ordered log of text memos under a single fixed storage key.
///
/// The store owns the in-memory log and keeps it in sync with the backend:
/// a successful `add` is durably visible to a subsequent `list`, including
/// across restarts within the same storage scope. Writes replace the whole
/// stored value, so independent hosts sharing a key resolve conflicts
/// last-writer-wins. Rewriting the full log on every add is O(n) per
/// write, which is fine at the tens to low hundreds of memos this store is
/// meant for.
pub struct MemoStore<B: StorageBackend> {
    backend: B,
    key: String,
    /// `None` until `rehydrate` (or `start_empty`) has run.
    log: Option<MemoLog>,
}

impl<B: StorageBackend> MemoStore<B> {
    /// Create a store over the given backend using [`DEFAULT_MEMO_KEY`].
    pub fn new(backend: B) -> Self {
        Self::with_key(backend, DEFAULT_MEMO_KEY)
    }

    /// Create a store over the given backend and storage key.
    pub fn with_key(backend: B, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
            log: None,
        }
    }

    /// Whether `rehydrate` has completed and `add`/`list` are usable.
    pub fn is_ready(&self) -> bool {
        self.log.is_some()
    }

    /// Storage key this store reads and writes.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Reference to the underlying backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Load the memo log from storage.
    ///
    /// An absent key yields an empty log. Idempotent: calling again simply
    /// re-reads storage, which changes nothing unless another writer
    /// touched the key. A present value that is not a JSON array of
    /// strings fails with [`MemoError::CorruptState`] naming the raw value
    /// and leaves the store's prior state untouched; callers that prefer
    /// to continue from an empty log can use [`MemoStore::start_empty`].
    pub fn rehydrate(&mut self) -> Result<&MemoLog, MemoError> {
        let log = match self.backend.read(&self.key)? {
            None => MemoLog::new(),
            Some(raw) => serde_json::from_str(&raw).map_err(|_| MemoError::CorruptState {
                key: self.key.clone(),
                raw,
            })?,
        };
        info!(
            "rehydrated memo log (key={}, entries={})",
            self.key,
            log.len()
        );
        Ok(self.log.insert(log))
    }

    /// Start from an empty in-memory log without touching storage.
    ///
    /// Fallback for hosts that choose to continue past a corrupt stored
    /// value; the next successful `add` replaces it.
    pub fn start_empty(&mut self) {
        self.log = Some(MemoLog::new());
    }

    /// Append a memo and persist the updated log.
    ///
    /// Texts that are empty after trimming are rejected without mutation
    /// and yield `Ok(false)`; otherwise the original untrimmed text is
    /// appended and the whole log is rewritten to the storage key. If the
    /// write fails, the in-memory append is rolled back so memory and
    /// storage never diverge.
    pub fn add(&mut self, text: &str) -> Result<bool, MemoError> {
        let log = self.log.as_mut().ok_or(MemoError::NotInitialized)?;
        if text.trim().is_empty() {
            debug!("skipped empty memo (key={})", self.key);
            return Ok(false);
        }

        log.append(text);
        let serialized = match serde_json::to_string(log) {
            Ok(serialized) => serialized,
            Err(err) => {
                log.pop();
                return Err(MemoError::Persistence(err.to_string()));
            }
        };
        if let Err(err) = self.backend.write(&self.key, &serialized) {
            log.pop();
            return Err(err);
        }

        debug!("appended memo (key={}, entries={})", self.key, log.len());
        Ok(true)
    }

    /// Snapshot of the memo texts in insertion order.
    ///
    /// Returns a fresh owned sequence, safe to consume repeatedly; storage
    /// is not touched.
    pub fn list(&self) -> Result<Vec<String>, MemoError> {
        let log = self.log.as_ref().ok_or(MemoError::NotInitialized)?;
        Ok(log.texts().to_vec())
    }
}
