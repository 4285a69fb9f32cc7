//! Memo log model persisted by the store.

use serde::{Deserialize, Serialize};

/// Ordered, append-only collection of memo texts.
///
/// Entries are plain text with no identifier or timestamp. Insertion order
/// is significant and preserved; there is no reordering and no
/// deduplication. Serializes transparently as a JSON array of strings.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct MemoLog {
    entries: Vec<String>,
}

impl MemoLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a memo text at the end of the log.
    pub fn append(&mut self, text: impl Into<String>) {
        self.entries.push(text.into());
    }

    /// Drop the most recently appended entry, if any.
    pub(crate) fn pop(&mut self) -> Option<String> {
        self.entries.pop()
    }

    /// Number of memos in the log.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the log holds no memos.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Memo texts in insertion order.
    pub fn texts(&self) -> &[String] {
        &self.entries
    }
}
