//! Configuration schema for Memopad.

use crate::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root config for Memopad.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct MemopadConfig {
    #[serde(default, rename = "$schema")]
    pub schema: Option<String>,
    #[serde(default)]
    pub storage: StorageConfig,
}

impl MemopadConfig {
    /// Validate field values after deserialization.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.storage.key.trim().is_empty() {
            return Err(ConfigError::InvalidField {
                path: "storage.key".to_string(),
                message: "storage key must not be empty".to_string(),
            });
        }
        Ok(())
    }

    /// Effective storage root: the configured directory or the platform
    /// default.
    pub fn storage_root(&self) -> PathBuf {
        self.storage
            .root
            .clone()
            .unwrap_or_else(default_storage_root)
    }
}

/// Storage location and key settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persisted memo log; `None` means the platform
    /// data directory.
    #[serde(default)]
    pub root: Option<PathBuf>,
    /// Storage key the memo log is kept under.
    #[serde(default = "default_storage_key")]
    pub key: String,
}

impl Default for StorageConfig {
    /// Default storage settings.
    fn default() -> Self {
        Self {
            root: None,
            key: default_storage_key(),
        }
    }
}

/// Default storage key for the memo log.
fn default_storage_key() -> String {
    memopad_store::DEFAULT_MEMO_KEY.to_string()
}

/// Default storage root under the platform data directory, falling back to
/// `.memopad` in the current directory when no home is available.
pub fn default_storage_root() -> PathBuf {
    directories::ProjectDirs::from("", "", "memopad")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(".memopad"))
}

#[cfg(test)]
mod tests {
    use super::MemopadConfig;
    use crate::ConfigError;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_use_the_memos_key() {
        let config = MemopadConfig::default();
        assert_eq!(config.storage.key, "memos");
        assert_eq!(config.storage.root, None);
        config.validate().expect("defaults are valid");
    }

    #[test]
    fn blank_storage_key_fails_validation() {
        let mut config = MemopadConfig::default();
        config.storage.key = "   ".to_string();

        match config.validate() {
            Err(ConfigError::InvalidField { path, .. }) => {
                assert_eq!(path, "storage.key");
            }
            other => panic!("expected InvalidField, got {other:?}"),
        }
    }
}
