//! Config file discovery and JSON5 loading.

use crate::{ConfigError, MemopadConfig};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};

/// Default config filename.
const DEFAULT_CONFIG_FILE: &str = "memopad.json5";

/// Default config path under the user config dir, if resolvable.
pub fn default_config_path() -> Option<PathBuf> {
    directories::ProjectDirs::from("", "", "memopad")
        .map(|dirs| dirs.config_dir().join(DEFAULT_CONFIG_FILE))
}

/// Load config from an explicit path, or from the default location.
///
/// An explicit path must exist and parse. The default location is
/// optional: when it is absent the built-in defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<MemopadConfig, ConfigError> {
    let config = match path {
        Some(path) => load_file(path)?,
        None => match default_config_path() {
            Some(path) if path.exists() => load_file(&path)?,
            _ => {
                debug!("no config file found, using defaults");
                MemopadConfig::default()
            }
        },
    };
    config.validate()?;
    Ok(config)
}

/// Read and parse a single JSON5 config file.
fn load_file(path: &Path) -> Result<MemopadConfig, ConfigError> {
    debug!("loading config (path={})", path.display());
    let contents = fs::read_to_string(path)?;
    let config: MemopadConfig = json5::from_str(&contents)?;
    info!("loaded config (path={})", path.display());
    Ok(config)
}
