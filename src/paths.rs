//! Filesystem locations used by octoconnect
//!
//! ```text
//! ~/.octoconnect/
//! └── config.toml               # Client configuration
//! ```

use std::path::PathBuf;

/// Config directory name, under the home directory
const CONFIG_DIR: &str = ".octoconnect";

/// Config filename
const CONFIG_FILE: &str = "config.toml";

/// Get the octoconnect directory.
///
/// Returns `~/.octoconnect/`.
#[must_use]
pub fn config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(CONFIG_DIR)
}

/// Get the default config file path.
///
/// Returns `~/.octoconnect/config.toml`.
#[must_use]
pub fn config_file() -> PathBuf {
    config_dir().join(CONFIG_FILE)
}
