//! Path management for thinking configuration and state files.
//!
//! ```text
//! ~/.config/thinking/          # Config directory
//! └── config.toml              # ThinkingConfig
//!
//! ~/.local/share/thinking/     # Data directory
//! └── sessions.json            # Persisted session snapshot
//! ```

use std::path::PathBuf;
use thinking_core::{Result, ThinkingError};

const APP_DIR: &str = "thinking";
const CONFIG_FILE: &str = "config.toml";
const STATE_FILE: &str = "sessions.json";

/// Resolves platform directories for thinking (XDG on Linux).
pub struct ThinkingPaths;

impl ThinkingPaths {
    /// Returns the configuration directory, e.g. `~/.config/thinking/`.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the platform has no config directory.
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ThinkingError::config("Cannot find config directory"))
    }

    /// Returns the data directory, e.g. `~/.local/share/thinking/`.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the platform has no data directory.
    pub fn data_dir() -> Result<PathBuf> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or_else(|| ThinkingError::config("Cannot find data directory"))
    }

    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Default location of the persisted session snapshot.
    pub fn state_file() -> Result<PathBuf> {
        Ok(Self::data_dir()?.join(STATE_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_names() {
        // Home-less CI environments have no platform dirs; only check shape when present.
        if let Ok(path) = ThinkingPaths::config_file() {
            assert!(path.ends_with("thinking/config.toml"));
        }
        if let Ok(path) = ThinkingPaths::state_file() {
            assert!(path.ends_with("thinking/sessions.json"));
        }
    }
}
