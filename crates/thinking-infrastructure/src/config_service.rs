//! Configuration service implementation.
//!
//! Loads [`ThinkingConfig`] from `~/.config/thinking/config.toml` (or an
//! explicit path) and caches it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};
use thinking_core::config::ThinkingConfig;
use thinking_core::{Result, ThinkingError};

use crate::paths::ThinkingPaths;
use crate::storage::AtomicFile;

/// Loads and caches the thinking configuration.
#[derive(Debug, Clone)]
pub struct ConfigService {
    file: Arc<AtomicFile<ThinkingConfig>>,
    /// Cached configuration, filled on first successful load.
    config: Arc<RwLock<Option<ThinkingConfig>>>,
}

impl ConfigService {
    /// Creates a service reading the default config file.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the config directory cannot be resolved.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ThinkingPaths::config_file()?))
    }

    /// Creates a service reading `path`.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Arc::new(AtomicFile::toml(path)),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Gets the configuration, loading it from file if not cached.
    ///
    /// A missing or empty file yields the defaults.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the file exists but cannot be read or parsed.
    pub fn get_config(&self) -> Result<ThinkingConfig> {
        if let Some(cached) = self
            .config
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
        {
            return Ok(cached.clone());
        }

        let loaded = self
            .file
            .load()
            .map_err(|e| {
                ThinkingError::config(format!("Failed to load {}: {}", self.path().display(), e))
            })?
            .unwrap_or_default();
        tracing::debug!("[ConfigService] Loaded config from {}", self.path().display());

        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(loaded.clone());
        Ok(loaded)
    }

    /// Writes `config` to the file and refreshes the cache.
    pub fn save_config(&self, config: &ThinkingConfig) -> Result<()> {
        self.file.save(config)?;
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = Some(config.clone());
        Ok(())
    }

    /// Invalidates the cache, forcing a reload on next access.
    pub fn invalidate_cache(&self) {
        *self.config.write().unwrap_or_else(PoisonError::into_inner) = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_missing_file_yields_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let service = ConfigService::with_path(temp_dir.path().join("config.toml"));
        assert_eq!(service.get_config().unwrap(), ThinkingConfig::default());
    }

    #[test]
    fn test_reads_file_and_caches() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "reset_categories = [\"chat\", \"thinking\"]\npersist = false\n").unwrap();

        let service = ConfigService::with_path(&path);
        let config = service.get_config().unwrap();
        assert_eq!(config.reset_categories, vec!["chat", "thinking"]);
        assert!(!config.persist);

        fs::write(&path, "persist = true\n").unwrap();
        assert!(!service.get_config().unwrap().persist);

        service.invalidate_cache();
        assert!(service.get_config().unwrap().persist);
    }

    #[test]
    fn test_malformed_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "persist = \"sometimes\"").unwrap();

        let err = ConfigService::with_path(&path).get_config().unwrap_err();
        assert!(err.is_config());
    }

    #[test]
    fn test_save_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        let service = ConfigService::with_path(&path);

        let config = ThinkingConfig {
            log_level: "debug".to_string(),
            ..Default::default()
        };
        service.save_config(&config).unwrap();

        assert_eq!(ConfigService::with_path(&path).get_config().unwrap(), config);
    }
}
