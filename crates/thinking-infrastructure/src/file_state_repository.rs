//! File-backed `StateRepository`.

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thinking_core::session::{StateRepository, ThinkingSnapshot};
use thinking_core::{Result, ThinkingError};

use crate::dto::StateEnvelope;
use crate::paths::ThinkingPaths;
use crate::storage::AtomicFile;

/// Persists the session snapshot as a versioned JSON document.
///
/// File operations run on the blocking pool so callers on a tokio runtime
/// are not stalled by disk I/O.
#[derive(Debug, Clone)]
pub struct FileStateRepository {
    file: Arc<AtomicFile<StateEnvelope>>,
}

impl FileStateRepository {
    /// Creates a repository at the default state file location.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error when the data directory cannot be resolved.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(ThinkingPaths::state_file()?))
    }

    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Arc::new(AtomicFile::json(path)),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    async fn blocking<R, F>(&self, f: F) -> Result<R>
    where
        R: Send + 'static,
        F: FnOnce(&AtomicFile<StateEnvelope>) -> Result<R> + Send + 'static,
    {
        let file = self.file.clone();
        tokio::task::spawn_blocking(move || f(file.as_ref()))
            .await
            .map_err(|e| ThinkingError::internal(format!("Failed to join task: {}", e)))?
    }
}

#[async_trait]
impl StateRepository for FileStateRepository {
    async fn load(&self) -> Result<Option<ThinkingSnapshot>> {
        let envelope = self.blocking(|file| file.load()).await?;
        match envelope {
            Some(envelope) => {
                let snapshot = envelope.into_snapshot()?;
                tracing::info!(
                    "[FileStateRepository] Loaded {} session(s) from {}",
                    snapshot.sessions.len(),
                    self.path().display()
                );
                Ok(Some(snapshot))
            }
            None => {
                tracing::debug!("[FileStateRepository] No state at {}", self.path().display());
                Ok(None)
            }
        }
    }

    async fn save(&self, snapshot: &ThinkingSnapshot) -> Result<()> {
        let envelope = StateEnvelope::new(snapshot.clone());
        let count = snapshot.sessions.len();
        self.blocking(move |file| file.replace(&envelope)).await?;
        tracing::info!(
            "[FileStateRepository] Saved {} session(s) to {}",
            count,
            self.path().display()
        );
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.blocking(|file| file.remove()).await?;
        tracing::info!("[FileStateRepository] Cleared {}", self.path().display());
        Ok(())
    }
}
