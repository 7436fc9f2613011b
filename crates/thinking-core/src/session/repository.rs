//! State repository trait.
//!
//! Defines the interface for persisting a session store snapshot.

use async_trait::async_trait;

use super::store::ThinkingSnapshot;
use crate::error::Result;

/// An abstract repository for persisting the session store.
///
/// This decouples the engine from the storage mechanism (a JSON file, a
/// database row, a host-provided blob).
#[async_trait]
pub trait StateRepository: Send + Sync {
    /// Loads the last saved snapshot.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(snapshot))`: A snapshot was found
    /// - `Ok(None)`: Nothing has been saved yet
    /// - `Err(_)`: Storage could not be read
    async fn load(&self) -> Result<Option<ThinkingSnapshot>>;

    /// Saves `snapshot`, replacing any previous one.
    async fn save(&self, snapshot: &ThinkingSnapshot) -> Result<()>;

    /// Removes the saved snapshot. Succeeds if there was none.
    async fn clear(&self) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{SessionEngine, StepArgs, processor_fn};
    use serde_json::json;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryRepository {
        saved: Mutex<Option<ThinkingSnapshot>>,
    }

    #[async_trait]
    impl StateRepository for MemoryRepository {
        async fn load(&self) -> Result<Option<ThinkingSnapshot>> {
            Ok(self.saved.lock().unwrap().clone())
        }

        async fn save(&self, snapshot: &ThinkingSnapshot) -> Result<()> {
            *self.saved.lock().unwrap() = Some(snapshot.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<()> {
            *self.saved.lock().unwrap() = None;
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_snapshot_survives_repository_round_trip() {
        let repo: Box<dyn StateRepository> = Box::new(MemoryRepository::default());
        assert!(repo.load().await.unwrap().is_none());

        let engine = SessionEngine::default();
        let noop = processor_fn(|_, _| Ok(json!({})));
        engine
            .process_step("feynman-technique", &StepArgs::new().problem("entropy").step("choose_concept"), &noop)
            .unwrap();
        repo.save(&engine.store().snapshot()).await.unwrap();

        let restored = SessionEngine::default();
        restored.store().restore(repo.load().await.unwrap().unwrap());
        let outcome = restored
            .process_step("feynman-technique", &StepArgs::new().step("explain_simply"), &noop)
            .unwrap();
        assert_eq!(outcome.session.step_number, 2);
        assert_eq!(outcome.session.problem, "entropy");

        repo.clear().await.unwrap();
        assert!(repo.load().await.unwrap().is_none());
    }
}
