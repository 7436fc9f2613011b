use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::model::ReasoningSession;

/// Sessions keyed by framework identifier, in insertion order.
pub type SessionMap = IndexMap<String, ReasoningSession>;

/// Reset category that clears every session unless configured otherwise.
pub const DEFAULT_RESET_CATEGORY: &str = "chat";

/// Persisted shape of a [`SessionStore`]: `{ "sessions": { id: session } }`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ThinkingSnapshot {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub sessions: SessionMap,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<SessionMap, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<SessionMap>::deserialize(deserializer)?.unwrap_or_default())
}

/// Keyed collection of live reasoning sessions.
///
/// The store owns every session. Readers get clones, so nothing outside the
/// store holds a reference across a mutation; all structural changes go
/// through [`SessionStore::mutate`], [`SessionStore::delete`] or
/// [`SessionStore::clear_all`], each of which holds the write lock for its
/// whole duration.
#[derive(Debug)]
pub struct SessionStore {
    sessions: RwLock<SessionMap>,
    reset_categories: Vec<String>,
}

impl SessionStore {
    /// Creates an empty store that resets on the `"chat"` category.
    pub fn new() -> Self {
        Self::with_reset_categories([DEFAULT_RESET_CATEGORY])
    }

    /// Creates an empty store that clears itself when any of `categories`
    /// is requested through [`SessionStore::reset_on_categories`].
    pub fn with_reset_categories<I, S>(categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            sessions: RwLock::new(SessionMap::new()),
            reset_categories: categories.into_iter().map(Into::into).collect(),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, SessionMap> {
        self.sessions.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, SessionMap> {
        self.sessions.write().unwrap_or_else(PoisonError::into_inner)
    }

    /// Returns a copy of the session stored under `framework_id`.
    pub fn get(&self, framework_id: &str) -> Option<ReasoningSession> {
        self.read().get(framework_id).cloned()
    }

    pub fn contains(&self, framework_id: &str) -> bool {
        self.read().contains_key(framework_id)
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Framework identifiers in insertion order.
    pub fn framework_ids(&self) -> Vec<String> {
        self.read().keys().cloned().collect()
    }

    /// Runs `f` with exclusive access to the session map.
    ///
    /// Other mutations and reads wait until `f` returns, so no caller can
    /// observe a partially applied change. Returns whatever `f` returns.
    pub fn mutate<R>(&self, f: impl FnOnce(&mut SessionMap) -> R) -> R {
        let mut sessions = self.write();
        f(&mut sessions)
    }

    /// Removes one session. No-op if absent.
    pub fn delete(&self, framework_id: &str) {
        if self.write().shift_remove(framework_id).is_some() {
            tracing::debug!("[SessionStore] Deleted session: {}", framework_id);
        }
    }

    /// Removes every session.
    pub fn clear_all(&self) {
        let mut sessions = self.write();
        let count = sessions.len();
        sessions.clear();
        tracing::debug!("[SessionStore] Cleared {} session(s)", count);
    }

    /// Returns a plain copy of all sessions keyed by framework identifier.
    pub fn serialize(&self) -> SessionMap {
        self.read().clone()
    }

    /// Replaces the store's contents with `sessions`.
    ///
    /// `None` yields an empty store. A record whose `tool` differs from its
    /// key is re-keyed to the map key so the identity invariant holds.
    pub fn deserialize(&self, sessions: Option<SessionMap>) {
        let restored: SessionMap = sessions
            .unwrap_or_default()
            .into_iter()
            .map(|(key, mut session)| {
                if session.tool != key {
                    tracing::warn!(
                        "[SessionStore] Session stored under '{}' claims tool '{}', using key",
                        key,
                        session.tool
                    );
                    session.tool = key.clone();
                }
                (key, session)
            })
            .collect();

        tracing::debug!("[SessionStore] Restored {} session(s)", restored.len());
        *self.write() = restored;
    }

    /// Returns the persisted shape of the store.
    pub fn snapshot(&self) -> ThinkingSnapshot {
        ThinkingSnapshot {
            sessions: self.serialize(),
        }
    }

    /// Replaces the store's contents with a persisted snapshot.
    pub fn restore(&self, snapshot: ThinkingSnapshot) {
        self.deserialize(Some(snapshot.sessions));
    }

    /// Clears every session if any requested category is a reset category.
    ///
    /// Returns `true` when the store was cleared.
    pub fn reset_on_categories<S: AsRef<str>>(&self, categories: &[S]) -> bool {
        let matched = categories
            .iter()
            .any(|c| self.reset_categories.iter().any(|r| r == c.as_ref()));
        if matched {
            tracing::info!("[SessionStore] Reset requested, clearing all sessions");
            self.clear_all();
        }
        matched
    }

    /// Human-readable summary: a count line, then one line per session.
    pub fn describe(&self) -> Vec<String> {
        let sessions = self.read();
        let mut lines = Vec::with_capacity(sessions.len() + 1);
        lines.push(format!("Active Sessions: {}", sessions.len()));
        lines.extend(sessions.iter().map(|(id, s)| {
            format!("  {}: {} steps, {}", id, s.step_number, s.status_label())
        }));
        lines
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}
