use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thinking_core::session::ThinkingSnapshot;
use thinking_core::{Result, ThinkingError};

/// Current on-disk format version of the session state file.
pub const STATE_VERSION: u32 = 1;

/// Versioned wrapper around a persisted [`ThinkingSnapshot`].
///
/// ```json
/// { "version": 1, "savedAt": "2025-01-01T00:00:00Z", "state": { "sessions": {} } }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateEnvelope {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    #[serde(default)]
    pub state: ThinkingSnapshot,
}

impl StateEnvelope {
    /// Wraps `state` at the current version, stamped now.
    pub fn new(state: ThinkingSnapshot) -> Self {
        Self {
            version: STATE_VERSION,
            saved_at: Utc::now(),
            state,
        }
    }

    /// Unwraps the snapshot.
    ///
    /// # Errors
    ///
    /// Returns a `Serialization` error for an unsupported version.
    pub fn into_snapshot(self) -> Result<ThinkingSnapshot> {
        if self.version != STATE_VERSION {
            return Err(ThinkingError::Serialization {
                format: "JSON".to_string(),
                message: format!(
                    "unsupported state version {} (expected {})",
                    self.version, STATE_VERSION
                ),
            });
        }
        Ok(self.state)
    }
}
