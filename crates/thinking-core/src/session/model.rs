//! Reasoning session domain model.
//!
//! A session is the persisted state of one in-progress use of one framework,
//! keyed by the framework's tool name.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::context::StepContext;

/// One framework's reasoning session.
///
/// The serialized layout is the persisted one: `tool`, `problem`,
/// `stepNumber`, `data`, `completedSteps`, `complete`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReasoningSession {
    /// Framework identifier; equals the store key.
    pub tool: String,
    /// Fixed subject of the session, set once at creation.
    pub problem: String,
    /// Number of processed steps. The first call yields 1.
    pub step_number: u32,
    /// Framework-owned accumulated data. The engine never looks inside.
    #[serde(default)]
    pub data: Map<String, Value>,
    /// Step labels seen so far, in first-seen order, without duplicates.
    #[serde(default)]
    pub completed_steps: Vec<String>,
    #[serde(default)]
    pub complete: bool,
}

impl ReasoningSession {
    /// Creates an empty session at step 0.
    pub fn new(tool: impl Into<String>, problem: impl Into<String>) -> Self {
        Self {
            tool: tool.into(),
            problem: problem.into(),
            step_number: 0,
            data: Map::new(),
            completed_steps: Vec::new(),
            complete: false,
        }
    }

    /// Returns the framework identifier this session is stored under.
    pub fn framework_id(&self) -> &str {
        &self.tool
    }

    /// Appends a step label unless it was already recorded.
    ///
    /// Returns `true` when the label was appended.
    pub fn record_step(&mut self, label: &str) -> bool {
        if self.completed_steps.iter().any(|s| s == label) {
            return false;
        }
        self.completed_steps.push(label.to_string());
        true
    }

    /// Human-readable completion status.
    pub fn status_label(&self) -> &'static str {
        if self.complete { "complete" } else { "in progress" }
    }

    /// Splits the session into the read-only view and the mutable data map
    /// handed to a framework processor.
    pub(crate) fn context_with<'a>(&'a self, data: &'a mut Map<String, Value>) -> StepContext<'a> {
        StepContext::new(
            &self.problem,
            self.step_number,
            &self.completed_steps,
            self.complete,
            data,
        )
    }
}
