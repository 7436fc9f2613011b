//! The view of a session handed to framework processors.

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use crate::error::{Result, ThinkingError};

/// Processor-facing view of a session during one step.
///
/// Bookkeeping fields are read-only; only `data` can be written. The engine
/// has already advanced `step_number` and recorded the step label when the
/// processor sees this view.
#[derive(Debug)]
pub struct StepContext<'a> {
    problem: &'a str,
    step_number: u32,
    completed_steps: &'a [String],
    complete: bool,
    data: &'a mut Map<String, Value>,
}

impl<'a> StepContext<'a> {
    pub(crate) fn new(
        problem: &'a str,
        step_number: u32,
        completed_steps: &'a [String],
        complete: bool,
        data: &'a mut Map<String, Value>,
    ) -> Self {
        Self {
            problem,
            step_number,
            completed_steps,
            complete,
            data,
        }
    }

    pub fn problem(&self) -> &str {
        self.problem
    }

    pub fn step_number(&self) -> u32 {
        self.step_number
    }

    pub fn completed_steps(&self) -> &[String] {
        self.completed_steps
    }

    /// Completion state before this call is finalized.
    pub fn complete(&self) -> bool {
        self.complete
    }

    pub fn data(&self) -> &Map<String, Value> {
        self.data
    }

    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        self.data
    }

    /// Reads the accumulated data as `T`.
    ///
    /// Keys missing from `data` fall back to `T`'s serde defaults, which is
    /// how sub-structures are lazily initialized on first touch.
    pub fn load<T: DeserializeOwned>(&self) -> Result<T> {
        serde_json::from_value(Value::Object(self.data.clone())).map_err(|e| {
            ThinkingError::processor(format!("accumulated data is unreadable: {}", e))
        })
    }

    /// Writes `value`'s fields back into `data`, leaving other keys intact.
    pub fn save<T: Serialize>(&mut self, value: &T) -> Result<()> {
        match serde_json::to_value(value)? {
            Value::Object(fields) => {
                self.data.extend(fields);
                Ok(())
            }
            other => Err(ThinkingError::processor(format!(
                "accumulated data must serialize to an object, got {}",
                other
            ))),
        }
    }
}
