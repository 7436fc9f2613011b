//! Per-call step arguments.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::error::{Result, ThinkingError};

/// Arguments of one `process_step` call.
///
/// The fields the engine reads are typed; everything else a framework
/// accepts stays in `extra` and is read by the framework through
/// [`StepArgs::extras`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepArgs {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub problem: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub next_thought_needed: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub complete: Option<bool>,
    /// Framework-specific fields, keyed as sent by the caller.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl StepArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds arguments from a raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` if the payload is not an object or one of the
    /// typed fields has the wrong JSON type.
    pub fn from_value(tool: &str, value: Value) -> Result<Self> {
        if !value.is_object() {
            return Err(ThinkingError::malformed(tool, "arguments must be a JSON object"));
        }
        serde_json::from_value(value).map_err(|e| ThinkingError::malformed(tool, e.to_string()))
    }

    pub fn problem(mut self, problem: impl Into<String>) -> Self {
        self.problem = Some(problem.into());
        self
    }

    pub fn step(mut self, step: impl Into<String>) -> Self {
        self.step = Some(step.into());
        self
    }

    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn next_thought_needed(mut self, needed: bool) -> Self {
        self.next_thought_needed = Some(needed);
        self
    }

    pub fn complete(mut self, complete: bool) -> Self {
        self.complete = Some(complete);
        self
    }

    /// Sets a framework-specific field.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// The problem statement, treating an empty string as absent.
    pub fn problem_text(&self) -> Option<&str> {
        self.problem.as_deref().filter(|p| !p.is_empty())
    }

    /// The step label, treating an empty string as absent.
    pub fn step_label(&self) -> Option<&str> {
        self.step.as_deref().filter(|s| !s.is_empty())
    }

    /// The content, or an empty string when none was sent.
    pub fn content_text(&self) -> &str {
        self.content.as_deref().unwrap_or_default()
    }

    /// Whether this call asks for the session to be marked complete.
    pub fn requests_completion(&self) -> bool {
        self.next_thought_needed == Some(false) || self.complete == Some(true)
    }

    /// Deserializes the framework-specific fields into `T`.
    ///
    /// # Errors
    ///
    /// Returns `MalformedInput` (attributed to `tool`) when the extra fields
    /// do not match `T`.
    pub fn extras<T: DeserializeOwned>(&self, tool: &str) -> Result<T> {
        serde_json::from_value(Value::Object(self.extra.clone()))
            .map_err(|e| ThinkingError::malformed(tool, e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_value_splits_known_and_extra_fields() {
        let args = StepArgs::from_value(
            "decision-matrix",
            json!({
                "problem": "pick a language",
                "step": "define_criteria",
                "content": "performance",
                "nextThoughtNeeded": true,
                "weight": 3
            }),
        )
        .unwrap();

        assert_eq!(args.problem_text(), Some("pick a language"));
        assert_eq!(args.step_label(), Some("define_criteria"));
        assert_eq!(args.next_thought_needed, Some(true));
        assert_eq!(args.extra.get("weight"), Some(&json!(3)));
        assert!(!args.extra.contains_key("content"));
    }

    #[test]
    fn test_from_value_rejects_non_object() {
        let err = StepArgs::from_value("swot-analysis", json!(["x"])).unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_from_value_rejects_wrong_type() {
        let err = StepArgs::from_value("swot-analysis", json!({"nextThoughtNeeded": "no"}))
            .unwrap_err();
        assert!(err.is_malformed_input());
    }

    #[test]
    fn test_empty_problem_counts_as_absent() {
        let args = StepArgs::new().problem("");
        assert_eq!(args.problem_text(), None);
    }

    #[test]
    fn test_requests_completion() {
        assert!(StepArgs::new().next_thought_needed(false).requests_completion());
        assert!(StepArgs::new().next_thought_needed(true).complete(true).requests_completion());
        assert!(!StepArgs::new().next_thought_needed(true).requests_completion());
        assert!(!StepArgs::new().requests_completion());
    }

    #[test]
    fn test_extras_typed() {
        #[derive(Deserialize)]
        struct Fields {
            weight: Option<f64>,
        }

        let args = StepArgs::new().with("weight", 2.5);
        let fields: Fields = args.extras("decision-matrix").unwrap();
        assert_eq!(fields.weight, Some(2.5));
    }
}
