//! Tool-call argument validation.
//!
//! Every call is checked against the framework's call surface before the
//! engine sees it:
//!
//! ```text
//! { problem?: string, step: <framework step>, content: string,
//!   nextThoughtNeeded: boolean, complete?: boolean, ...framework fields }
//! ```
//!
//! Rejected calls never touch the session store.

use serde_json::{Map, Value};
use thinking_core::session::StepArgs;
use thinking_core::{Result, ThinkingError};
use thinking_frameworks::Framework;

/// Validates `raw` for `framework` and converts it into [`StepArgs`].
///
/// # Errors
///
/// Returns `MalformedInput` (attributed to the framework's name) when:
/// - `raw` is not a JSON object
/// - `content` is missing or not a string
/// - `step` is missing, not a string, or not in the framework's vocabulary
/// - `nextThoughtNeeded` is missing or not a boolean
/// - `problem` is present but not a string
/// - a framework-specific field has the wrong shape
pub fn validate_step_args(framework: &dyn Framework, raw: Value) -> Result<StepArgs> {
    let tool = framework.name();

    let reject = |message: String| {
        tracing::warn!("[Validation] Rejected {} call: {}", tool, message);
        ThinkingError::malformed(tool, message)
    };

    let Some(fields) = raw.as_object() else {
        return Err(reject("arguments must be a JSON object".to_string()));
    };

    require_string(fields, "content").map_err(&reject)?;

    let step = require_string(fields, "step").map_err(&reject)?;
    if !framework.steps().iter().any(|s| *s == step) {
        return Err(reject(format!(
            "step '{}' is not one of: {}",
            step,
            framework.steps().join(", ")
        )));
    }

    match fields.get("nextThoughtNeeded") {
        Some(Value::Bool(_)) => {}
        Some(_) => return Err(reject("nextThoughtNeeded must be a boolean".to_string())),
        None => return Err(reject("nextThoughtNeeded is required".to_string())),
    }

    if let Some(problem) = fields.get("problem") {
        if !problem.is_string() {
            return Err(reject("problem must be a string".to_string()));
        }
    }

    let args = StepArgs::from_value(tool, raw)?;
    framework.validate_extras(&args)?;
    Ok(args)
}

fn require_string<'a>(fields: &'a Map<String, Value>, key: &str) -> std::result::Result<&'a str, String> {
    match fields.get(key) {
        Some(Value::String(s)) => Ok(s),
        Some(_) => Err(format!("{} must be a string", key)),
        None => Err(format!("{} is required", key)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use thinking_frameworks::FrameworkRegistry;

    fn check(tool: &str, raw: Value) -> Result<StepArgs> {
        let registry = FrameworkRegistry::builtin();
        let framework = registry.get(tool).unwrap();
        validate_step_args(framework.as_ref(), raw)
    }

    fn message(err: ThinkingError) -> String {
        match err {
            ThinkingError::MalformedInput { message, .. } => message,
            other => panic!("expected MalformedInput, got {:?}", other),
        }
    }

    #[test]
    fn test_valid_call() {
        let args = check(
            "decision-matrix",
            json!({
                "problem": "pick a language",
                "step": "define_criteria",
                "content": "speed",
                "nextThoughtNeeded": true,
                "weight": 2.5
            }),
        )
        .unwrap();
        assert_eq!(args.step_label(), Some("define_criteria"));
        assert_eq!(args.extra["weight"], json!(2.5));
    }

    #[test]
    fn test_missing_content() {
        let err = check(
            "swot-analysis",
            json!({"step": "strengths", "nextThoughtNeeded": true}),
        )
        .unwrap_err();
        assert_eq!(message(err), "content is required");
    }

    #[test]
    fn test_step_outside_vocabulary() {
        let err = check(
            "swot-analysis",
            json!({"step": "ideate", "content": "x", "nextThoughtNeeded": true}),
        )
        .unwrap_err();
        assert!(message(err).starts_with("step 'ideate' is not one of: define_objective"));
    }

    #[test]
    fn test_missing_or_mistyped_next_thought_needed() {
        let err = check("swot-analysis", json!({"step": "strengths", "content": "x"})).unwrap_err();
        assert_eq!(message(err), "nextThoughtNeeded is required");

        let err = check(
            "swot-analysis",
            json!({"step": "strengths", "content": "x", "nextThoughtNeeded": "yes"}),
        )
        .unwrap_err();
        assert_eq!(message(err), "nextThoughtNeeded must be a boolean");
    }

    #[test]
    fn test_non_object_and_bad_problem() {
        assert!(check("swot-analysis", json!("strengths")).unwrap_err().is_malformed_input());

        let err = check(
            "swot-analysis",
            json!({"problem": 7, "step": "strengths", "content": "x", "nextThoughtNeeded": true}),
        )
        .unwrap_err();
        assert_eq!(message(err), "problem must be a string");
    }

    #[test]
    fn test_framework_field_enum_checked() {
        let err = check(
            "pre-mortem",
            json!({
                "step": "list_failure_reasons",
                "content": "x",
                "nextThoughtNeeded": true,
                "likelihood": "certain"
            }),
        )
        .unwrap_err();
        assert!(err.is_malformed_input());
    }
}
