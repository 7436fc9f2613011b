use serde::Serialize;
use serde_json::{Map, Value, json};
use thinking_core::session::{StepArgs, StepContext};
use thinking_core::{Result, ThinkingError};

/// Builds a response payload: bookkeeping fields around `fields`.
///
/// `complete` reflects the completion the engine is about to commit.
pub(crate) fn respond(ctx: &StepContext<'_>, args: &StepArgs, fields: Map<String, Value>) -> Value {
    let mut out = Map::new();
    out.insert("stepNumber".into(), json!(ctx.step_number()));
    out.insert("currentStep".into(), json!(args.step));
    out.extend(fields);
    out.insert("completedSteps".into(), json!(ctx.completed_steps()));
    out.insert(
        "complete".into(),
        json!(ctx.complete() || args.requests_completion()),
    );
    Value::Object(out)
}

/// Payload for frameworks that report their whole accumulated data plus
/// the problem under `subject_key`.
pub(crate) fn summarize<T: Serialize>(
    ctx: &StepContext<'_>,
    args: &StepArgs,
    subject_key: &str,
    data: &T,
) -> Result<Value> {
    let mut fields = match serde_json::to_value(data)? {
        Value::Object(fields) => fields,
        other => {
            return Err(ThinkingError::processor(format!(
                "framework data must be an object, got {}",
                other
            )));
        }
    };
    fields.insert(subject_key.to_string(), json!(ctx.problem()));
    Ok(respond(ctx, args, fields))
}

/// The call's content as an owned string.
pub(crate) fn content(args: &StepArgs) -> String {
    args.content_text().to_string()
}
