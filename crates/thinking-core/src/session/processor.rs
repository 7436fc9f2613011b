//! Framework processor contract.

use serde_json::Value;

use super::args::StepArgs;
use super::context::StepContext;
use crate::error::Result;

/// A framework-specific step processor.
///
/// Implementations interpret `args.step` to pick an accumulation branch,
/// write into the context's data, and return a payload summarizing the
/// framework's accumulated state. Unrecognized steps must be accepted as
/// no-ops. Errors returned here reach the caller unmodified.
pub trait FrameworkProcessor: Send + Sync {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value>;
}

impl<F> FrameworkProcessor for F
where
    F: Fn(&mut StepContext<'_>, &StepArgs) -> Result<Value> + Send + Sync,
{
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        self(ctx, args)
    }
}

/// Pins a closure to the processor signature so its argument types are
/// inferred at the call site.
///
/// ```ignore
/// let echo = processor_fn(|ctx, _args| Ok(json!({ "step": ctx.step_number() })));
/// ```
pub fn processor_fn<F>(f: F) -> F
where
    F: Fn(&mut StepContext<'_>, &StepArgs) -> Result<Value> + Send + Sync,
{
    f
}
