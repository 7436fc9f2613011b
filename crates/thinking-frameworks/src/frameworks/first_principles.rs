//! First principles thinking.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "first-principles";

const STEPS: &[&str] = &[
    "state_problem",
    "identify_assumptions",
    "challenge_assumptions",
    "break_to_fundamentals",
    "rebuild_from_basics",
    "novel_solution",
];

const DESCRIPTION: &str = "First principles thinking tool for breaking down to fundamental truths.

Steps: State problem → Identify assumptions → Challenge assumptions → Break to fundamental truths → Rebuild from basics → Novel solution";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FirstPrinciplesData {
    #[serde(default)]
    pub assumptions: Vec<String>,
    #[serde(default)]
    pub fundamental_truths: Vec<String>,
    #[serde(default)]
    pub reconstruction_steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FirstPrinciples;

impl FrameworkProcessor for FirstPrinciples {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let mut data: FirstPrinciplesData = ctx.load()?;

        match args.step_label() {
            Some("identify_assumptions") => data.assumptions.push(content(args)),
            Some("break_to_fundamentals") => data.fundamental_truths.push(content(args)),
            Some("rebuild_from_basics") => data.reconstruction_steps.push(content(args)),
            Some("novel_solution") => data.solution = Some(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "problem", &data)
    }
}

impl Framework for FirstPrinciples {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/firstPrinciples"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn steps(&self) -> &[&'static str] {
        STEPS
    }
}
