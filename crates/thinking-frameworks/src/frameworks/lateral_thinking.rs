//! Lateral thinking for creative reframing.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "lateral-thinking";

const STEPS: &[&str] = &[
    "state_problem",
    "generate_stimulus",
    "force_connection",
    "explore_tangent",
    "extract_insight",
    "apply_to_problem",
];

const DESCRIPTION: &str = "Lateral thinking tool for creative problem reframing.

Steps: State problem → Generate random stimulus → Force connection → Explore tangent → Extract insight → Apply to original problem";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LateralThinkingData {
    #[serde(default)]
    pub stimuli: Vec<String>,
    #[serde(default)]
    pub connections: Vec<String>,
    #[serde(default)]
    pub insights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub application: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct LateralThinking;

impl FrameworkProcessor for LateralThinking {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let mut data: LateralThinkingData = ctx.load()?;

        match args.step_label() {
            Some("generate_stimulus") => data.stimuli.push(content(args)),
            Some("force_connection") => data.connections.push(content(args)),
            Some("extract_insight") => data.insights.push(content(args)),
            Some("apply_to_problem") => data.application = Some(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "problem", &data)
    }
}

impl Framework for LateralThinking {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/lateralThinking"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn steps(&self) -> &[&'static str] {
        STEPS
    }
}
