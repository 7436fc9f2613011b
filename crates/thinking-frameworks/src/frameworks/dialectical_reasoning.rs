//! Dialectical reasoning: thesis, antithesis, synthesis.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "dialectical-reasoning";

const STEPS: &[&str] = &[
    "state_thesis",
    "develop_antithesis",
    "identify_contradictions",
    "find_common_ground",
    "synthesize",
];

const DESCRIPTION: &str = "Dialectical reasoning tool for considering opposing views.

Steps: State thesis → Develop antithesis → Identify contradictions → Find common ground → Synthesize higher understanding";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DialecticalData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thesis: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub antithesis: Option<String>,
    #[serde(default)]
    pub contradictions: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub common_ground: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DialecticalReasoning;

impl FrameworkProcessor for DialecticalReasoning {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let mut data: DialecticalData = ctx.load()?;

        match args.step_label() {
            Some("state_thesis") => data.thesis = Some(content(args)),
            Some("develop_antithesis") => data.antithesis = Some(content(args)),
            Some("identify_contradictions") => data.contradictions.push(content(args)),
            Some("find_common_ground") => data.common_ground = Some(content(args)),
            Some("synthesize") => data.synthesis = Some(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "problem", &data)
    }
}

impl Framework for DialecticalReasoning {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/dialecticalReasoning"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn steps(&self) -> &[&'static str] {
        STEPS
    }
}
