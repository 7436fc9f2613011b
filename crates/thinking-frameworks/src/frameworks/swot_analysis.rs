//! SWOT analysis for strategic planning.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "swot-analysis";

const STEPS: &[&str] = &[
    "define_objective",
    "strengths",
    "weaknesses",
    "opportunities",
    "threats",
    "synthesize_strategy",
];

const DESCRIPTION: &str = "SWOT analysis tool for structured strategic planning.

Steps: Define objective → Identify strengths → Identify weaknesses → Identify opportunities → Identify threats → Synthesize strategy";

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SwotData {
    #[serde(default)]
    pub strengths: Vec<String>,
    #[serde(default)]
    pub weaknesses: Vec<String>,
    #[serde(default)]
    pub opportunities: Vec<String>,
    #[serde(default)]
    pub threats: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SwotAnalysis;

impl FrameworkProcessor for SwotAnalysis {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let mut data: SwotData = ctx.load()?;

        match args.step_label() {
            Some("strengths") => data.strengths.push(content(args)),
            Some("weaknesses") => data.weaknesses.push(content(args)),
            Some("opportunities") => data.opportunities.push(content(args)),
            Some("threats") => data.threats.push(content(args)),
            Some("synthesize_strategy") => data.strategy = Some(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "objective", &data)
    }
}

impl Framework for SwotAnalysis {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/swotAnalysis"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn steps(&self) -> &[&'static str] {
        STEPS
    }
}
