//! Root cause analysis by repeatedly asking "why".

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "root-cause-analysis";

const STEPS: &[&str] = &["state_problem", "ask_why", "identify_root_cause", "propose_solution"];

const DESCRIPTION: &str = "Root cause analysis (5 Whys) tool for drilling down to fundamental causes.

Steps: State problem → Ask why → Record answer → Ask why again (repeat 5x) → Identify root cause → Propose solution";

/// One answer in the chain of "why" questions. `level` starts at 1.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhyAnswer {
    pub level: usize,
    pub answer: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RootCauseData {
    #[serde(default)]
    pub why_chain: Vec<WhyAnswer>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root_cause: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub solution: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct RootCauseAnalysis;

impl FrameworkProcessor for RootCauseAnalysis {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let mut data: RootCauseData = ctx.load()?;

        match args.step_label() {
            Some("ask_why") => {
                let level = data.why_chain.len() + 1;
                data.why_chain.push(WhyAnswer {
                    level,
                    answer: content(args),
                });
            }
            Some("identify_root_cause") => data.root_cause = Some(content(args)),
            Some("propose_solution") => data.solution = Some(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "problem", &data)
    }
}

impl Framework for RootCauseAnalysis {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/rootCauseAnalysis"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn steps(&self) -> &[&'static str] {
        STEPS
    }
}
