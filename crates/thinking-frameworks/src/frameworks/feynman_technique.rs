//! Feynman technique: explain simply, find the gaps, explain again.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "feynman-technique";

const STEPS: &[&str] = &[
    "choose_concept",
    "explain_simply",
    "identify_gaps",
    "review_source",
    "simplify_further",
    "use_analogies",
];

const DESCRIPTION: &str = "Feynman technique for learning through explanation.

Steps: Choose concept → Explain simply → Identify gaps → Review source → Simplify further → Use analogies";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub iteration: usize,
    pub text: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct FeynmanData {
    #[serde(default)]
    pub explanations: Vec<Explanation>,
    #[serde(default)]
    pub gaps: Vec<String>,
    #[serde(default)]
    pub analogies: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct FeynmanTechnique;

impl FrameworkProcessor for FeynmanTechnique {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let mut data: FeynmanData = ctx.load()?;

        match args.step_label() {
            Some("explain_simply" | "simplify_further") => {
                let iteration = data.explanations.len() + 1;
                data.explanations.push(Explanation {
                    iteration,
                    text: content(args),
                });
            }
            Some("identify_gaps") => data.gaps.push(content(args)),
            Some("use_analogies") => data.analogies.push(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "concept", &data)
    }
}

impl Framework for FeynmanTechnique {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/feynmanTechnique"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn steps(&self) -> &[&'static str] {
        STEPS
    }
}
