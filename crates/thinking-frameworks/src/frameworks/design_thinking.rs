//! Human-centered design thinking.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "design-thinking";

const STEPS: &[&str] = &["empathize", "define", "ideate", "prototype", "test", "iterate"];

const DESCRIPTION: &str = "Design thinking tool for human-centered problem solving.

Steps: Empathize → Define problem → Ideate → Prototype → Test → Iterate";

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesignThinkingData {
    #[serde(default)]
    pub user_needs: Vec<String>,
    #[serde(default)]
    pub ideas: Vec<String>,
    #[serde(default)]
    pub prototypes: Vec<String>,
    #[serde(default)]
    pub test_results: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DesignThinking;

impl FrameworkProcessor for DesignThinking {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let mut data: DesignThinkingData = ctx.load()?;

        match args.step_label() {
            Some("empathize") => data.user_needs.push(content(args)),
            Some("ideate") => data.ideas.push(content(args)),
            Some("prototype") => data.prototypes.push(content(args)),
            Some("test") => data.test_results.push(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "problem", &data)
    }
}

impl Framework for DesignThinking {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/designThinking"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn steps(&self) -> &[&'static str] {
        STEPS
    }
}
