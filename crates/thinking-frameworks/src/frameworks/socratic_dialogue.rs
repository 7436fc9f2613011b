//! Socratic dialogue: questioning assumptions until understanding holds.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "socratic-dialogue";

const STEPS: &[&str] = &[
    "question_formulation",
    "assumption_identification",
    "challenge_assumption",
    "explore_contradiction",
    "refine_understanding",
    "synthesis",
];

const DESCRIPTION: &str = "Socratic dialogue tool for questioning assumptions through structured inquiry.

Steps: Question formulation → Assumption identification → Challenge assumption → Explore contradiction → Refine understanding → Synthesis";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub step: u32,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assumption {
    pub id: String,
    pub text: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SocraticData {
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(default)]
    pub assumptions: Vec<Assumption>,
    #[serde(default)]
    pub contradictions: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SocraticDialogue;

impl FrameworkProcessor for SocraticDialogue {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let mut data: SocraticData = ctx.load()?;

        match args.step_label() {
            Some("question_formulation" | "challenge_assumption") => {
                data.questions.push(Question {
                    step: ctx.step_number(),
                    content: content(args),
                });
            }
            Some("assumption_identification") => {
                let id = format!("a{}", data.assumptions.len() + 1);
                data.assumptions.push(Assumption {
                    id,
                    text: content(args),
                });
            }
            Some("explore_contradiction") => data.contradictions.push(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "problem", &data)
    }
}

impl Framework for SocraticDialogue {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/socraticDialogue"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn steps(&self) -> &[&'static str] {
        STEPS
    }
}
