//! Agile sprint planning and review.

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "agile-sprint";

const STEPS: &[&str] = &[
    "define_goal",
    "break_into_stories",
    "estimate_effort",
    "prioritize",
    "plan_sprint",
    "execute",
    "review",
    "retrospect",
];

const DESCRIPTION: &str = "Agile sprint planning tool for iterative development.

Steps: Define goal → Break into stories → Estimate effort → Prioritize → Plan sprint → Execute → Review → Retrospect";

#[derive(Debug, Default, Deserialize)]
struct Fields {
    estimate: Option<Number>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub story: String,
    /// Kept as sent, so an integer estimate stays an integer.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimate: Option<Number>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AgileSprintData {
    #[serde(default)]
    pub backlog: Vec<Story>,
    #[serde(default)]
    pub current_sprint: Vec<String>,
    #[serde(default)]
    pub completed: Vec<String>,
    #[serde(default)]
    pub retrospectives: Vec<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct AgileSprint;

impl FrameworkProcessor for AgileSprint {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let fields: Fields = args.extras(NAME)?;
        let mut data: AgileSprintData = ctx.load()?;

        match args.step_label() {
            Some("break_into_stories") => data.backlog.push(Story {
                story: content(args),
                estimate: fields.estimate,
            }),
            Some("plan_sprint") => data.current_sprint.push(content(args)),
            Some("execute") => data.completed.push(content(args)),
            Some("retrospect") => data.retrospectives.push(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "goal", &data)
    }
}

impl Framework for AgileSprint {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/agileSprint"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    fn steps(&self) -> &[&'static str] {
        STEPS
    }

    fn validate_extras(&self, args: &StepArgs) -> Result<()> {
        args.extras::<Fields>(NAME).map(|_| ())
    }
}
