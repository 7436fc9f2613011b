//! Pre-mortem risk analysis: imagine the plan failed and work backwards.
//!
//! A failure reason keeps the likelihood it was listed with, and a
//! mitigation keeps the scenario named by `targets_scenario`. Either is
//! left out of the record when the call did not give it.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "pre-mortem";

const STEPS: &[&str] = &[
    "define_goal",
    "assume_failure",
    "list_failure_reasons",
    "assess_likelihood",
    "develop_mitigations",
    "revise_plan",
];

const DESCRIPTION: &str = "Pre-mortem analysis tool for imagining failure to prevent it.

Steps: Define goal → Assume failure → List reasons for failure → Assess likelihood → Develop mitigations → Revise plan";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Likelihood {
    Low,
    Medium,
    High,
}

#[derive(Debug, Default, Deserialize)]
struct Fields {
    likelihood: Option<Likelihood>,
    targets_scenario: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FailureScenario {
    pub reason: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub likelihood: Option<Likelihood>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mitigation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub scenario: Option<String>,
    pub mitigation: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PreMortemData {
    #[serde(default)]
    pub failure_scenarios: Vec<FailureScenario>,
    #[serde(default)]
    pub mitigations: Vec<Mitigation>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub revised_plan: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct PreMortem;

impl FrameworkProcessor for PreMortem {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let fields: Fields = args.extras(NAME)?;
        let mut data: PreMortemData = ctx.load()?;

        match args.step_label() {
            Some("list_failure_reasons") => data.failure_scenarios.push(FailureScenario {
                reason: content(args),
                likelihood: fields.likelihood,
            }),
            Some("develop_mitigations") => data.mitigations.push(Mitigation {
                scenario: fields.targets_scenario,
                mitigation: content(args),
            }),
            Some("revise_plan") => data.revised_plan = Some(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "goal", &data)
    }
}

impl Framework for PreMortem {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/preMortem"
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
