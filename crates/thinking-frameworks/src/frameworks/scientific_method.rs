//! Scientific method reasoning with explicit hypothesis tracking.
//!
//! Every call records a thought. Hypotheses are created and revised through
//! the optional `hypothesis_update` field:
//!
//! - no `hypothesis_id` but `new_hypothesis_text`: a new hypothesis `h{n}`
//!   with status `proposed`
//! - an existing `hypothesis_id`: the current step is linked to it, its
//!   text is replaced when new text is given and `refute`/`support`/`refine`
//!   set its status
//! - an unknown `hypothesis_id`: ignored

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value, json};
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, respond};
use crate::framework::Framework;

pub const NAME: &str = "scientific-method-reasoning";

const STEPS: &[&str] = &[
    "question_observation",
    "background_research",
    "hypothesis_formulation",
    "prediction",
    "testing_experimentation",
    "analysis",
    "conclusion",
];

const DESCRIPTION: &str = "A strictly disciplined reasoning tool that enforces exact adherence to the scientific method.

The tool maintains persistent state anchored to a single, fixed problem/question. Every contribution must explicitly advance one of the core steps of the scientific method. No free-form thoughts, confidence scores, summaries, or extraneous features are permitted—only direct contributions to the defined steps.

Core scientific method steps enforced:
1. Question/Observation: Clearly state the problem and relevant observations.
2. Background Research: Gather and restate existing knowledge, constraints, or facts.
3. Hypothesis: Formulate testable hypotheses (one or more; each must be falsifiable).
4. Prediction: State specific, testable predictions derived from a hypothesis.
5. Testing/Experimentation: Perform tests (deductive reasoning, calculations, counterexamples, or external verification) to gather evidence.
6. Analysis: Interpret evidence objectively—does it support, refute, or require refinement of the hypothesis?
7. Conclusion: Draw evidence-based conclusion; if unresolved, iterate by revising earlier steps.

The process is iterative and self-correcting. Continue until a hypothesis is conclusively supported or refuted, or the question is fully answered.

Rules:
- First call must define the problem and begin with step 1 or 2.
- Every subsequent call must specify exactly one step and contribute only to it.
- Hypotheses are tracked explicitly; testing and analysis must reference them.
- Only set nextThoughtNeeded: false when a final, evidence-based conclusion is reached.
- Ignore all irrelevant information.
- Final answer must directly follow from the completed scientific process.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HypothesisAction {
    Propose,
    Refine,
    Refute,
    Support,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HypothesisStatus {
    Proposed,
    Refined,
    Refuted,
    Supported,
}

#[derive(Debug, Default, Deserialize)]
struct HypothesisUpdate {
    hypothesis_id: Option<String>,
    new_hypothesis_text: Option<String>,
    action: Option<HypothesisAction>,
}

#[derive(Debug, Default, Deserialize)]
struct Fields {
    targets_hypothesis_id: Option<Vec<String>>,
    hypothesis_update: Option<HypothesisUpdate>,
    final_answer: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hypothesis {
    pub id: String,
    pub text: String,
    pub status: HypothesisStatus,
    pub linked_thoughts: Vec<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thought {
    pub thought_number: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub step: Option<String>,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub targets_hypothesis_id: Option<Vec<String>>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScientificMethodData {
    #[serde(default)]
    pub hypotheses: Vec<Hypothesis>,
    #[serde(default)]
    pub thoughts: Vec<Thought>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub final_answer: Option<String>,
}

impl ScientificMethodData {
    fn apply_update(&mut self, update: HypothesisUpdate, step_number: u32) {
        match update.hypothesis_id {
            Some(id) => {
                let Some(hypothesis) = self.hypotheses.iter_mut().find(|h| h.id == id) else {
                    tracing::debug!("[ScientificMethod] Ignoring update for unknown hypothesis {}", id);
                    return;
                };
                hypothesis.linked_thoughts.push(step_number);
                if let Some(text) = update.new_hypothesis_text {
                    hypothesis.text = text;
                }
                match update.action {
                    Some(HypothesisAction::Refute) => hypothesis.status = HypothesisStatus::Refuted,
                    Some(HypothesisAction::Support) => hypothesis.status = HypothesisStatus::Supported,
                    Some(HypothesisAction::Refine) => hypothesis.status = HypothesisStatus::Refined,
                    Some(HypothesisAction::Propose) | None => {}
                }
            }
            None => {
                if let Some(text) = update.new_hypothesis_text {
                    self.hypotheses.push(Hypothesis {
                        id: format!("h{}", self.hypotheses.len() + 1),
                        text,
                        status: HypothesisStatus::Proposed,
                        linked_thoughts: vec![step_number],
                    });
                }
            }
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct ScientificMethod;

impl FrameworkProcessor for ScientificMethod {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let fields: Fields = args.extras(NAME)?;
        let mut data: ScientificMethodData = ctx.load()?;
        let step_number = ctx.step_number();

        data.thoughts.push(Thought {
            thought_number: step_number,
            step: args.step.clone(),
            content: content(args),
            targets_hypothesis_id: fields.targets_hypothesis_id,
        });

        if let Some(update) = fields.hypothesis_update {
            data.apply_update(update, step_number);
        }
        if let Some(answer) = fields.final_answer {
            data.final_answer = Some(answer);
        }

        ctx.save(&data)?;

        let mut out = Map::new();
        out.insert("thoughtNumber".into(), json!(step_number));
        out.insert("nextThoughtNeeded".into(), json!(args.next_thought_needed));
        out.insert("problem".into(), json!(ctx.problem()));
        out.insert("hypotheses".into(), json!(data.hypotheses));
        out.insert(
            "conclusionReached".into(),
            json!(ctx.complete() || args.requests_completion()),
        );
        out.insert("thoughtHistoryLength".into(), json!(data.thoughts.len()));
        if let Some(answer) = &data.final_answer {
            out.insert("finalAnswer".into(), json!(answer));
        }
        Ok(respond(ctx, args, out))
    }
}

impl Framework for ScientificMethod {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/scientificMethod"
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
