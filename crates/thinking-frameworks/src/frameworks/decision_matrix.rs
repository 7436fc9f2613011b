//! Weighted multi-criteria decision making.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "decision-matrix";

const STEPS: &[&str] = &[
    "define_decision",
    "list_options",
    "define_criteria",
    "weight_criteria",
    "score_options",
    "calculate_decide",
];

const DESCRIPTION: &str = "Decision matrix tool for structured multi-criteria decision making.

Steps: Define decision → List options → Define criteria → Weight criteria → Score each option → Calculate totals → Decide";

#[derive(Debug, Default, Deserialize)]
struct Fields {
    weight: Option<Number>,
    option: Option<String>,
    criterion: Option<String>,
    score: Option<Number>,
}

/// A missing or zero weight counts as 1.
fn effective_weight(weight: Option<Number>) -> Number {
    weight
        .filter(|w| w.as_f64().is_some_and(|w| w != 0.0))
        .unwrap_or_else(|| Number::from(1))
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub weight: Number,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct DecisionMatrixData {
    #[serde(default)]
    pub options: Vec<String>,
    #[serde(default)]
    pub criteria: Vec<Criterion>,
    /// Scores keyed by `"{option}:{criterion}"`, stored as sent.
    #[serde(default)]
    pub scores: IndexMap<String, Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recommendation: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct DecisionMatrix;

impl FrameworkProcessor for DecisionMatrix {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let fields: Fields = args.extras(NAME)?;
        let mut data: DecisionMatrixData = ctx.load()?;

        match args.step_label() {
            Some("list_options") => data.options.push(content(args)),
            Some("define_criteria") => data.criteria.push(Criterion {
                name: content(args),
                weight: effective_weight(fields.weight),
            }),
            Some("score_options") => {
                if let (Some(option), Some(criterion), Some(score)) =
                    (&fields.option, &fields.criterion, fields.score)
                {
                    data.scores.insert(format!("{}:{}", option, criterion), score);
                }
            }
            Some("calculate_decide") => data.recommendation = Some(content(args)),
            _ => {}
        }

        ctx.save(&data)?;
        summarize(ctx, args, "decision", &data)
    }
}

impl Framework for DecisionMatrix {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/decisionMatrix"
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
