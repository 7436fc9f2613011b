//! Six thinking hats: parallel thinking from six perspectives.

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs, StepContext};

use super::common::{content, summarize};
use crate::framework::Framework;

pub const NAME: &str = "six-thinking-hats";

const STEPS: &[&str] = &["think", "synthesize"];

const DESCRIPTION: &str = "Six thinking hats tool for parallel thinking from different perspectives.

Hats: White (facts) → Red (emotions) → Black (risks) → Yellow (benefits) → Green (creativity) → Blue (process)";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Hat {
    White,
    Red,
    Black,
    Yellow,
    Green,
    Blue,
}

#[derive(Debug, Default, Deserialize)]
struct Fields {
    hat: Option<Hat>,
}

/// Thoughts recorded under each hat. All six are always present.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hats {
    #[serde(default)]
    pub white: Vec<String>,
    #[serde(default)]
    pub red: Vec<String>,
    #[serde(default)]
    pub black: Vec<String>,
    #[serde(default)]
    pub yellow: Vec<String>,
    #[serde(default)]
    pub green: Vec<String>,
    #[serde(default)]
    pub blue: Vec<String>,
}

impl Hats {
    pub fn get_mut(&mut self, hat: Hat) -> &mut Vec<String> {
        match hat {
            Hat::White => &mut self.white,
            Hat::Red => &mut self.red,
            Hat::Black => &mut self.black,
            Hat::Yellow => &mut self.yellow,
            Hat::Green => &mut self.green,
            Hat::Blue => &mut self.blue,
        }
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SixHatsData {
    #[serde(default)]
    pub hats: Hats,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub synthesis: Option<String>,
}

#[derive(Debug, Default, Clone, Copy)]
pub struct SixThinkingHats;

impl FrameworkProcessor for SixThinkingHats {
    fn process(&self, ctx: &mut StepContext<'_>, args: &StepArgs) -> Result<Value> {
        let fields: Fields = args.extras(NAME)?;
        let mut data: SixHatsData = ctx.load()?;

        if let Some(hat) = fields.hat {
            data.hats.get_mut(hat).push(content(args));
        }
        if args.step_label() == Some("synthesize") {
            data.synthesis = Some(content(args));
        }

        ctx.save(&data)?;
        let mut payload = summarize(ctx, args, "problem", &data)?;
        if let Value::Object(fields_out) = &mut payload {
            fields_out.insert("currentHat".into(), json!(fields.hat));
        }
        Ok(payload)
    }
}

impl Framework for SixThinkingHats {
    fn name(&self) -> &str {
        NAME
    }

    fn display_name(&self) -> &str {
        "Thinking/sixThinkingHats"
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
