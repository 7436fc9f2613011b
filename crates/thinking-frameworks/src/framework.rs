//! Framework trait and tool metadata.

use serde::Serialize;
use thinking_core::Result;
use thinking_core::session::{FrameworkProcessor, StepArgs};

/// A named reasoning framework: a step vocabulary plus a processor.
pub trait Framework: FrameworkProcessor {
    /// Tool identifier, also the session store key.
    fn name(&self) -> &str;

    /// Name shown to users, e.g. `Thinking/decisionMatrix`.
    fn display_name(&self) -> &str;

    fn description(&self) -> &str;

    /// Step labels accepted by this framework, in their prescribed order.
    fn steps(&self) -> &[&'static str];

    /// Checks the framework-specific fields of `args`.
    ///
    /// The default accepts anything.
    fn validate_extras(&self, _args: &StepArgs) -> Result<()> {
        Ok(())
    }

    /// Describes this framework for tool listings.
    fn definition(&self) -> ToolDefinition {
        ToolDefinition {
            name: self.name().to_string(),
            display_name: self.display_name().to_string(),
            description: self.description().to_string(),
            steps: self.steps().iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Serializable description of one framework tool.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub display_name: String,
    pub description: String,
    pub steps: Vec<String>,
}
