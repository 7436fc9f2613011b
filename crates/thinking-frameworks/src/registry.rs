//! Name-keyed registry of reasoning frameworks.

use indexmap::IndexMap;
use std::sync::Arc;
use strum::{EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

use crate::framework::{Framework, ToolDefinition};
use crate::frameworks::*;

/// The built-in frameworks, in registration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, EnumString, IntoStaticStr)]
pub enum BuiltinFramework {
    #[strum(serialize = "scientific-method-reasoning")]
    ScientificMethod,
    #[strum(serialize = "socratic-dialogue")]
    SocraticDialogue,
    #[strum(serialize = "design-thinking")]
    DesignThinking,
    #[strum(serialize = "root-cause-analysis")]
    RootCauseAnalysis,
    #[strum(serialize = "swot-analysis")]
    SwotAnalysis,
    #[strum(serialize = "pre-mortem")]
    PreMortem,
    #[strum(serialize = "dialectical-reasoning")]
    DialecticalReasoning,
    #[strum(serialize = "first-principles")]
    FirstPrinciples,
    #[strum(serialize = "decision-matrix")]
    DecisionMatrix,
    #[strum(serialize = "lateral-thinking")]
    LateralThinking,
    #[strum(serialize = "agile-sprint")]
    AgileSprint,
    #[strum(serialize = "feynman-technique")]
    FeynmanTechnique,
    #[strum(serialize = "six-thinking-hats")]
    SixThinkingHats,
}

impl BuiltinFramework {
    /// Tool identifier of this framework.
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Instantiates the framework.
    pub fn build(self) -> Arc<dyn Framework> {
        match self {
            Self::ScientificMethod => Arc::new(ScientificMethod),
            Self::SocraticDialogue => Arc::new(SocraticDialogue),
            Self::DesignThinking => Arc::new(DesignThinking),
            Self::RootCauseAnalysis => Arc::new(RootCauseAnalysis),
            Self::SwotAnalysis => Arc::new(SwotAnalysis),
            Self::PreMortem => Arc::new(PreMortem),
            Self::DialecticalReasoning => Arc::new(DialecticalReasoning),
            Self::FirstPrinciples => Arc::new(FirstPrinciples),
            Self::DecisionMatrix => Arc::new(DecisionMatrix),
            Self::LateralThinking => Arc::new(LateralThinking),
            Self::AgileSprint => Arc::new(AgileSprint),
            Self::FeynmanTechnique => Arc::new(FeynmanTechnique),
            Self::SixThinkingHats => Arc::new(SixThinkingHats),
        }
    }
}

/// Frameworks keyed by tool name, in registration order.
#[derive(Clone, Default)]
pub struct FrameworkRegistry {
    frameworks: IndexMap<String, Arc<dyn Framework>>,
}

impl FrameworkRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding all thirteen built-in frameworks.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for builtin in BuiltinFramework::iter() {
            registry.register(builtin.build());
        }
        registry
    }

    /// Adds a framework under its own name, replacing any framework that
    /// was registered under the same name.
    pub fn register(&mut self, framework: Arc<dyn Framework>) {
        let name = framework.name().to_string();
        if self.frameworks.insert(name.clone(), framework).is_some() {
            tracing::debug!("[FrameworkRegistry] Replaced framework: {}", name);
        }
    }

    pub fn get(&self, name: &str) -> Option<Arc<dyn Framework>> {
        self.frameworks.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.frameworks.contains_key(name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.frameworks.keys().map(String::as_str).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn Framework>> {
        self.frameworks.values()
    }

    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }

    /// Tool listings for every registered framework.
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        self.iter().map(|f| f.definition()).collect()
    }
}

impl std::fmt::Debug for FrameworkRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FrameworkRegistry")
            .field("frameworks", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use std::str::FromStr;
    use thinking_core::session::{StepArgs, StepContext};

    #[test]
    fn test_builtin_registers_all_in_order() {
        let registry = FrameworkRegistry::builtin();
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.names()[0], "scientific-method-reasoning");
        assert_eq!(registry.names()[12], "six-thinking-hats");
    }

    #[test]
    fn test_builtin_names_match_framework_names() {
        for builtin in BuiltinFramework::iter() {
            assert_eq!(builtin.build().name(), builtin.as_str());
            assert_eq!(BuiltinFramework::from_str(builtin.as_str()).unwrap(), builtin);
        }
    }

    #[test]
    fn test_definitions_are_well_formed() {
        for definition in FrameworkRegistry::builtin().definitions() {
            assert!(definition.description.len() >= 50, "{}", definition.name);
            assert!(definition.display_name.starts_with("Thinking/"));
            assert!(!definition.steps.is_empty());
        }
    }

    #[test]
    fn test_descriptions_keep_tool_wording() {
        let registry = FrameworkRegistry::builtin();
        let summary = |name: &str| {
            let framework = registry.get(name).unwrap();
            framework.description().lines().next().unwrap_or_default().to_string()
        };

        assert_eq!(
            summary("pre-mortem"),
            "Pre-mortem analysis tool for imagining failure to prevent it."
        );
        assert_eq!(
            summary("agile-sprint"),
            "Agile sprint planning tool for iterative development."
        );
        assert_eq!(
            summary("feynman-technique"),
            "Feynman technique for learning through explanation."
        );
    }

    struct Echo;

    impl thinking_core::session::FrameworkProcessor for Echo {
        fn process(&self, ctx: &mut StepContext<'_>, _args: &StepArgs) -> thinking_core::Result<Value> {
            Ok(json!({ "step": ctx.step_number() }))
        }
    }

    impl Framework for Echo {
        fn name(&self) -> &str {
            "swot-analysis"
        }
        fn display_name(&self) -> &str {
            "Echo"
        }
        fn description(&self) -> &str {
            "echo"
        }
        fn steps(&self) -> &[&'static str] {
            &["echo"]
        }
    }

    #[test]
    fn test_register_replaces_same_name_in_place() {
        let mut registry = FrameworkRegistry::builtin();
        registry.register(Arc::new(Echo));
        assert_eq!(registry.len(), 13);
        assert_eq!(registry.names()[4], "swot-analysis");
        assert_eq!(registry.get("swot-analysis").unwrap().display_name(), "Echo");
        assert!(registry.get("unknown").is_none());
    }
}
