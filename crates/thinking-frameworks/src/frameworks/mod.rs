//! Built-in reasoning frameworks.

mod common;

pub mod agile_sprint;
pub mod decision_matrix;
pub mod design_thinking;
pub mod dialectical_reasoning;
pub mod feynman_technique;
pub mod first_principles;
pub mod lateral_thinking;
pub mod pre_mortem;
pub mod root_cause_analysis;
pub mod scientific_method;
pub mod six_thinking_hats;
pub mod socratic_dialogue;
pub mod swot_analysis;

pub use agile_sprint::AgileSprint;
pub use decision_matrix::DecisionMatrix;
pub use design_thinking::DesignThinking;
pub use dialectical_reasoning::DialecticalReasoning;
pub use feynman_technique::FeynmanTechnique;
pub use first_principles::FirstPrinciples;
pub use lateral_thinking::LateralThinking;
pub use pre_mortem::PreMortem;
pub use root_cause_analysis::RootCauseAnalysis;
pub use scientific_method::ScientificMethod;
pub use six_thinking_hats::SixThinkingHats;
pub use socratic_dialogue::SocraticDialogue;
pub use swot_analysis::SwotAnalysis;
