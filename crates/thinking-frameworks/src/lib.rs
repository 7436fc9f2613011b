//! Built-in reasoning frameworks for the thinking session engine.
//!
//! Each framework pairs a step vocabulary with a processor that folds the
//! call's content into its own accumulated data. [`FrameworkRegistry`]
//! looks frameworks up by tool name.

pub mod framework;
pub mod frameworks;
pub mod registry;

pub use framework::{Framework, ToolDefinition};
pub use registry::{BuiltinFramework, FrameworkRegistry};
