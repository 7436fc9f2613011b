//! Session domain module.
//!
//! This module contains the reasoning session model, the session store, the
//! step-processing engine and the framework processor contract.
//!
//! # Module Structure
//!
//! - `model`: Core session domain model (`ReasoningSession`)
//! - `args`: Per-call arguments (`StepArgs`)
//! - `context`: Processor-facing session view (`StepContext`)
//! - `processor`: Framework processor trait (`FrameworkProcessor`)
//! - `store`: Keyed session collection (`SessionStore`, `ThinkingSnapshot`)
//! - `engine`: Session lifecycle (`SessionEngine`, `StepOutcome`)
//! - `repository`: Persistence interface (`StateRepository`)
//!
//! # Usage
//!
//! ```ignore
//! use thinking_core::session::{SessionEngine, StepArgs, processor_fn};
//!
//! let engine = SessionEngine::default();
//! let args = StepArgs::new().problem("pick a language").step("define_decision");
//! let outcome = engine.process_step("decision-matrix", &args, &processor_fn(|_, _| Ok(json!({}))))?;
//! assert_eq!(outcome.session.step_number, 1);
//! ```

mod args;
mod context;
mod engine;
mod model;
mod processor;
mod repository;
mod store;

// Re-export public API
pub use args::StepArgs;
pub use context::StepContext;
pub use engine::{SessionEngine, StepOutcome};
pub use model::ReasoningSession;
pub use processor::{FrameworkProcessor, processor_fn};
pub use repository::StateRepository;
pub use store::{DEFAULT_RESET_CATEGORY, SessionMap, SessionStore, ThinkingSnapshot};
