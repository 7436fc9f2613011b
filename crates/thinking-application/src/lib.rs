//! Application layer for structured reasoning sessions.
//!
//! [`ThinkingService`] ties the session engine to the framework registry and
//! to persistence; [`validation`] rejects malformed tool calls before they
//! reach the engine.

pub mod thinking_service;
pub mod validation;

pub use thinking_service::ThinkingService;
pub use validation::validate_step_args;
