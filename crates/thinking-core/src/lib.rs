//! Core domain for structured reasoning sessions.
//!
//! A session tracks one framework's progress on a fixed problem: a step
//! counter, the step labels seen so far, framework-owned accumulated data
//! and a completion flag. [`session::SessionEngine`] applies steps through
//! a caller-supplied [`session::FrameworkProcessor`].

pub mod config;
pub mod error;
pub mod session;

// Re-export common error type
pub use error::{Result, ThinkingError};
