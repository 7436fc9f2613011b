//! Data Transfer Objects for persistence.
//!
//! DTOs wrap domain values with the metadata stored next to them on disk.

mod state;

pub use state::{STATE_VERSION, StateEnvelope};
