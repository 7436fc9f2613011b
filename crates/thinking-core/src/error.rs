//! Error types for the thinking workspace.

use serde::Serialize;
use thiserror::Error;

/// A shared error type for every thinking crate.
///
/// Variants are typed so callers can tell a missing problem statement apart
/// from a schema rejection or a framework processor failure without parsing
/// messages.
#[derive(Error, Debug, Clone, PartialEq, Serialize)]
pub enum ThinkingError {
    /// The first call for a framework did not define the problem.
    #[error("{0}")]
    InvalidSession(String),

    /// Tool arguments rejected before reaching the engine
    #[error("Invalid input for {tool}: {message}")]
    MalformedInput { tool: String, message: String },

    /// A framework processor failed while accumulating step data
    #[error("Processor error: {message}")]
    Processor { message: String },

    /// Entity not found error with type information
    #[error("Entity not found: {entity_type} '{id}'")]
    NotFound { entity_type: String, id: String },

    /// IO error (file system operations)
    #[error("IO error: {message}")]
    Io { message: String },

    /// Serialization/deserialization error
    #[error("Serialization error: {format} - {message}")]
    Serialization {
        format: String, // "TOML", "JSON", etc.
        message: String,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Internal error (should not happen in normal operation)
    #[error("Internal error: {0}")]
    Internal(String),

    /// An error raised while a named tool was executing.
    #[error("[{tool}] {source}")]
    Tool {
        tool: String,
        source: Box<ThinkingError>,
    },
}

/// Message used when a session is created without a problem statement.
pub const PROBLEM_REQUIRED: &str = "Problem must be defined on first call";

impl ThinkingError {
    // ============================================================================
    // Constructor helpers
    // ============================================================================

    /// Creates the error raised when the first call lacks a problem.
    pub fn problem_required() -> Self {
        Self::InvalidSession(PROBLEM_REQUIRED.to_string())
    }

    /// Creates a MalformedInput error
    pub fn malformed(tool: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedInput {
            tool: tool.into(),
            message: message.into(),
        }
    }

    /// Creates a Processor error
    pub fn processor(message: impl Into<String>) -> Self {
        Self::Processor {
            message: message.into(),
        }
    }

    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl Into<String>) -> Self {
        Self::NotFound {
            entity_type: entity_type.into(),
            id: id.into(),
        }
    }

    /// Creates an IO error
    pub fn io(message: impl Into<String>) -> Self {
        Self::Io {
            message: message.into(),
        }
    }

    /// Creates a Config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Wraps this error with the name of the tool that raised it.
    ///
    /// Wrapping is idempotent for the same tool so a processor that already
    /// namespaced its failure is not prefixed twice.
    pub fn in_tool(self, tool: impl Into<String>) -> Self {
        let tool = tool.into();
        if let Self::Tool { tool: inner, .. } = &self {
            if *inner == tool {
                return self;
            }
        }
        Self::Tool {
            tool,
            source: Box::new(self),
        }
    }

    // ============================================================================
    // Type checking methods
    // ============================================================================

    /// Returns the innermost error, looking through tool namespacing.
    pub fn root(&self) -> &ThinkingError {
        match self {
            Self::Tool { source, .. } => source.root(),
            other => other,
        }
    }

    /// Check if this is an InvalidSession error
    pub fn is_invalid_session(&self) -> bool {
        matches!(self.root(), Self::InvalidSession(_))
    }

    /// Check if this is a MalformedInput error
    pub fn is_malformed_input(&self) -> bool {
        matches!(self.root(), Self::MalformedInput { .. })
    }

    /// Check if this is a Processor error
    pub fn is_processor(&self) -> bool {
        matches!(self.root(), Self::Processor { .. })
    }

    /// Check if this is a NotFound error
    pub fn is_not_found(&self) -> bool {
        matches!(self.root(), Self::NotFound { .. })
    }

    /// Check if this is a serialization error
    pub fn is_serialization(&self) -> bool {
        matches!(self.root(), Self::Serialization { .. })
    }

    /// Check if this is a config error
    pub fn is_config(&self) -> bool {
        matches!(self.root(), Self::Config(_))
    }
}

// ============================================================================
// From implementations for automatic conversion
// ============================================================================

impl From<std::io::Error> for ThinkingError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            message: format!("{} (kind: {:?})", err, err.kind()),
        }
    }
}

impl From<serde_json::Error> for ThinkingError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            format: "JSON".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::de::Error> for ThinkingError {
    fn from(err: toml::de::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

impl From<toml::ser::Error> for ThinkingError {
    fn from(err: toml::ser::Error) -> Self {
        Self::Serialization {
            format: "TOML".to_string(),
            message: err.to_string(),
        }
    }
}

/// A type alias for `Result<T, ThinkingError>`.
pub type Result<T> = std::result::Result<T, ThinkingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_problem_required_message() {
        let err = ThinkingError::problem_required();
        assert_eq!(err.to_string(), "Problem must be defined on first call");
        assert!(err.is_invalid_session());
    }

    #[test]
    fn test_in_tool_prefixes_message() {
        let err = ThinkingError::processor("boom").in_tool("decision-matrix");
        assert_eq!(err.to_string(), "[decision-matrix] Processor error: boom");
        assert!(err.is_processor());
    }

    #[test]
    fn test_in_tool_is_idempotent_for_same_tool() {
        let err = ThinkingError::processor("boom")
            .in_tool("swot-analysis")
            .in_tool("swot-analysis");
        assert_eq!(err.to_string(), "[swot-analysis] Processor error: boom");
    }

    #[test]
    fn test_json_error_conversion() {
        let parse = serde_json::from_str::<serde_json::Value>("{not json");
        let err: ThinkingError = parse.unwrap_err().into();
        assert!(err.is_serialization());
    }
}
