//! Configuration model.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::session::DEFAULT_RESET_CATEGORY;

/// Root configuration, read from `config.toml`.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ThinkingConfig {
    /// Where the session snapshot is persisted. Defaults to the data directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,
    /// Reset categories that clear every session.
    #[serde(default = "default_reset_categories")]
    pub reset_categories: Vec<String>,
    /// Whether sessions are saved between runs.
    #[serde(default = "default_persist")]
    pub persist: bool,
    /// Default tracing filter when `RUST_LOG` is unset.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_reset_categories() -> Vec<String> {
    vec![DEFAULT_RESET_CATEGORY.to_string()]
}

fn default_persist() -> bool {
    true
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ThinkingConfig {
    fn default() -> Self {
        Self {
            state_file: None,
            reset_categories: default_reset_categories(),
            persist: default_persist(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_uses_defaults() {
        let config: ThinkingConfig = toml::from_str("").unwrap();
        assert_eq!(config, ThinkingConfig::default());
        assert_eq!(config.reset_categories, vec!["chat"]);
        assert!(config.persist);
    }

    #[test]
    fn test_partial_toml() {
        let config: ThinkingConfig = toml::from_str(
            r#"
            state_file = "/tmp/thinking.json"
            reset_categories = ["chat", "thinking"]
            "#,
        )
        .unwrap();
        assert_eq!(config.state_file, Some(PathBuf::from("/tmp/thinking.json")));
        assert_eq!(config.reset_categories, vec!["chat", "thinking"]);
        assert_eq!(config.log_level, "info");
    }
}
