//! Thinking service implementation.
//!
//! `ThinkingService` is the host-facing entry point: it hands out engines
//! bound to a fresh or restored store, dispatches tool calls to the
//! registered frameworks and persists the result.

use serde_json::{Value, json};
use std::sync::Arc;
use thinking_core::config::ThinkingConfig;
use thinking_core::session::{
    DEFAULT_RESET_CATEGORY, SessionEngine, SessionStore, StateRepository,
};
use thinking_core::{Result, ThinkingError};
use thinking_frameworks::{FrameworkRegistry, ToolDefinition};
use thinking_infrastructure::FileStateRepository;

use crate::validation::validate_step_args;

/// Provides structured reasoning over the registered frameworks.
///
/// # Example
///
/// ```ignore
/// let service = ThinkingService::new(FrameworkRegistry::builtin());
/// let engine = service.attach();
/// let payload = service.execute(&engine, "decision-matrix", json!({
///     "problem": "pick a language",
///     "step": "define_decision",
///     "content": "backend rewrite",
///     "nextThoughtNeeded": true
/// }))?;
/// assert_eq!(payload["stepNumber"], 1);
/// ```
#[derive(Clone)]
pub struct ThinkingService {
    registry: Arc<FrameworkRegistry>,
    repository: Option<Arc<dyn StateRepository>>,
    reset_categories: Vec<String>,
}

impl ThinkingService {
    /// Creates an in-memory service over `registry`.
    pub fn new(registry: FrameworkRegistry) -> Self {
        Self {
            registry: Arc::new(registry),
            repository: None,
            reset_categories: vec![DEFAULT_RESET_CATEGORY.to_string()],
        }
    }

    /// Persists sessions through `repository`.
    pub fn with_repository(mut self, repository: Arc<dyn StateRepository>) -> Self {
        self.repository = Some(repository);
        self
    }

    /// Replaces the categories that clear every session on reset.
    pub fn with_reset_categories<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.reset_categories = categories.into_iter().map(Into::into).collect();
        self
    }

    /// Builds a service with the built-in frameworks configured by `config`.
    ///
    /// When `config.persist` is set, sessions are stored in
    /// `config.state_file`, or the default state file when none is given.
    ///
    /// # Errors
    ///
    /// Returns a `Config` error if the default state file location cannot
    /// be resolved.
    pub fn from_config(config: &ThinkingConfig) -> Result<Self> {
        let service = Self::new(FrameworkRegistry::builtin())
            .with_reset_categories(config.reset_categories.iter().cloned());

        if !config.persist {
            return Ok(service);
        }

        let repository = match &config.state_file {
            Some(path) => FileStateRepository::with_path(path),
            None => FileStateRepository::new()?,
        };
        tracing::debug!("[ThinkingService] State file: {}", repository.path().display());
        Ok(service.with_repository(Arc::new(repository)))
    }

    pub fn name(&self) -> &str {
        "ThinkingService"
    }

    pub fn description(&self) -> &str {
        "Provides structured reasoning functionality"
    }

    pub fn registry(&self) -> &FrameworkRegistry {
        &self.registry
    }

    /// Returns an engine over a fresh, empty store.
    pub fn attach(&self) -> SessionEngine {
        tracing::info!("[ThinkingService] Attached with empty session store");
        SessionEngine::new(Arc::new(SessionStore::with_reset_categories(
            self.reset_categories.iter().cloned(),
        )))
    }

    /// Returns an engine whose store is rebuilt from the repository.
    ///
    /// Without a repository, or without saved state, the store is empty.
    ///
    /// # Errors
    ///
    /// Returns the repository's error if the saved state cannot be read.
    pub async fn restore(&self) -> Result<SessionEngine> {
        let engine = self.attach();
        if let Some(repository) = &self.repository {
            if let Some(snapshot) = repository.load().await? {
                tracing::info!(
                    "[ThinkingService] Restored {} session(s)",
                    snapshot.sessions.len()
                );
                engine.store().restore(snapshot);
            }
        }
        Ok(engine)
    }

    /// Saves the engine's sessions. No-op without a repository.
    pub async fn persist(&self, engine: &SessionEngine) -> Result<()> {
        let Some(repository) = &self.repository else {
            return Ok(());
        };
        repository.save(&engine.store().snapshot()).await?;
        tracing::info!("[ThinkingService] Persisted {} session(s)", engine.store().len());
        Ok(())
    }

    /// Runs one tool call.
    ///
    /// # Arguments
    ///
    /// * `engine` - The engine holding the caller's sessions
    /// * `tool` - Framework name, e.g. `decision-matrix`
    /// * `raw_args` - The call's JSON arguments
    ///
    /// # Returns
    ///
    /// The framework's payload with `stepNumber`, `completedSteps` and
    /// `complete` taken from the committed session.
    ///
    /// # Errors
    ///
    /// - `NotFound` for an unknown tool
    /// - `MalformedInput` when the arguments fail validation; the store is
    ///   left untouched
    /// - `Tool { tool, .. }` wrapping any engine or processor failure
    pub fn execute(&self, engine: &SessionEngine, tool: &str, raw_args: Value) -> Result<Value> {
        let framework = self
            .registry
            .get(tool)
            .ok_or_else(|| ThinkingError::not_found("framework", tool))?;

        let args = validate_step_args(framework.as_ref(), raw_args)?;

        let outcome = engine
            .process_step(tool, &args, framework.as_ref())
            .map_err(|e| e.in_tool(tool))?;

        let mut payload = outcome.result;
        if let Value::Object(fields) = &mut payload {
            fields.insert("stepNumber".into(), json!(outcome.session.step_number));
            fields.insert("completedSteps".into(), json!(outcome.session.completed_steps));
            fields.insert("complete".into(), json!(outcome.session.complete));
        }
        Ok(payload)
    }

    pub fn clear_session(&self, engine: &SessionEngine, tool: &str) {
        engine.clear_session(tool);
    }

    pub fn clear_all(&self, engine: &SessionEngine) {
        engine.clear_all();
    }

    /// Clears every session if any of `categories` is a reset category.
    ///
    /// Returns `true` when the sessions were cleared.
    pub fn reset<S: AsRef<str>>(&self, engine: &SessionEngine, categories: &[S]) -> bool {
        engine.store().reset_on_categories(categories)
    }

    /// Human-readable session summary.
    pub fn show(&self, engine: &SessionEngine) -> Vec<String> {
        engine.store().describe()
    }

    /// Tool listings for every registered framework.
    pub fn tools(&self) -> Vec<ToolDefinition> {
        self.registry.definitions()
    }
}

impl std::fmt::Debug for ThinkingService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ThinkingService")
            .field("registry", &self.registry)
            .field("persistent", &self.repository.is_some())
            .field("reset_categories", &self.reset_categories)
            .finish()
    }
}
