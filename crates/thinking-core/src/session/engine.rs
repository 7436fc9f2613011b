//! Step-processing engine.
//!
//! `SessionEngine` owns the lifecycle of every reasoning session:
//! create on first call, advance the step counter, record the step label,
//! run the framework processor and latch completion.

use serde_json::Value;
use std::sync::Arc;

use super::args::StepArgs;
use super::model::ReasoningSession;
use super::processor::FrameworkProcessor;
use super::store::SessionStore;
use crate::error::{Result, ThinkingError};

/// Result of one processed step.
#[derive(Debug, Clone, PartialEq)]
pub struct StepOutcome {
    /// Committed session state, captured under the store's write lock.
    pub session: ReasoningSession,
    /// Payload returned by the framework processor.
    pub result: Value,
}

/// Applies steps to sessions held in a [`SessionStore`].
///
/// The store is injected rather than global; several engines may share one
/// store through the `Arc`.
#[derive(Debug, Clone)]
pub struct SessionEngine {
    store: Arc<SessionStore>,
}

impl SessionEngine {
    pub fn new(store: Arc<SessionStore>) -> Self {
        Self { store }
    }

    /// Returns the store this engine writes to.
    pub fn store(&self) -> &Arc<SessionStore> {
        &self.store
    }

    /// Processes one step for `framework_id`.
    ///
    /// # Behavior
    ///
    /// 1. A missing session is created from `args.problem`; without a
    ///    problem the call fails with `InvalidSession` and nothing is stored.
    /// 2. Under the store's write lock: the step counter advances by one,
    ///    the step label is appended if new, the processor runs, completion
    ///    latches on `nextThoughtNeeded == false` or `complete == true`, and
    ///    the session is written back.
    /// 3. The returned session is the one written back, cloned before the
    ///    lock is released.
    ///
    /// # Errors
    ///
    /// - `InvalidSession` if the session does not exist and `args` has no problem.
    /// - `Internal` if the step counter cannot advance; nothing is written.
    /// - Any error returned by `processor`, unmodified. For an existing
    ///   session the step counter and label advance are kept and the
    ///   processor's data changes are discarded. A session the failing call
    ///   would have created is not stored.
    pub fn process_step<P>(
        &self,
        framework_id: &str,
        args: &StepArgs,
        processor: &P,
    ) -> Result<StepOutcome>
    where
        P: FrameworkProcessor + ?Sized,
    {
        self.store.mutate(|sessions| -> Result<StepOutcome> {
            let existed = sessions.contains_key(framework_id);
            let mut session = match sessions.get(framework_id) {
                Some(existing) => existing.clone(),
                None => {
                    let problem = args.problem_text().ok_or_else(|| {
                        tracing::warn!(
                            "[SessionEngine] Rejected first call without problem: {}",
                            framework_id
                        );
                        ThinkingError::problem_required()
                    })?;
                    tracing::info!("[SessionEngine] Creating session: {}", framework_id);
                    ReasoningSession::new(framework_id, problem)
                }
            };

            session.step_number = session.step_number.checked_add(1).ok_or_else(|| {
                tracing::warn!(
                    "[SessionEngine] Step counter exhausted for {}",
                    framework_id
                );
                ThinkingError::internal(format!(
                    "step counter overflow for session '{}'",
                    framework_id
                ))
            })?;
            if let Some(label) = args.step_label() {
                session.record_step(label);
            }

            tracing::debug!(
                "[SessionEngine] {} step {} ({})",
                framework_id,
                session.step_number,
                args.step_label().unwrap_or("-")
            );

            let mut scratch = session.data.clone();
            let processed = {
                let mut ctx = session.context_with(&mut scratch);
                processor.process(&mut ctx, args)
            };

            match processed {
                Ok(result) => {
                    session.data = scratch;
                    if args.requests_completion() && !session.complete {
                        tracing::info!("[SessionEngine] Session complete: {}", framework_id);
                        session.complete = true;
                    }
                    sessions.insert(framework_id.to_string(), session.clone());
                    Ok(StepOutcome { session, result })
                }
                Err(err) => {
                    tracing::warn!(
                        "[SessionEngine] Processor failed for {} at step {}: {}",
                        framework_id,
                        session.step_number,
                        err
                    );
                    // A session the failing call would have created is never stored.
                    if existed {
                        sessions.insert(framework_id.to_string(), session);
                    }
                    Err(err)
                }
            }
        })
    }

    /// Removes the session for `framework_id`. No-op if absent.
    pub fn clear_session(&self, framework_id: &str) {
        self.store.delete(framework_id);
    }

    /// Removes every session.
    pub fn clear_all(&self) {
        self.store.clear_all();
    }
}

impl Default for SessionEngine {
    fn default() -> Self {
        Self::new(Arc::new(SessionStore::new()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::processor::processor_fn;
    use serde_json::json;

    fn first_args(step: &str) -> StepArgs {
        StepArgs::new()
            .problem("pick a language")
            .step(step)
            .content("...")
            .next_thought_needed(true)
    }

    fn next_args(step: &str) -> StepArgs {
        StepArgs::new().step(step).content("...").next_thought_needed(true)
    }

    fn noop() -> impl FrameworkProcessor {
        processor_fn(|_ctx, _args| Ok(json!({})))
    }

    #[test]
    fn test_first_call_creates_session() {
        let engine = SessionEngine::default();
        let outcome = engine
            .process_step("decision-matrix", &first_args("define_decision"), &noop())
            .unwrap();

        assert_eq!(outcome.session.step_number, 1);
        assert_eq!(outcome.session.completed_steps, vec!["define_decision"]);
        assert!(!outcome.session.complete);
        assert_eq!(engine.store().len(), 1);
        assert_eq!(
            engine.store().get("decision-matrix").unwrap().problem,
            "pick a language"
        );
    }

    #[test]
    fn test_first_call_without_problem_fails_and_stores_nothing() {
        let engine = SessionEngine::default();
        let err = engine
            .process_step("decision-matrix", &next_args("define_decision"), &noop())
            .unwrap_err();

        assert!(err.is_invalid_session());
        assert_eq!(err.to_string(), "Problem must be defined on first call");
        assert!(!engine.store().contains("decision-matrix"));
    }

    #[test]
    fn test_empty_problem_is_rejected() {
        let engine = SessionEngine::default();
        let args = next_args("x").problem("");
        assert!(engine.process_step("t", &args, &noop()).is_err());
        assert!(engine.store().is_empty());
    }

    #[test]
    fn test_step_numbers_are_monotonic() {
        let engine = SessionEngine::default();
        engine.process_step("t", &first_args("a"), &noop()).unwrap();
        for expected in 2..=6 {
            let outcome = engine.process_step("t", &next_args("a"), &noop()).unwrap();
            assert_eq!(outcome.session.step_number, expected);
        }
    }

    #[test]
    fn test_problem_is_fixed_after_creation() {
        let engine = SessionEngine::default();
        engine.process_step("t", &first_args("a"), &noop()).unwrap();
        let outcome = engine
            .process_step("t", &next_args("b").problem("something else"), &noop())
            .unwrap();
        assert_eq!(outcome.session.problem, "pick a language");
    }

    #[test]
    fn test_labels_are_deduplicated() {
        let engine = SessionEngine::default();
        engine.process_step("t", &first_args("a"), &noop()).unwrap();
        engine.process_step("t", &next_args("b"), &noop()).unwrap();
        let outcome = engine.process_step("t", &next_args("a"), &noop()).unwrap();
        assert_eq!(outcome.session.completed_steps, vec!["a", "b"]);
        assert_eq!(outcome.session.step_number, 3);
    }

    #[test]
    fn test_missing_step_label_still_advances_counter() {
        let engine = SessionEngine::default();
        let args = StepArgs::new().problem("p").next_thought_needed(true);
        let outcome = engine.process_step("t", &args, &noop()).unwrap();
        assert_eq!(outcome.session.step_number, 1);
        assert!(outcome.session.completed_steps.is_empty());
    }

    #[test]
    fn test_next_thought_needed_false_completes() {
        let engine = SessionEngine::default();
        let args = first_args("a").next_thought_needed(false);
        let outcome = engine.process_step("t", &args, &noop()).unwrap();
        assert!(outcome.session.complete);
    }

    #[test]
    fn test_complete_flag_completes() {
        let engine = SessionEngine::default();
        let args = first_args("a").complete(true);
        let outcome = engine.process_step("t", &args, &noop()).unwrap();
        assert!(outcome.session.complete);
    }

    #[test]
    fn test_completion_latches_and_session_keeps_accepting_steps() {
        let engine = SessionEngine::default();
        engine
            .process_step("t", &first_args("a").next_thought_needed(false), &noop())
            .unwrap();

        // A complete session is not locked: later calls still advance it.
        let outcome = engine.process_step("t", &next_args("b"), &noop()).unwrap();
        assert!(outcome.session.complete);
        assert_eq!(outcome.session.step_number, 2);
        assert_eq!(outcome.session.completed_steps, vec!["a", "b"]);
    }

    #[test]
    fn test_processor_sees_advanced_bookkeeping() {
        let engine = SessionEngine::default();
        let inspector = processor_fn(|ctx, args| {
            Ok(json!({
                "problem": ctx.problem(),
                "stepNumber": ctx.step_number(),
                "completedSteps": ctx.completed_steps(),
                "complete": ctx.complete(),
                "content": args.content_text(),
            }))
        });

        let outcome = engine
            .process_step("t", &first_args("a").next_thought_needed(false), &inspector)
            .unwrap();

        assert_eq!(
            outcome.result,
            json!({
                "problem": "pick a language",
                "stepNumber": 1,
                "completedSteps": ["a"],
                "complete": false,
                "content": "...",
            })
        );
        assert!(outcome.session.complete);
    }

    #[test]
    fn test_processor_data_is_committed() {
        let engine = SessionEngine::default();
        let counter = processor_fn(|ctx, _args| {
            let n = ctx.data().get("count").and_then(Value::as_u64).unwrap_or(0) + 1;
            ctx.data_mut().insert("count".into(), json!(n));
            Ok(json!({ "count": n }))
        });

        engine.process_step("t", &first_args("a"), &counter).unwrap();
        let outcome = engine.process_step("t", &next_args("a"), &counter).unwrap();
        assert_eq!(outcome.result, json!({ "count": 2 }));
        assert_eq!(outcome.session.data.get("count"), Some(&json!(2)));
    }

    #[test]
    fn test_processor_error_propagates_and_keeps_bookkeeping_only() {
        let engine = SessionEngine::default();
        let writer = processor_fn(|ctx, _args| {
            let n = ctx.step_number();
            ctx.data_mut().insert("written".into(), json!(n));
            Ok(json!({}))
        });
        let failing = processor_fn(|ctx, _args| {
            ctx.data_mut().insert("written".into(), json!("partial"));
            Err(ThinkingError::processor("Processor error"))
        });

        engine.process_step("t", &first_args("a"), &writer).unwrap();
        let err = engine
            .process_step("t", &next_args("b").next_thought_needed(false), &failing)
            .unwrap_err();
        assert_eq!(err, ThinkingError::processor("Processor error"));

        let stored = engine.store().get("t").unwrap();
        assert_eq!(stored.step_number, 2);
        assert_eq!(stored.completed_steps, vec!["a", "b"]);
        assert_eq!(stored.data.get("written"), Some(&json!(1)));
        assert!(!stored.complete);
    }

    #[test]
    fn test_processor_error_on_first_call_stores_nothing() {
        let engine = SessionEngine::default();
        let failing = processor_fn(|_ctx, _args| Err(ThinkingError::processor("nope")));

        assert!(engine.process_step("t", &first_args("a"), &failing).is_err());
        assert!(!engine.store().contains("t"));

        // Without a stored session the next call must define the problem again.
        let err = engine
            .process_step("t", &next_args("b"), &noop())
            .unwrap_err();
        assert!(err.is_invalid_session());
        assert!(engine.store().is_empty());
    }

    #[test]
    fn test_step_counter_overflow_is_an_error() {
        let engine = SessionEngine::default();
        let mut session = ReasoningSession::new("t", "p");
        session.step_number = u32::MAX;
        session.record_step("a");
        engine.store().mutate(|sessions| {
            sessions.insert("t".to_string(), session.clone());
        });

        let err = engine
            .process_step("t", &next_args("b"), &noop())
            .unwrap_err();
        assert!(matches!(err, ThinkingError::Internal(_)));
        assert_eq!(engine.store().get("t").unwrap(), session);
    }

    #[test]
    fn test_outcome_reflects_committed_session() {
        let engine = SessionEngine::default();
        let counter = processor_fn(|ctx, _args| {
            ctx.data_mut().insert("seen".into(), json!(true));
            Ok(json!({}))
        });

        let outcome = engine.process_step("t", &first_args("a"), &counter).unwrap();
        engine.clear_session("t");

        // The outcome was captured under the write lock, so a later clear does not affect it.
        assert_eq!(outcome.session.step_number, 1);
        assert_eq!(outcome.session.data.get("seen"), Some(&json!(true)));
    }

    #[test]
    fn test_sessions_are_isolated_per_framework() {
        let engine = SessionEngine::default();
        let writer = processor_fn(|ctx, args| {
            ctx.data_mut().insert("last".into(), json!(args.content_text()));
            Ok(json!({}))
        });

        engine.process_step("A", &first_args("a"), &writer).unwrap();
        engine
            .process_step("B", &first_args("x").content("for B"), &writer)
            .unwrap();
        let before = engine.store().get("B").unwrap();

        engine
            .process_step("A", &next_args("b").next_thought_needed(false), &writer)
            .unwrap();
        assert_eq!(engine.store().get("B").unwrap(), before);
    }

    #[test]
    fn test_clear_session_restarts_numbering() {
        let engine = SessionEngine::default();
        engine
            .process_step("decision-matrix", &first_args("define_decision"), &noop())
            .unwrap();
        engine
            .process_step("decision-matrix", &next_args("list_options"), &noop())
            .unwrap();

        engine.clear_session("decision-matrix");
        assert!(!engine.store().contains("decision-matrix"));

        let outcome = engine
            .process_step(
                "decision-matrix",
                &first_args("define_decision").problem("pick a database"),
                &noop(),
            )
            .unwrap();
        assert_eq!(outcome.session.step_number, 1);
        assert_eq!(outcome.session.problem, "pick a database");
    }

    #[test]
    fn test_clear_all() {
        let engine = SessionEngine::default();
        for id in ["tool1", "tool2", "tool3"] {
            engine.process_step(id, &first_args("step1"), &noop()).unwrap();
        }
        assert_eq!(engine.store().len(), 3);
        engine.clear_all();
        assert!(engine.store().is_empty());
    }

    #[test]
    fn test_concurrent_steps_do_not_lose_updates() {
        let engine = SessionEngine::default();
        engine.process_step("t", &first_args("a"), &noop()).unwrap();

        let counter = processor_fn(|ctx, _args| {
            let n = ctx.data().get("count").and_then(Value::as_u64).unwrap_or(0) + 1;
            ctx.data_mut().insert("count".into(), json!(n));
            Ok(json!({}))
        });

        std::thread::scope(|scope| {
            for _ in 0..8 {
                scope.spawn(|| {
                    for _ in 0..25 {
                        engine.process_step("t", &next_args("a"), &counter).unwrap();
                    }
                });
            }
        });

        let stored = engine.store().get("t").unwrap();
        assert_eq!(stored.step_number, 201);
        assert_eq!(stored.data.get("count"), Some(&json!(200)));
    }
}
