//! Wavefront workflow execution.
//!
//! The orchestrator resolves execution order from dependency readiness:
//! each iteration collects the steps whose dependencies are complete,
//! dispatches them concurrently, folds their outputs into the context of
//! downstream steps, and repeats until every step has a result.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use maestro_executor::{Context, Executor, META_EXECUTOR, TaskResult};
use maestro_registry::ExecutorRegistry;
use maestro_workflow::{DefinitionError, WorkflowCatalog, WorkflowDefinition, WorkflowStep};
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info, instrument, warn};

use crate::aggregator::ResultAggregator;
use crate::error::OrchestrateError;
use crate::result::WorkflowResult;

/// Configuration for the orchestrator.
#[derive(Debug, Clone, Default)]
pub struct OrchestratorConfig {
  /// Upper bound on a single step's execution. On elapse the step is
  /// recorded as a failed task result (`error_kind = "timeout"`) and
  /// unrelated branches keep running. `None` disables the bound.
  pub step_timeout: Option<Duration>,
}

/// The workflow engine.
///
/// Owns a catalog of definitions and a registry of executors, both
/// supplied at construction. `execute_workflow` is the only entry point
/// the surrounding layer calls.
pub struct Orchestrator {
  registry: Arc<ExecutorRegistry>,
  catalog: WorkflowCatalog,
  config: OrchestratorConfig,
  aggregator: ResultAggregator,
}

impl Orchestrator {
  pub fn new(registry: Arc<ExecutorRegistry>, catalog: WorkflowCatalog) -> Self {
    Self::with_config(registry, catalog, OrchestratorConfig::default())
  }

  pub fn with_config(
    registry: Arc<ExecutorRegistry>,
    catalog: WorkflowCatalog,
    config: OrchestratorConfig,
  ) -> Self {
    Self {
      registry,
      catalog,
      config,
      aggregator: ResultAggregator::new(),
    }
  }

  /// Execute the workflow registered under `kind` to completion.
  ///
  /// The initial context seeds every step's context snapshot; each step
  /// additionally sees `"<dep>_result"` entries for its own
  /// dependencies. A fresh context value is required per call — no
  /// state is shared across executions.
  #[instrument(
    name = "workflow_execute",
    skip(self, initial_context, cancel),
    fields(kind = %kind)
  )]
  pub async fn execute_workflow(
    &self,
    kind: &str,
    initial_context: Context,
    cancel: CancellationToken,
  ) -> Result<WorkflowResult, OrchestrateError> {
    let definition = self
      .catalog
      .get(kind)
      .ok_or_else(|| DefinitionError::UnknownKind {
        kind: kind.to_string(),
      })?;

    // Fail fast: nothing executes for a malformed definition.
    definition.validate()?;

    let execution_id = uuid::Uuid::new_v4().to_string();
    let started = Instant::now();

    info!(
      execution_id = %execution_id,
      kind = %kind,
      steps = definition.steps.len(),
      "workflow_started"
    );

    let result = self
      .run_waves(definition, &initial_context, &execution_id, &cancel)
      .await;

    let step_results = match result {
      Ok(step_results) => {
        info!(execution_id = %execution_id, "workflow_completed");
        step_results
      }
      Err(e) => {
        error!(execution_id = %execution_id, error = %e, "workflow_failed");
        return Err(e);
      }
    };

    let success = step_results.values().all(|r| r.success);

    Ok(WorkflowResult {
      kind: kind.to_string(),
      execution_id,
      success,
      total_duration: started.elapsed(),
      summary: self.aggregator.summarize(&step_results),
      recommendations: self.aggregator.recommendations(&step_results),
      step_results,
      timestamp: Utc::now(),
    })
  }

  /// Run the wavefront loop until every step has a recorded result.
  async fn run_waves(
    &self,
    definition: &WorkflowDefinition,
    initial_context: &Context,
    execution_id: &str,
    cancel: &CancellationToken,
  ) -> Result<HashMap<String, TaskResult>, OrchestrateError> {
    let total = definition.steps.len();
    let mut results: HashMap<String, TaskResult> = HashMap::new();

    while results.len() < total {
      if cancel.is_cancelled() {
        warn!(execution_id = %execution_id, "workflow cancelled");
        return Err(OrchestrateError::Cancelled);
      }

      let ready = find_ready(definition, &results);
      if ready.is_empty() {
        // Cannot happen after validation; surface it instead of
        // returning a silently truncated workflow.
        return Err(OrchestrateError::Stuck {
          remaining: total - results.len(),
        });
      }

      info!(
        execution_id = %execution_id,
        ready_steps = ?ready.iter().map(|s| s.step_id.as_str()).collect::<Vec<_>>(),
        "executing wave of ready steps"
      );

      let handles = self.dispatch_wave(&ready, initial_context, &results, execution_id);

      let wave = tokio::select! {
        wave = futures::future::join_all(
          handles.into_iter().map(|(step_id, handle)| async move { (step_id, handle.await) }),
        ) => wave,
        _ = cancel.cancelled() => {
          warn!(execution_id = %execution_id, "workflow cancelled during wave execution");
          return Err(OrchestrateError::Cancelled);
        }
      };

      for (step_id, joined) in wave {
        let result = match joined {
          Ok(result) => result,
          Err(e) => {
            // An executor that panics must not unwind the wave.
            error!(
              execution_id = %execution_id,
              step_id = %step_id,
              error = %e,
              "executor escaped its contract"
            );
            TaskResult::failure("panic", e.to_string())
          }
        };

        if result.success {
          info!(
            execution_id = %execution_id,
            step_id = %step_id,
            confidence = result.confidence,
            "task_completed"
          );
        } else {
          warn!(
            execution_id = %execution_id,
            step_id = %step_id,
            error_kind = result.error_kind().unwrap_or("unknown"),
            "task_failed"
          );
        }
        results.insert(step_id, result);
      }
    }

    Ok(results)
  }

  /// Spawn every ready step concurrently.
  ///
  /// Each task receives an owned context snapshot and writes only its
  /// own result slot (returned through the join); the `results` map is
  /// mutated solely by the orchestration loop after the wave join.
  fn dispatch_wave(
    &self,
    ready: &[&WorkflowStep],
    initial_context: &Context,
    results: &HashMap<String, TaskResult>,
    execution_id: &str,
  ) -> Vec<(String, JoinHandle<TaskResult>)> {
    let mut handles = Vec::with_capacity(ready.len());

    for &step in ready {
      let step_id = step.step_id.clone();
      let executor_name = step.executor.clone();
      let executor = self.registry.get(&executor_name);
      let context = enrich_context(initial_context, step, results);
      let task = step.task.clone();
      let step_timeout = self.config.step_timeout;

      info!(
        execution_id = %execution_id,
        step_id = %step_id,
        executor = %executor_name,
        "task_started"
      );

      let handle = tokio::spawn(async move {
        match executor {
          Some(executor) => run_step(executor, &task, &context, step_timeout).await,
          // A missing executor fails its own step only; siblings and
          // independent downstream branches still run.
          None => TaskResult::failure(
            "executor_not_found",
            format!("no executor registered as '{executor_name}'"),
          )
          .with_metadata(META_EXECUTOR, executor_name),
        }
      });

      handles.push((step_id, handle));
    }

    handles
  }
}

/// Invoke one executor, bounding it with the configured timeout.
async fn run_step(
  executor: Arc<dyn Executor>,
  task: &str,
  context: &Context,
  step_timeout: Option<Duration>,
) -> TaskResult {
  match step_timeout {
    Some(limit) => match tokio::time::timeout(limit, executor.execute(task, context)).await {
      Ok(result) => result,
      Err(_) => TaskResult::failure(
        "timeout",
        format!("step exceeded its {}ms budget", limit.as_millis()),
      )
      .with_metadata(META_EXECUTOR, executor.name())
      .with_execution_time(limit),
    },
    None => executor.execute(task, context).await,
  }
}

/// Steps whose dependencies all have a finalized result, in
/// (priority, step id) order for reproducible logging. Ordering within
/// a wave never affects correctness — the whole wave runs concurrently.
fn find_ready<'a>(
  definition: &'a WorkflowDefinition,
  results: &HashMap<String, TaskResult>,
) -> Vec<&'a WorkflowStep> {
  let mut ready: Vec<&WorkflowStep> = definition
    .steps
    .iter()
    .filter(|step| !results.contains_key(&step.step_id))
    .filter(|step| {
      step
        .dependencies
        .iter()
        .all(|dependency| results.contains_key(dependency))
    })
    .collect();

  ready.sort_by(|a, b| {
    a.priority
      .cmp(&b.priority)
      .then_with(|| a.step_id.cmp(&b.step_id))
  });
  ready
}

/// Defensive context snapshot for one step: the caller-provided values
/// plus one `"<dep>_result"` entry per declared dependency, carrying
/// that dependency's output data.
fn enrich_context(
  initial_context: &Context,
  step: &WorkflowStep,
  results: &HashMap<String, TaskResult>,
) -> Context {
  let mut context = initial_context.clone();
  for dependency in &step.dependencies {
    if let Some(result) = results.get(dependency) {
      context.insert(format!("{dependency}_result"), result.data.clone());
    }
  }
  context
}
