//! Orchestration error types.

use maestro_workflow::DefinitionError;
use thiserror::Error;

/// Fatal orchestration failures.
///
/// Per-step failures are not represented here: a step whose executor is
/// missing, faults, or times out is recorded as a failed task result
/// inside a complete [`crate::WorkflowResult`]. These variants are the
/// only paths that abort a call without producing a result.
#[derive(Debug, Error)]
pub enum OrchestrateError {
  /// Execution was cancelled.
  #[error("execution cancelled")]
  Cancelled,

  /// The definition failed validation (unknown kind, duplicate step,
  /// unknown dependency, or cycle). Raised before any step executes.
  #[error(transparent)]
  Definition(#[from] DefinitionError),

  /// No step is ready but steps remain incomplete. Validation makes
  /// this unreachable; if an invariant breaks it is surfaced rather
  /// than silently truncating the workflow.
  #[error("scheduling stuck: {remaining} steps remain but none are ready")]
  Stuck { remaining: usize },
}
