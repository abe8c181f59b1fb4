use thiserror::Error;

/// Validation failures for a workflow definition.
///
/// All of these are fatal: they are raised before any step executes and
/// the whole `execute_workflow` call fails atomically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DefinitionError {
  #[error("unknown workflow kind: {kind}")]
  UnknownKind { kind: String },

  #[error("duplicate step id: {step_id}")]
  DuplicateStep { step_id: String },

  #[error("step '{step_id}' depends on unknown step '{dependency}'")]
  UnknownDependency { step_id: String, dependency: String },

  #[error("dependency cycle through step '{step_id}'")]
  Cycle { step_id: String },
}
