use serde::{Deserialize, Serialize};

/// A single declarative step in a workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowStep {
  /// Unique id within the workflow.
  pub step_id: String,
  /// Name of the executor that runs this step. Resolved through the
  /// registry at execution time.
  pub executor: String,
  /// The task description handed to the executor.
  pub task: String,
  /// Ids of steps that must complete before this one may start.
  #[serde(default)]
  pub dependencies: Vec<String>,
  /// Ordering tie-break within a wave; lower runs are logged first.
  /// Never affects correctness.
  #[serde(default = "default_priority")]
  pub priority: u8,
  /// Rough duration hint for reporting.
  #[serde(skip_serializing_if = "Option::is_none")]
  pub expected_duration_ms: Option<u64>,
}

fn default_priority() -> u8 {
  1
}

impl WorkflowStep {
  /// Convenience constructor for a step with no dependencies.
  pub fn new(step_id: impl Into<String>, executor: impl Into<String>, task: impl Into<String>) -> Self {
    Self {
      step_id: step_id.into(),
      executor: executor.into(),
      task: task.into(),
      dependencies: Vec::new(),
      priority: default_priority(),
      expected_duration_ms: None,
    }
  }

  /// Add prerequisite step ids.
  pub fn depends_on<I, S>(mut self, dependencies: I) -> Self
  where
    I: IntoIterator<Item = S>,
    S: Into<String>,
  {
    self.dependencies.extend(dependencies.into_iter().map(Into::into));
    self
  }

  pub fn with_priority(mut self, priority: u8) -> Self {
    self.priority = priority;
    self
  }

  pub fn with_expected_duration_ms(mut self, expected_duration_ms: u64) -> Self {
    self.expected_duration_ms = Some(expected_duration_ms);
    self
  }
}
