use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::DefinitionError;
use crate::graph::Graph;
use crate::step::WorkflowStep;

/// A named set of steps addressable by workflow kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowDefinition {
  /// Kind identifier the catalog keys this definition by.
  pub kind: String,
  /// Human-readable name.
  pub name: String,
  pub steps: Vec<WorkflowStep>,
}

impl WorkflowDefinition {
  pub fn new(kind: impl Into<String>, name: impl Into<String>, steps: Vec<WorkflowStep>) -> Self {
    Self {
      kind: kind.into(),
      name: name.into(),
      steps,
    }
  }

  /// Build the dependency graph for traversal.
  pub fn graph(&self) -> Graph {
    Graph::new(&self.steps)
  }

  /// Get a step by id.
  pub fn step(&self, step_id: &str) -> Option<&WorkflowStep> {
    self.steps.iter().find(|step| step.step_id == step_id)
  }

  /// Check the invariants execution relies on: unique step ids, every
  /// dependency present in this definition, and no dependency cycles.
  ///
  /// Runs once per execution — definitions are immutable values, so the
  /// re-check is cheap at the scale this crate targets (tens of steps).
  pub fn validate(&self) -> Result<(), DefinitionError> {
    let mut seen = HashSet::new();
    for step in &self.steps {
      if !seen.insert(step.step_id.as_str()) {
        return Err(DefinitionError::DuplicateStep {
          step_id: step.step_id.clone(),
        });
      }
    }

    for step in &self.steps {
      for dependency in &step.dependencies {
        if !seen.contains(dependency.as_str()) {
          return Err(DefinitionError::UnknownDependency {
            step_id: step.step_id.clone(),
            dependency: dependency.clone(),
          });
        }
      }
    }

    if let Some(step_id) = self.graph().detect_cycle() {
      return Err(DefinitionError::Cycle { step_id });
    }

    Ok(())
  }
}
