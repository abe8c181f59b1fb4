use std::collections::HashMap;

use crate::step::WorkflowStep;

/// Dependency graph over a definition's steps, for traversal and
/// analysis.
///
/// Edges run from a dependency to its dependents: `downstream` of a step
/// are the steps waiting on it, `upstream` are its declared
/// prerequisites.
#[derive(Debug, Clone)]
pub struct Graph {
  /// step_id -> steps that depend on it.
  adjacency: HashMap<String, Vec<String>>,
  /// step_id -> its declared dependencies.
  reverse_adjacency: HashMap<String, Vec<String>>,
  /// Steps with no dependencies.
  entry_points: Vec<String>,
}

impl Graph {
  /// Build the graph from a definition's steps.
  pub fn new(steps: &[WorkflowStep]) -> Self {
    let mut adjacency: HashMap<String, Vec<String>> = HashMap::new();
    let mut reverse_adjacency: HashMap<String, Vec<String>> = HashMap::new();

    for step in steps {
      adjacency.entry(step.step_id.clone()).or_default();
      reverse_adjacency.entry(step.step_id.clone()).or_default();
    }

    for step in steps {
      for dependency in &step.dependencies {
        adjacency
          .entry(dependency.clone())
          .or_default()
          .push(step.step_id.clone());
        reverse_adjacency
          .entry(step.step_id.clone())
          .or_default()
          .push(dependency.clone());
      }
    }

    let entry_points: Vec<String> = steps
      .iter()
      .filter(|step| step.dependencies.is_empty())
      .map(|step| step.step_id.clone())
      .collect();

    Self {
      adjacency,
      reverse_adjacency,
      entry_points,
    }
  }

  /// Steps with no dependencies — the first wave.
  pub fn entry_points(&self) -> &[String] {
    &self.entry_points
  }

  /// Steps that depend on the given step.
  pub fn downstream(&self, step_id: &str) -> &[String] {
    self
      .adjacency
      .get(step_id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Declared dependencies of the given step.
  pub fn upstream(&self, step_id: &str) -> &[String] {
    self
      .reverse_adjacency
      .get(step_id)
      .map(|v| v.as_slice())
      .unwrap_or(&[])
  }

  /// Find a step that sits on a dependency cycle, if any.
  ///
  /// Kahn's algorithm: repeatedly retire zero-in-degree steps; anything
  /// left afterwards is on (or downstream of) a cycle. Returns the
  /// lexicographically smallest offending id so the error is stable.
  ///
  /// Assumes every dependency id names a step in the graph — check
  /// unknown dependencies first.
  pub fn detect_cycle(&self) -> Option<String> {
    let mut in_degree: HashMap<&str, usize> = self
      .reverse_adjacency
      .iter()
      .map(|(id, deps)| (id.as_str(), deps.len()))
      .collect();

    let mut queue: Vec<&str> = in_degree
      .iter()
      .filter(|(_, degree)| **degree == 0)
      .map(|(id, _)| *id)
      .collect();

    let mut retired = 0usize;
    while let Some(id) = queue.pop() {
      retired += 1;
      for dependent in self.downstream(id) {
        if let Some(degree) = in_degree.get_mut(dependent.as_str()) {
          *degree -= 1;
          if *degree == 0 {
            queue.push(dependent.as_str());
          }
        }
      }
    }

    if retired == in_degree.len() {
      return None;
    }

    in_degree
      .into_iter()
      .filter(|(_, degree)| *degree > 0)
      .map(|(id, _)| id.to_string())
      .min()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn step(id: &str, deps: &[&str]) -> WorkflowStep {
    WorkflowStep::new(id, "stub", "task").depends_on(deps.iter().copied())
  }

  #[test]
  fn builds_adjacency_from_dependencies() {
    let steps = vec![step("a", &[]), step("b", &[]), step("c", &["a", "b"])];
    let graph = Graph::new(&steps);

    assert_eq!(graph.upstream("c"), ["a".to_string(), "b".to_string()]);
    assert_eq!(graph.downstream("a"), ["c".to_string()]);
    let mut entries = graph.entry_points().to_vec();
    entries.sort();
    assert_eq!(entries, vec!["a".to_string(), "b".to_string()]);
  }

  #[test]
  fn acyclic_graph_has_no_cycle() {
    let steps = vec![step("a", &[]), step("b", &["a"]), step("c", &["a", "b"])];
    assert_eq!(Graph::new(&steps).detect_cycle(), None);
  }

  #[test]
  fn detects_direct_cycle() {
    let steps = vec![step("a", &["b"]), step("b", &["a"])];
    let offender = Graph::new(&steps).detect_cycle();
    assert_eq!(offender, Some("a".to_string()));
  }

  #[test]
  fn detects_self_dependency() {
    let steps = vec![step("a", &["a"])];
    assert_eq!(Graph::new(&steps).detect_cycle(), Some("a".to_string()));
  }

  #[test]
  fn detects_transitive_cycle() {
    let steps = vec![
      step("a", &["c"]),
      step("b", &["a"]),
      step("c", &["b"]),
      step("d", &[]),
    ];
    assert!(Graph::new(&steps).detect_cycle().is_some());
  }
}
