//! Append-only result history executors keep for their own metrics.

use std::sync::{Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use serde::Serialize;

use crate::result::TaskResult;

/// Append-only record of an executor's past results.
///
/// The history is the only mutable state an executor owns. It is never
/// read by the scheduler — it exists for introspection and reporting.
#[derive(Debug, Default)]
pub struct ResultHistory {
  entries: Mutex<Vec<TaskResult>>,
}

/// Metrics derived from a [`ResultHistory`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PerformanceMetrics {
  pub tasks_completed: usize,
  pub success_rate: f64,
  pub average_confidence: f64,
  pub average_execution_time: Duration,
}

impl ResultHistory {
  pub fn new() -> Self {
    Self::default()
  }

  /// Append a result to the history.
  pub fn record(&self, result: &TaskResult) {
    self.entries().push(result.clone());
  }

  pub fn len(&self) -> usize {
    self.entries().len()
  }

  pub fn is_empty(&self) -> bool {
    self.len() == 0
  }

  // The history stays readable even if a writer panicked mid-push.
  fn entries(&self) -> MutexGuard<'_, Vec<TaskResult>> {
    self.entries.lock().unwrap_or_else(PoisonError::into_inner)
  }

  /// Derive metrics over everything recorded so far.
  pub fn metrics(&self) -> PerformanceMetrics {
    let entries = self.entries();
    if entries.is_empty() {
      return PerformanceMetrics {
        tasks_completed: 0,
        success_rate: 0.0,
        average_confidence: 0.0,
        average_execution_time: Duration::ZERO,
      };
    }

    let total = entries.len();
    let successful = entries.iter().filter(|r| r.success).count();
    let confidence_sum: f64 = entries.iter().map(|r| r.confidence).sum();
    let time_sum: Duration = entries.iter().map(|r| r.execution_time).sum();

    PerformanceMetrics {
      tasks_completed: total,
      success_rate: successful as f64 / total as f64,
      average_confidence: confidence_sum / total as f64,
      average_execution_time: time_sum / total as u32,
    }
  }
}
