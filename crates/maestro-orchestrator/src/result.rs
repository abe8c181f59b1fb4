//! Workflow execution result.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use maestro_executor::TaskResult;
use serde::{Deserialize, Serialize};

use crate::aggregator::WorkflowSummary;

/// The single artifact a workflow execution returns to its caller.
///
/// Built once at the end of orchestration and immutable thereafter.
/// `success` follows all-succeed semantics: it is true iff every step's
/// task result succeeded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkflowResult {
  /// Kind of the workflow that ran.
  pub kind: String,
  /// Unique id stamped on this execution.
  pub execution_id: String,
  pub success: bool,
  pub total_duration: Duration,
  /// Every step's result, keyed by step id. Always complete: failed
  /// steps appear here with `success = false`, never dropped.
  pub step_results: HashMap<String, TaskResult>,
  pub summary: WorkflowSummary,
  pub recommendations: Vec<String>,
  pub timestamp: DateTime<Utc>,
}
