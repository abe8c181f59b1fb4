//! Task execution result.

use std::collections::HashMap;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata key for the classified task type.
pub const META_TASK_TYPE: &str = "task_type";
/// Metadata key for the executor name.
pub const META_EXECUTOR: &str = "executor";
/// Metadata key for the executor's domain.
pub const META_DOMAIN: &str = "domain";
/// Metadata key for the failure category of an unsuccessful result.
pub const META_ERROR_KIND: &str = "error_kind";

/// Result of a single executor invocation.
///
/// Produced exactly once per (step, executor) invocation and immutable
/// after creation. Downstream steps reference the `data` payload through
/// context enrichment; they never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskResult {
  /// Whether the invocation succeeded.
  pub success: bool,
  /// Structured output payload (arbitrary nested key/value data).
  pub data: serde_json::Value,
  /// Confidence score in `[0, 1]`.
  pub confidence: f64,
  /// Wall-clock time the invocation took.
  pub execution_time: Duration,
  /// String metadata; carries at least the task type and executor name,
  /// and `error_kind` on failures.
  pub metadata: HashMap<String, String>,
  /// When the result was produced.
  pub timestamp: DateTime<Utc>,
}

impl TaskResult {
  /// Create a successful result. Confidence is clamped to `[0, 1]`.
  pub fn success(data: serde_json::Value, confidence: f64, execution_time: Duration) -> Self {
    Self {
      success: true,
      data,
      confidence: confidence.clamp(0.0, 1.0),
      execution_time,
      metadata: HashMap::new(),
      timestamp: Utc::now(),
    }
  }

  /// Create the canonical failed result shape: `success = false`,
  /// `confidence = 0.0`, the failure category under `error_kind` and the
  /// message under the `error` field of the data payload.
  pub fn failure(error_kind: &str, message: impl Into<String>) -> Self {
    let message = message.into();
    let mut metadata = HashMap::new();
    metadata.insert(META_ERROR_KIND.to_string(), error_kind.to_string());

    Self {
      success: false,
      data: serde_json::json!({ "error": message }),
      confidence: 0.0,
      execution_time: Duration::ZERO,
      metadata,
      timestamp: Utc::now(),
    }
  }

  /// Attach a metadata entry.
  pub fn with_metadata(mut self, key: &str, value: impl Into<String>) -> Self {
    self.metadata.insert(key.to_string(), value.into());
    self
  }

  /// Set the measured execution time.
  pub fn with_execution_time(mut self, execution_time: Duration) -> Self {
    self.execution_time = execution_time;
    self
  }

  /// The failure category, if this is a failed result.
  pub fn error_kind(&self) -> Option<&str> {
    self.metadata.get(META_ERROR_KIND).map(String::as_str)
  }
}
