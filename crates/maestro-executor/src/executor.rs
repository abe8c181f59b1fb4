//! The executor capability contract.

use std::collections::HashMap;
use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::result::TaskResult;

/// Per-execution context handed to an executor: the caller-supplied
/// values plus one `"<step_id>_result"` entry per completed dependency.
///
/// Each invocation receives its own snapshot; executors never observe
/// writes made for other steps.
pub type Context = HashMap<String, serde_json::Value>;

/// Professional domain an executor belongs to.
///
/// Used for registry grouping and reporting only — never by the
/// scheduling algorithm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
  WhiteCollar,
  BlueCollar,
  Healthcare,
  Creative,
}

impl Domain {
  pub fn as_str(&self) -> &'static str {
    match self {
      Domain::WhiteCollar => "white_collar",
      Domain::BlueCollar => "blue_collar",
      Domain::Healthcare => "healthcare",
      Domain::Creative => "creative",
    }
  }
}

impl fmt::Display for Domain {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.as_str())
  }
}

/// A polymorphic unit of work, identified by name.
///
/// `execute` is total: it must never escape with an error or a panic for
/// expected failure paths. Internal faults are caught and encoded as a
/// failed [`TaskResult`] with `error_kind` metadata and zero confidence.
#[async_trait]
pub trait Executor: Send + Sync {
  /// Unique name the registry keys this executor by.
  fn name(&self) -> &str;

  /// The domain this executor belongs to.
  fn domain(&self) -> Domain;

  /// Run a task description against the given context snapshot.
  async fn execute(&self, task: &str, context: &Context) -> TaskResult;
}
