use std::collections::BTreeMap;
use std::collections::HashMap;
use std::sync::Arc;

use maestro_executor::{Domain, Executor};
use tracing::warn;

/// Lookup table from name to executor.
///
/// Registration is last-write-wins: re-registering a name replaces the
/// previous executor (logged, not an error). Absence on lookup is not an
/// error at this layer — the orchestrator decides how to treat a step
/// whose executor is missing.
#[derive(Default)]
pub struct ExecutorRegistry {
  executors: HashMap<String, Arc<dyn Executor>>,
  /// Registration order, for deterministic listing.
  order: Vec<String>,
}

impl ExecutorRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Register an executor under its own name.
  pub fn register(&mut self, executor: Arc<dyn Executor>) {
    let name = executor.name().to_string();
    if self.executors.insert(name.clone(), executor).is_some() {
      warn!(executor = %name, "replacing previously registered executor");
    } else {
      self.order.push(name);
    }
  }

  /// Look up an executor by name.
  pub fn get(&self, name: &str) -> Option<Arc<dyn Executor>> {
    self.executors.get(name).cloned()
  }

  /// All executors belonging to a domain, in registration order.
  ///
  /// Introspection and reporting only — scheduling never consults this.
  pub fn list_by_domain(&self, domain: Domain) -> Vec<Arc<dyn Executor>> {
    self
      .order
      .iter()
      .filter_map(|name| self.executors.get(name))
      .filter(|executor| executor.domain() == domain)
      .cloned()
      .collect()
  }

  /// Map from domain to the names registered under it.
  pub fn domain_summary(&self) -> BTreeMap<String, Vec<String>> {
    let mut summary: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for name in &self.order {
      if let Some(executor) = self.executors.get(name) {
        summary
          .entry(executor.domain().to_string())
          .or_default()
          .push(name.clone());
      }
    }
    summary
  }

  pub fn len(&self) -> usize {
    self.executors.len()
  }

  pub fn is_empty(&self) -> bool {
    self.executors.is_empty()
  }
}
