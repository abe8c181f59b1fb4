//! Post-processing over completed step results.
//!
//! Purely derivational: no side effects, no mutation of inputs, and
//! deterministic for identical step results (extraction walks step ids
//! in sorted order).

use std::collections::{HashMap, HashSet};

use maestro_executor::TaskResult;
use serde::{Deserialize, Serialize};

const MAX_INSIGHTS: usize = 5;
const MAX_RISKS: usize = 5;
const MAX_RECOMMENDATIONS: usize = 8;
/// Domain-specific items taken from each step's payload.
const PER_STEP_ITEMS: usize = 2;

/// Cross-cutting advice merged ahead of the per-step recommendations.
const GENERAL_RECOMMENDATIONS: &[&str] = &[
  "Track cross-team hand-offs in a shared delivery plan",
  "Hold a cross-functional review before committing budgets",
  "Standardize reporting templates across workstreams",
];

/// Aggregated metrics and derived insights for a finished workflow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkflowSummary {
  pub total_steps: usize,
  pub successful_steps: usize,
  /// `successful_steps / total_steps`; 0.0 for an empty workflow.
  pub success_rate: f64,
  /// Mean confidence over all recorded results; 0.0 when empty.
  pub average_confidence: f64,
  pub key_insights: Vec<String>,
  pub risk_factors: Vec<String>,
}

/// Derives a [`WorkflowSummary`] and merged recommendations from a
/// finished run's step results.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultAggregator;

impl ResultAggregator {
  pub fn new() -> Self {
    Self
  }

  /// Build the summary block: rates, mean confidence, and notable
  /// fields extracted from successful payloads.
  pub fn summarize(&self, step_results: &HashMap<String, TaskResult>) -> WorkflowSummary {
    let total = step_results.len();
    let successful = step_results.values().filter(|r| r.success).count();

    let (success_rate, average_confidence) = if total == 0 {
      (0.0, 0.0)
    } else {
      let confidence_sum: f64 = step_results.values().map(|r| r.confidence).sum();
      (successful as f64 / total as f64, confidence_sum / total as f64)
    };

    let mut key_insights = Vec::new();
    let mut risk_factors = Vec::new();
    for (step_id, result) in sorted(step_results) {
      if !result.success {
        continue;
      }
      if let Some(confidence) = result.data.get("confidence").and_then(serde_json::Value::as_f64) {
        key_insights.push(format!("{step_id}: high-confidence analysis ({confidence:.2})"));
      }
      key_insights.extend(string_items(&result.data, "recommendations").take(PER_STEP_ITEMS));
      risk_factors.extend(string_items(&result.data, "risk_factors").take(PER_STEP_ITEMS));
    }
    key_insights.truncate(MAX_INSIGHTS);
    risk_factors.truncate(MAX_RISKS);

    WorkflowSummary {
      total_steps: total,
      successful_steps: successful,
      success_rate,
      average_confidence,
      key_insights,
      risk_factors,
    }
  }

  /// Merge the cross-cutting advice with up to two domain-specific
  /// items per successful step, deduplicated by first appearance.
  pub fn recommendations(&self, step_results: &HashMap<String, TaskResult>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut merged = Vec::new();

    let general = GENERAL_RECOMMENDATIONS.iter().map(|s| s.to_string());
    let domain_specific = sorted(step_results)
      .into_iter()
      .filter(|(_, result)| result.success)
      .flat_map(|(_, result)| {
        string_items(&result.data, "recommendations")
          .take(PER_STEP_ITEMS)
          .collect::<Vec<_>>()
      });

    for recommendation in general.chain(domain_specific) {
      if seen.insert(recommendation.clone()) {
        merged.push(recommendation);
      }
      if merged.len() == MAX_RECOMMENDATIONS {
        break;
      }
    }

    merged
  }
}

/// Step results in sorted-id order, for deterministic extraction.
fn sorted(step_results: &HashMap<String, TaskResult>) -> Vec<(&str, &TaskResult)> {
  let mut entries: Vec<(&str, &TaskResult)> = step_results
    .iter()
    .map(|(id, result)| (id.as_str(), result))
    .collect();
  entries.sort_by_key(|(id, _)| *id);
  entries
}

/// String entries of an array field in a result payload.
fn string_items<'a>(
  data: &'a serde_json::Value,
  key: &str,
) -> impl Iterator<Item = String> + 'a {
  data
    .get(key)
    .and_then(serde_json::Value::as_array)
    .into_iter()
    .flatten()
    .filter_map(serde_json::Value::as_str)
    .map(String::from)
}
