//! Real estate analysis agent.

use std::time::Instant;

use async_trait::async_trait;
use maestro_executor::{
  Context, Domain, Executor, META_DOMAIN, META_EXECUTOR, META_TASK_TYPE, PerformanceMetrics,
  ResultHistory, TaskResult,
};
use serde_json::json;

/// Property valuation, market research, and investment analysis.
#[derive(Debug, Default)]
pub struct RealEstateAnalyst {
  history: ResultHistory,
}

impl RealEstateAnalyst {
  pub fn new() -> Self {
    Self::default()
  }

  /// Metrics over everything this agent has executed.
  pub fn metrics(&self) -> PerformanceMetrics {
    self.history.metrics()
  }

  /// Classify the task by keyword; the confidence mirrors how well the
  /// matched capability is understood.
  fn classify(task: &str) -> (&'static str, f64) {
    let task = task.to_lowercase();
    if task.contains("valuation") || task.contains("property value") {
      ("property_valuation", 0.85)
    } else if task.contains("roi") || task.contains("return on investment") {
      ("roi_calculation", 0.9)
    } else if task.contains("zoning") || task.contains("compliance") {
      ("zoning_compliance", 0.75)
    } else if task.contains("market") {
      ("market_analysis", 0.8)
    } else {
      ("general_analysis", 0.7)
    }
  }

  fn analyze(&self, task_type: &str, confidence: f64, context: &Context) -> serde_json::Value {
    let location = context
      .get("location")
      .and_then(serde_json::Value::as_str)
      .unwrap_or("target market");

    match task_type {
      "property_valuation" => json!({
        "confidence": confidence,
        "valuation_basis": "comparable sales within the last 12 months",
        "location": location,
        "recommendations": [
          "Commission an independent appraisal before closing",
          "Benchmark against at least five comparable sales",
        ],
        "risk_factors": ["Thin comparable-sales data in emerging submarkets"],
      }),
      "roi_calculation" => json!({
        "confidence": confidence,
        "cash_flow_horizon_months": 60,
        "recommendations": [
          "Stress-test the projection against a 2-point rate rise",
          "Hold a 6-month operating reserve",
        ],
        "risk_factors": ["Vacancy assumptions above market averages"],
      }),
      "zoning_compliance" => json!({
        "confidence": confidence,
        "location": location,
        "recommendations": ["File for pre-application review with the planning office"],
        "risk_factors": ["Pending rezoning petitions in adjacent parcels"],
      }),
      _ => json!({
        "confidence": confidence,
        "location": location,
        "trend": "stable demand, constrained supply",
        "recommendations": [
          "Prioritize sites with existing infrastructure access",
          "Re-run the analysis quarterly",
        ],
        "risk_factors": ["Interest-rate sensitivity of entry pricing"],
      }),
    }
  }
}

#[async_trait]
impl Executor for RealEstateAnalyst {
  fn name(&self) -> &str {
    "real_estate_analyst"
  }

  fn domain(&self) -> Domain {
    Domain::WhiteCollar
  }

  async fn execute(&self, task: &str, context: &Context) -> TaskResult {
    let started = Instant::now();

    if task.trim().is_empty() {
      let result = TaskResult::failure("invalid_task", "empty task description")
        .with_metadata(META_EXECUTOR, self.name())
        .with_execution_time(started.elapsed());
      self.history.record(&result);
      return result;
    }

    let (task_type, confidence) = Self::classify(task);
    let data = self.analyze(task_type, confidence, context);

    let result = TaskResult::success(data, confidence, started.elapsed())
      .with_metadata(META_TASK_TYPE, task_type)
      .with_metadata(META_EXECUTOR, self.name())
      .with_metadata(META_DOMAIN, self.domain().as_str());
    self.history.record(&result);
    result
  }
}
