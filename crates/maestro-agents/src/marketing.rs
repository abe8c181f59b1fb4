//! Marketing strategy agent.

use std::time::Instant;

use async_trait::async_trait;
use maestro_executor::{
  Context, Domain, Executor, META_DOMAIN, META_EXECUTOR, META_TASK_TYPE, PerformanceMetrics,
  ResultHistory, TaskResult,
};
use serde_json::json;

/// Market research, campaign strategy, and positioning.
#[derive(Debug, Default)]
pub struct MarketingStrategist {
  history: ResultHistory,
}

impl MarketingStrategist {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn metrics(&self) -> PerformanceMetrics {
    self.history.metrics()
  }

  fn classify(task: &str) -> (&'static str, f64) {
    let task = task.to_lowercase();
    if task.contains("research") || task.contains("competitive") {
      ("market_research", 0.85)
    } else if task.contains("campaign") || task.contains("outreach") {
      ("campaign_strategy", 0.8)
    } else if task.contains("brand") || task.contains("positioning") {
      ("brand_positioning", 0.75)
    } else {
      ("marketing_strategy", 0.7)
    }
  }

  fn strategize(&self, task_type: &str, confidence: f64, context: &Context) -> serde_json::Value {
    let audience = context
      .get("target_audience")
      .and_then(serde_json::Value::as_str)
      .unwrap_or("primary buyer segment");

    match task_type {
      "market_research" => json!({
        "confidence": confidence,
        "audience": audience,
        "segments_profiled": 3,
        "recommendations": [
          "Validate segment sizing with first-party survey data",
          "Shortlist two channels per segment before committing spend",
        ],
        "risk_factors": ["Competitor repositioning mid-campaign"],
      }),
      "campaign_strategy" => json!({
        "confidence": confidence,
        "audience": audience,
        "channels": ["local partnerships", "search", "community events"],
        "recommendations": [
          "Pilot the campaign in one district before scaling",
          "Set weekly cost-per-lead review gates",
        ],
        "risk_factors": ["Creative fatigue within eight weeks"],
      }),
      _ => json!({
        "confidence": confidence,
        "audience": audience,
        "recommendations": [
          "Anchor messaging on verified differentiators",
          "Refresh positioning after each market-research cycle",
        ],
        "risk_factors": ["Message dilution across channels"],
      }),
    }
  }
}

#[async_trait]
impl Executor for MarketingStrategist {
  fn name(&self) -> &str {
    "marketing_strategist"
  }

  fn domain(&self) -> Domain {
    Domain::Creative
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
    let data = self.strategize(task_type, confidence, context);

    let result = TaskResult::success(data, confidence, started.elapsed())
      .with_metadata(META_TASK_TYPE, task_type)
      .with_metadata(META_EXECUTOR, self.name())
      .with_metadata(META_DOMAIN, self.domain().as_str());
    self.history.record(&result);
    result
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[tokio::test]
  async fn research_tasks_classified() {
    let agent = MarketingStrategist::new();
    let result = agent
      .execute("Research target markets and competitive landscape", &Context::new())
      .await;

    assert!(result.success);
    assert_eq!(result.metadata[META_TASK_TYPE], "market_research");
  }

  #[tokio::test]
  async fn audience_defaults_without_context() {
    let agent = MarketingStrategist::new();
    let result = agent
      .execute("Create a campaign for the new facility", &Context::new())
      .await;
    assert_eq!(result.data["audience"], "primary buyer segment");
  }
}
