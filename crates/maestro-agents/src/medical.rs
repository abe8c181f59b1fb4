//! Medical research assistant agent.

use std::time::Instant;

use async_trait::async_trait;
use maestro_executor::{
  Context, Domain, Executor, META_DOMAIN, META_EXECUTOR, META_TASK_TYPE, PerformanceMetrics,
  ResultHistory, TaskResult,
};
use serde_json::json;

/// Regulatory review, literature synthesis, and clinical facility
/// requirements.
#[derive(Debug, Default)]
pub struct MedicalResearchAssistant {
  history: ResultHistory,
}

impl MedicalResearchAssistant {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn metrics(&self) -> PerformanceMetrics {
    self.history.metrics()
  }

  fn classify(task: &str) -> (&'static str, f64) {
    let task = task.to_lowercase();
    if task.contains("regulatory") || task.contains("regulation") || task.contains("compliance") {
      ("regulatory_review", 0.9)
    } else if task.contains("literature") || task.contains("study") || task.contains("evidence") {
      ("literature_synthesis", 0.85)
    } else if task.contains("facility") || task.contains("equipment") {
      ("facility_requirements", 0.8)
    } else {
      ("clinical_research", 0.75)
    }
  }

  fn research(&self, task_type: &str, confidence: f64, _context: &Context) -> serde_json::Value {
    match task_type {
      "regulatory_review" => json!({
        "confidence": confidence,
        "frameworks_reviewed": ["licensing", "privacy", "clinical waste handling"],
        "recommendations": [
          "Engage the licensing authority before schematic design",
          "Map privacy obligations onto the records workflow early",
        ],
        "risk_factors": ["Licensing backlog at the regional authority"],
      }),
      "literature_synthesis" => json!({
        "confidence": confidence,
        "sources_screened": 42,
        "recommendations": ["Weight randomized trials over observational studies"],
        "risk_factors": ["Publication bias in the screened corpus"],
      }),
      "facility_requirements" => json!({
        "confidence": confidence,
        "clinical_zones": ["outpatient", "diagnostics", "sterile services"],
        "recommendations": [
          "Size diagnostics for ten-year demand projections",
          "Separate clinical and public circulation routes",
        ],
        "risk_factors": ["Specialist equipment lead times beyond 9 months"],
      }),
      _ => json!({
        "confidence": confidence,
        "recommendations": ["Define the research question before data collection"],
        "risk_factors": ["Underpowered sample sizes"],
      }),
    }
  }
}

#[async_trait]
impl Executor for MedicalResearchAssistant {
  fn name(&self) -> &str {
    "medical_research_assistant"
  }

  fn domain(&self) -> Domain {
    Domain::Healthcare
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
    let data = self.research(task_type, confidence, context);

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
  async fn regulatory_tasks_classified_with_high_confidence() {
    let agent = MedicalResearchAssistant::new();
    let result = agent
      .execute("Review healthcare facility regulatory requirements", &Context::new())
      .await;

    assert!(result.success);
    assert_eq!(result.metadata[META_TASK_TYPE], "regulatory_review");
    assert_eq!(result.confidence, 0.9);
    assert_eq!(result.metadata[META_DOMAIN], "healthcare");
  }
}
