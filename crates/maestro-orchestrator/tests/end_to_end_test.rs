//! End-to-end test driving the orchestrator with the real domain agents.

use std::sync::Arc;

use maestro_agents::{
  ConstructionCoordinator, MarketingStrategist, MedicalResearchAssistant, RealEstateAnalyst,
};
use maestro_executor::Context;
use maestro_orchestrator::Orchestrator;
use maestro_registry::ExecutorRegistry;
use maestro_workflow::{WorkflowCatalog, WorkflowDefinition, WorkflowStep};
use serde_json::json;
use tokio_util::sync::CancellationToken;

fn agent_registry() -> Arc<ExecutorRegistry> {
  let mut registry = ExecutorRegistry::new();
  registry.register(Arc::new(RealEstateAnalyst::new()));
  registry.register(Arc::new(ConstructionCoordinator::new()));
  registry.register(Arc::new(MarketingStrategist::new()));
  registry.register(Arc::new(MedicalResearchAssistant::new()));
  Arc::new(registry)
}

fn real_estate_development() -> WorkflowDefinition {
  WorkflowDefinition::new(
    "real_estate_development",
    "Real Estate Development",
    vec![
      WorkflowStep::new(
        "market_analysis",
        "real_estate_analyst",
        "Analyze market conditions and property values for the development site",
      ),
      WorkflowStep::new(
        "construction_planning",
        "construction_coordinator",
        "Develop construction timeline and resource requirements",
      )
      .depends_on(["market_analysis"]),
      WorkflowStep::new(
        "marketing_strategy",
        "marketing_strategist",
        "Create marketing strategy for property sales and leasing",
      )
      .depends_on(["market_analysis"]),
    ],
  )
}

#[tokio::test]
async fn real_estate_development_runs_end_to_end() {
  let catalog: WorkflowCatalog = [real_estate_development()].into_iter().collect();
  let orchestrator = Orchestrator::new(agent_registry(), catalog);

  let mut context = Context::new();
  context.insert("location".to_string(), json!("Riverside District"));

  let result = orchestrator
    .execute_workflow("real_estate_development", context, CancellationToken::new())
    .await
    .expect("workflow should complete");

  assert!(result.success);
  assert_eq!(result.step_results.len(), 3);
  assert_eq!(result.summary.successful_steps, 3);
  assert!(result.summary.average_confidence > 0.7);

  // The analyst's payload flows downstream: the coordinator reports the
  // market analysis informed its plan.
  let planning = &result.step_results["construction_planning"];
  assert_eq!(planning.data["informed_by_market"], json!(true));

  // Aggregation mined the agents' payloads.
  assert!(!result.summary.key_insights.is_empty());
  assert!(!result.summary.risk_factors.is_empty());
  assert!(!result.recommendations.is_empty());
}

#[tokio::test]
async fn healthcare_facility_tolerates_a_missing_specialist() {
  // The facility workflow names a dietary consultant nobody registered;
  // the rest of the workflow still completes.
  let definition = WorkflowDefinition::new(
    "healthcare_facility",
    "Healthcare Facility",
    vec![
      WorkflowStep::new(
        "regulatory_compliance",
        "medical_research_assistant",
        "Review healthcare facility regulatory requirements",
      ),
      WorkflowStep::new(
        "facility_construction",
        "construction_coordinator",
        "Plan facility construction with clinical requirements",
      )
      .depends_on(["regulatory_compliance"]),
      WorkflowStep::new(
        "dietary_program",
        "dietary_consultant",
        "Design the patient dietary program",
      ),
    ],
  );

  let catalog: WorkflowCatalog = [definition].into_iter().collect();
  let orchestrator = Orchestrator::new(agent_registry(), catalog);

  let result = orchestrator
    .execute_workflow("healthcare_facility", Context::new(), CancellationToken::new())
    .await
    .unwrap();

  assert!(!result.success);
  assert_eq!(result.step_results.len(), 3);
  assert_eq!(
    result.step_results["dietary_program"].error_kind(),
    Some("executor_not_found")
  );
  assert!(result.step_results["regulatory_compliance"].success);
  assert!(result.step_results["facility_construction"].success);
}
