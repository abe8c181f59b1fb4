use std::io::{self, Read};
use std::sync::Arc;
use std::time::Duration;

use anyhow::{Context as _, Result};
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

use maestro_agents::{
  ConstructionCoordinator, MarketingStrategist, MedicalResearchAssistant, RealEstateAnalyst,
};
use maestro_executor::Context;
use maestro_orchestrator::{Orchestrator, OrchestratorConfig};
use maestro_registry::ExecutorRegistry;
use maestro_workflow::{WorkflowCatalog, WorkflowDefinition, WorkflowStep};

/// Maestro - a dependency-aware multi-step task orchestrator
#[derive(Parser)]
#[command(name = "maestro")]
#[command(version, about, long_about = None)]
struct Cli {
  #[command(subcommand)]
  command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
  /// Execute a workflow by kind
  Run {
    /// The workflow kind to execute (see `maestro list`)
    kind: String,

    /// Per-step timeout in milliseconds
    #[arg(long)]
    step_timeout_ms: Option<u64>,
  },

  /// List available workflow kinds and registered executors
  List,
}

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::from_default_env())
    .with_writer(io::stderr)
    .init();

  let cli = Cli::parse();

  match cli.command {
    Some(Commands::Run {
      kind,
      step_timeout_ms,
    }) => {
      run_workflow(kind, step_timeout_ms)?;
    }
    Some(Commands::List) => {
      list()?;
    }
    None => {
      println!("maestro - use --help to see available commands");
    }
  }

  Ok(())
}

fn run_workflow(kind: String, step_timeout_ms: Option<u64>) -> Result<()> {
  let rt = tokio::runtime::Runtime::new()?;
  rt.block_on(async { run_workflow_async(kind, step_timeout_ms).await })
}

async fn run_workflow_async(kind: String, step_timeout_ms: Option<u64>) -> Result<()> {
  let initial_context = read_context_from_stdin()?;

  let config = OrchestratorConfig {
    step_timeout: step_timeout_ms.map(Duration::from_millis),
  };
  let orchestrator = Orchestrator::with_config(builtin_registry(), builtin_catalog(), config);

  let result = orchestrator
    .execute_workflow(&kind, initial_context, CancellationToken::new())
    .await
    .with_context(|| format!("workflow '{}' failed", kind))?;

  eprintln!(
    "Execution {} finished: {}/{} steps succeeded",
    result.execution_id, result.summary.successful_steps, result.summary.total_steps
  );

  println!("{}", serde_json::to_string_pretty(&result)?);

  Ok(())
}

fn list() -> Result<()> {
  let catalog = builtin_catalog();
  let registry = builtin_registry();

  let listing = serde_json::json!({
    "workflows": catalog.kinds(),
    "executors": registry.domain_summary(),
  });
  println!("{}", serde_json::to_string_pretty(&listing)?);

  Ok(())
}

/// Read the initial context JSON from stdin; an interactive terminal
/// gets an empty context.
fn read_context_from_stdin() -> Result<Context> {
  use std::io::IsTerminal;

  if io::stdin().is_terminal() {
    return Ok(Context::new());
  }

  let mut input = String::new();
  io::stdin()
    .read_to_string(&mut input)
    .context("failed to read context from stdin")?;

  if input.trim().is_empty() {
    return Ok(Context::new());
  }

  serde_json::from_str(&input).context("failed to parse context JSON from stdin")
}

/// The executors shipped with the demo bootstrap.
fn builtin_registry() -> Arc<ExecutorRegistry> {
  let mut registry = ExecutorRegistry::new();
  registry.register(Arc::new(RealEstateAnalyst::new()));
  registry.register(Arc::new(ConstructionCoordinator::new()));
  registry.register(Arc::new(MarketingStrategist::new()));
  registry.register(Arc::new(MedicalResearchAssistant::new()));
  Arc::new(registry)
}

/// Built-in workflow definitions, keyed by kind.
fn builtin_catalog() -> WorkflowCatalog {
  [
    real_estate_development(),
    healthcare_facility(),
    business_expansion(),
  ]
  .into_iter()
  .collect()
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
      )
      .with_expected_duration_ms(30 * 60_000),
      WorkflowStep::new(
        "construction_planning",
        "construction_coordinator",
        "Develop construction timeline and resource requirements",
      )
      .depends_on(["market_analysis"])
      .with_expected_duration_ms(45 * 60_000),
      WorkflowStep::new(
        "marketing_strategy",
        "marketing_strategist",
        "Create marketing strategy for property sales and leasing",
      )
      .depends_on(["market_analysis"])
      .with_expected_duration_ms(35 * 60_000),
    ],
  )
}

fn healthcare_facility() -> WorkflowDefinition {
  WorkflowDefinition::new(
    "healthcare_facility",
    "Healthcare Facility",
    vec![
      WorkflowStep::new(
        "regulatory_compliance",
        "medical_research_assistant",
        "Review healthcare facility regulatory requirements",
      )
      .with_expected_duration_ms(40 * 60_000),
      WorkflowStep::new(
        "facility_construction",
        "construction_coordinator",
        "Plan healthcare facility construction with clinical requirements",
      )
      .depends_on(["regulatory_compliance"])
      .with_expected_duration_ms(50 * 60_000),
      WorkflowStep::new(
        "real_estate_evaluation",
        "real_estate_analyst",
        "Evaluate real estate options for the healthcare facility",
      )
      .with_expected_duration_ms(25 * 60_000),
      WorkflowStep::new(
        "marketing_outreach",
        "marketing_strategist",
        "Develop patient acquisition and community outreach strategy",
      )
      .depends_on(["regulatory_compliance"])
      .with_expected_duration_ms(30 * 60_000),
    ],
  )
}

fn business_expansion() -> WorkflowDefinition {
  WorkflowDefinition::new(
    "business_expansion",
    "Business Expansion",
    vec![
      WorkflowStep::new(
        "market_research",
        "marketing_strategist",
        "Research target markets and competitive landscape",
      )
      .with_expected_duration_ms(40 * 60_000),
      WorkflowStep::new(
        "location_analysis",
        "real_estate_analyst",
        "Analyze potential business locations and real estate costs",
      )
      .depends_on(["market_research"])
      .with_expected_duration_ms(35 * 60_000),
      WorkflowStep::new(
        "facility_planning",
        "construction_coordinator",
        "Plan facility modifications and construction requirements",
      )
      .depends_on(["location_analysis"])
      .with_expected_duration_ms(30 * 60_000),
    ],
  )
}
