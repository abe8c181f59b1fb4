//! Maestro Agents
//!
//! Concrete domain executors driven by the orchestrator. Each agent
//! classifies its task description by keyword, produces a structured
//! analysis payload (with `confidence`, `recommendations`, and
//! `risk_factors` fields the aggregator knows how to mine), and keeps
//! its own result history for metrics.
//!
//! All agents honor the total executor contract: internal failures are
//! encoded as a failed task result, never surfaced as an error or a
//! panic.

mod construction;
mod marketing;
mod medical;
mod real_estate;

pub use construction::ConstructionCoordinator;
pub use marketing::MarketingStrategist;
pub use medical::MedicalResearchAssistant;
pub use real_estate::RealEstateAnalyst;
