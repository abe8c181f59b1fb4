//! Maestro Workflow
//!
//! Declarative workflow representation: named steps bound to executors
//! with prerequisite lists, grouped into definitions and addressed
//! through a catalog by workflow kind.
//!
//! A definition is plain data. [`WorkflowDefinition::validate`] checks
//! the invariants the orchestrator relies on — unique step ids, every
//! dependency resolvable within the definition, and an acyclic
//! dependency relation — so that execution can fail fast before any
//! step runs.

mod catalog;
mod definition;
mod error;
mod graph;
mod step;

pub use catalog::WorkflowCatalog;
pub use definition::WorkflowDefinition;
pub use error::DefinitionError;
pub use graph::Graph;
pub use step::WorkflowStep;
