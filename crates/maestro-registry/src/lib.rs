//! Maestro Registry
//!
//! Lookup table from executor name to [`maestro_executor::Executor`]
//! implementation.
//! The registry is an explicit instance constructed at bootstrap and
//! handed to the orchestrator — there is no process-wide singleton.

mod registry;

pub use registry::ExecutorRegistry;
