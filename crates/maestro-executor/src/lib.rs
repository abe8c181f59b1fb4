//! Maestro Executor
//!
//! This crate defines the capability contract every unit of work must
//! satisfy to be driven by the orchestrator: the [`Executor`] trait, the
//! [`TaskResult`] it produces, and the [`ResultHistory`] executors keep
//! for their own metrics.
//!
//! The contract is total: `execute` always yields a [`TaskResult`].
//! Implementations catch their internal failures and encode them as a
//! failed result (`success = false`, `confidence = 0.0`, populated
//! `error_kind` metadata) instead of returning an error or panicking.

mod executor;
mod history;
mod result;

pub use executor::{Context, Domain, Executor};
pub use history::{PerformanceMetrics, ResultHistory};
pub use result::{
  META_DOMAIN, META_ERROR_KIND, META_EXECUTOR, META_TASK_TYPE, TaskResult,
};
