//! Site builds using the plan-execute pattern.
//!
//! Building is split into two phases:
//! 1. **Planning**: discover the entries and list the actions
//! 2. **Execution**: render pages, write assets, copy the public folder
//!
//! Keeping them apart gives dry runs for free and lets tests inspect what a
//! build would do.
//!
//! # Examples
//!
//! ```no_run
//! use stitch::config::ConfigBuilder;
//! use stitch::operations::{BuildPlan, PlanExecutor};
//!
//! let settings = ConfigBuilder::new().build_settings().unwrap();
//! let plan = BuildPlan::new(&settings).build_plan().unwrap();
//! let result = PlanExecutor::new(&settings).execute(&plan).unwrap();
//! assert!(result.success);
//! ```

pub mod build;
pub mod executor;
pub mod plan;

pub use build::BuildPlan;
pub use executor::{ExecutionResult, PlanExecutor};
pub use plan::{OperationPlan, PlanAction};
