#![deny(missing_docs, unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

//! # stitch
//!
//! A static site builder for include-based HTML templates.
//!
//! Every template under the source root that does not start with `_` is a
//! page. Its includes are inlined, its stylesheets and scripts are
//! fingerprinted, and it is written to the output directory under the same
//! relative path with an `.html` extension.
//!
//! ## Core Pieces
//!
//! - [`arrange`]: turns a source path into its output name
//! - [`discover_entries`]: finds the page templates
//! - [`resolve_include`] and [`IncludePathKind`]: locate included fragments
//! - [`BuildPlan`] and [`PlanExecutor`]: plan and run a build
//! - [`Error`] and [`Result`]: Error handling types
//! - [`Logger`] and [`LogLevel`]: Logging infrastructure
//!
//! ## Examples
//!
//! ```
//! use stitch::{arrange, IncludePathKind};
//!
//! assert_eq!(arrange("./src/blog/post.ejs").unwrap(), "./blog/post");
//! assert_eq!(IncludePathKind::classify("/shared/nav.ejs"), IncludePathKind::RootRelative);
//! ```

pub mod assets;
pub mod config;
pub mod discovery;
pub mod error;
pub mod include;
pub mod logging;
pub mod operations;
pub mod path;
pub mod template;

// Re-export key types at crate root for convenience
pub use config::{Config, ConfigBuilder, SiteSettings};
pub use discovery::{discover_entries, discover_site_entries, Entry};
pub use error::{Error, Result};
pub use include::{resolve_include, IncludePathKind, ResolvedInclude};
pub use logging::{init_logger, LogLevel, Logger};
pub use operations::{BuildPlan, ExecutionResult, OperationPlan, PlanAction, PlanExecutor};
pub use path::{arrange, arrange_with_root, PathRelationship};
