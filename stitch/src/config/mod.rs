//! Configuration system for stitch.
//!
//! This module provides hierarchical configuration with support for:
//! - YAML project files (`stitch.yaml`, `stitch.local.yaml`)
//! - Environment variable overrides (`STITCH_*`)
//! - Programmatic configuration via builder pattern
//! - Validation of every layer
//!
//! # Configuration Precedence
//!
//! Highest to lowest:
//!
//! 1. Programmatic overrides (via `ConfigBuilder::with_config`)
//! 2. Environment variables (`STITCH_*`)
//! 3. Private project config (`stitch.local.yaml`)
//! 4. Project config (`stitch.yaml`, or the file given to
//!    `ConfigBuilder::with_config_file`)
//! 5. Built-in defaults
//!
//! # Examples
//!
//! ```no_run
//! use stitch::config::ConfigBuilder;
//!
//! let settings = ConfigBuilder::new().build_settings().unwrap();
//! println!("{} -> {}", settings.source_root.display(), settings.output_dir.display());
//! ```

pub mod builder;
pub mod environment;
pub mod loader;
pub mod merger;
pub mod schema;
pub mod validator;

#[cfg(all(test, feature = "property-tests"))]
mod proptests;

pub use builder::ConfigBuilder;
pub use environment::EnvironmentConfig;
pub use loader::{ConfigLoader, ConfigSource, LOCAL_CONFIG_FILE, PROJECT_CONFIG_FILE};
pub use merger::ConfigMerger;
pub use schema::{Config, SiteSettings};
pub use validator::ConfigValidator;
