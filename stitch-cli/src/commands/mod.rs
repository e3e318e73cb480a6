//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `build`: Render every entry into the output directory
//! - `entries`: List discovered entries
//! - `arrange`: Show the output path for a source path
//! - `resolve`: Show where an include directive points
//! - `validate`: Validate a configuration file
//! - `completions`: Generate shell completion scripts

pub mod arrange;
pub mod build;
pub mod completions;
pub mod entries;
pub mod resolve;
pub mod validate;

pub use arrange::ArrangeCommand;
pub use build::BuildCommand;
pub use completions::CompletionsCommand;
pub use entries::EntriesCommand;
pub use resolve::ResolveCommand;
pub use validate::ValidateCommand;
