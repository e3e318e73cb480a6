//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    ArrangeCommand, BuildCommand, CompletionsCommand, EntriesCommand, ResolveCommand,
    ValidateCommand,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Command-line tool for building a static site from include-based templates.
#[derive(Parser)]
#[command(name = "stitch")]
#[command(version, about = "Build a static site from templates", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Use this configuration file instead of discovering stitch.yaml
    #[arg(long, value_name = "PATH", global = true, env = "STITCH_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the source root
    #[arg(long, value_name = "PATH", global = true, env = "STITCH_SOURCE_ROOT")]
    pub source_root: Option<PathBuf>,

    /// Override the output directory
    #[arg(long, value_name = "PATH", global = true, env = "STITCH_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Build the site into the output directory
    Build(BuildCommand),

    /// List the entry templates and their output files
    Entries(EntriesCommand),

    /// Print the output path derived from a source path
    Arrange(ArrangeCommand),

    /// Print the file an include directive resolves to
    Resolve(ResolveCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
