//! Main entry point for the stitch CLI.
//!
//! This is the command-line interface for the stitch site builder.
//! It provides commands for building and inspecting a site:
//! - `build`: Render every entry into the output directory
//! - `entries`: List the discovered entries
//! - `arrange`: Show the output path for a source path
//! - `resolve`: Show where an include directive points
//! - `validate`: Check a configuration file

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let _logger = stitch::init_logger(cli.verbose, cli.quiet);

    // Convert CLI args to GlobalOptions
    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
        source_root: cli.source_root,
        output_dir: cli.output_dir,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Build(cmd) => cmd.execute(&global),
        cli::Command::Entries(cmd) => cmd.execute(&global),
        cli::Command::Arrange(cmd) => cmd.execute(&global),
        cli::Command::Resolve(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
