//! Build command implementation.

use crate::error::CliError;
use crate::utils::{format_timestamp, load_settings, GlobalOptions};
use clap::Args;
use std::time::SystemTime;
use stitch::{BuildPlan, Config, PlanExecutor};

/// Build the site into the output directory.
#[derive(Args)]
pub struct BuildCommand {
    /// Show what would be done without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Keep existing files in the output directory
    #[arg(long)]
    pub no_clean: bool,

    /// Write pages without minifying them
    #[arg(long)]
    pub no_minify: bool,
}

impl BuildCommand {
    /// Execute the build command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Load settings, letting the flags override everything else
        let overrides = Config {
            clean: self.no_clean.then_some(false),
            minify: self.no_minify.then_some(false),
            ..Default::default()
        };
        let settings = load_settings(global, overrides)?;

        // 2. Plan
        let plan = BuildPlan::new(&settings).build_plan()?;

        // 3. Execute (or preview)
        let mut executor = PlanExecutor::new(&settings);
        if self.dry_run {
            executor = executor.dry_run();
        }
        let result = executor.execute(&plan)?;

        // 4. Report
        let quiet = global.is_quiet();
        if !quiet {
            for warning in &result.warnings {
                eprintln!("Warning: {warning}");
            }
        }

        if result.dry_run {
            println!("Dry run: {}", plan.description);
            for action in &result.actions_taken {
                println!("  {action}");
            }
            return Ok(());
        }

        if global.is_verbose() {
            for page in &result.pages {
                eprintln!("Wrote {}", page.display());
            }
            for asset in &result.assets {
                eprintln!("Wrote {}", asset.display());
            }
        }

        if !quiet {
            println!(
                "Built {} page(s), {} asset(s), {} public file(s) into {} at {}",
                result.pages.len(),
                result.assets.len(),
                result.copied_files,
                settings.output_dir.display(),
                format_timestamp(SystemTime::now())
            );
        }

        Ok(())
    }
}
