//! Plan execution engine.
//!
//! This module implements the executor that takes build plans and writes
//! the site to disk.

use std::fs;
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use crate::assets::AssetPipeline;
use crate::config::SiteSettings;
use crate::discovery::Entry;
use crate::error::{Error, Result};
use crate::template::{collect_styles, minify_html, IncludeExpander};

use super::plan::{OperationPlan, PlanAction};

/// Result of executing a plan.
///
/// This struct provides information about what happened during execution,
/// including whether it was a dry run and what was written.
#[derive(Debug, Clone, Default)]
pub struct ExecutionResult {
    /// Whether the execution was successful.
    pub success: bool,

    /// Whether this was a dry-run (no actual changes made).
    pub dry_run: bool,

    /// Descriptions of actions that were taken (or would be taken in dry-run).
    pub actions_taken: Vec<String>,

    /// Warnings from the plan and from rendering.
    pub warnings: Vec<String>,

    /// Pages written.
    pub pages: Vec<PathBuf>,

    /// Fingerprinted assets written.
    pub assets: Vec<PathBuf>,

    /// Number of files copied from the public folder.
    pub copied_files: usize,
}

impl ExecutionResult {
    fn from_plan(plan: &OperationPlan, dry_run: bool) -> Self {
        Self {
            success: false,
            dry_run,
            actions_taken: plan.actions.iter().map(PlanAction::description).collect(),
            warnings: plan.warnings.clone(),
            ..Self::default()
        }
    }
}

/// Executes build plans.
///
/// The executor can run in normal mode (writing the site) or dry-run mode
/// (reporting what would happen without touching the filesystem).
///
/// # Examples
///
/// ```no_run
/// use stitch::config::ConfigBuilder;
/// use stitch::operations::{BuildPlan, PlanExecutor};
///
/// let settings = ConfigBuilder::new().build_settings().unwrap();
/// let plan = BuildPlan::new(&settings).build_plan().unwrap();
///
/// let preview = PlanExecutor::new(&settings).dry_run().execute(&plan).unwrap();
/// assert!(preview.dry_run);
///
/// let result = PlanExecutor::new(&settings).execute(&plan).unwrap();
/// println!("{} pages written", result.pages.len());
/// ```
pub struct PlanExecutor<'a> {
    settings: &'a SiteSettings,
    dry_run: bool,
}

impl<'a> PlanExecutor<'a> {
    /// Creates a new plan executor.
    #[must_use]
    pub const fn new(settings: &'a SiteSettings) -> Self {
        Self {
            settings,
            dry_run: false,
        }
    }

    /// Sets the executor to dry-run mode.
    #[must_use]
    pub const fn dry_run(mut self) -> Self {
        self.dry_run = true;
        self
    }

    /// Executes the given plan.
    ///
    /// Pages are rendered in plan order. Fingerprinted assets are written
    /// once every page has been rendered.
    ///
    /// # Errors
    ///
    /// Returns the first error any action hits. Nothing after it runs.
    pub fn execute(&mut self, plan: &OperationPlan) -> Result<ExecutionResult> {
        let mut result = ExecutionResult::from_plan(plan, self.dry_run);
        if self.dry_run {
            result.success = true;
            return Ok(result);
        }

        let settings = self.settings;
        let mut pipeline = AssetPipeline::new(&settings.source_root, settings.hash_length);

        for action in &plan.actions {
            match action {
                PlanAction::CleanOutput(dir) => Self::clean(dir)?,
                PlanAction::RenderPage(entry) => {
                    let page = self.render_page(entry, &mut pipeline, &mut result.warnings)?;
                    result.pages.push(page);
                }
                PlanAction::CopyPublic { from, to } => {
                    result.copied_files += Self::copy_tree(from, to)?;
                }
            }
        }

        for asset in pipeline.finish() {
            let path = settings.output_dir.join(&asset.file_name);
            write_file(&path, &asset.contents)?;
            log::debug!("wrote asset {} from {}", path.display(), asset.source.display());
            result.assets.push(path);
        }

        result.success = true;
        Ok(result)
    }

    fn clean(dir: &Path) -> Result<()> {
        if dir.exists() {
            log::debug!("removing {}", dir.display());
            fs::remove_dir_all(dir)?;
        }
        fs::create_dir_all(dir)?;
        Ok(())
    }

    fn render_page(
        &self,
        entry: &Entry,
        pipeline: &mut AssetPipeline<'_>,
        warnings: &mut Vec<String>,
    ) -> Result<PathBuf> {
        let settings = self.settings;
        let expander = IncludeExpander::new(&settings.source_root, &settings.template_extension)
            .with_max_depth(settings.max_include_depth);
        let expanded = expander.expand_file(&entry.template)?;

        if expanded.passthrough_tags > 0 {
            let warning = format!(
                "{}: {} template tag(s) copied through unevaluated",
                entry.template.display(),
                expanded.passthrough_tags
            );
            log::debug!("{warning}");
            warnings.push(warning);
        }

        let mut html = expanded.text;
        if settings.collect_styles {
            html = collect_styles(&html);
        }
        html = pipeline.rewrite(&html, &entry.template, &entry.output)?;
        if settings.minify {
            html = minify_html(&html);
        }

        let page = entry.output_file(&settings.output_dir);
        write_file(&page, html.as_bytes())?;
        log::debug!(
            "wrote {} ({} fragment(s))",
            page.display(),
            expanded.fragments.len()
        );
        Ok(page)
    }

    /// Copy every file under `from` to the same relative place under `to`.
    fn copy_tree(from: &Path, to: &Path) -> Result<usize> {
        let mut copied = 0;
        for entry in WalkDir::new(from).follow_links(true) {
            let entry = entry?;
            let relative = entry
                .path()
                .strip_prefix(from)
                .map_err(|_| Error::InvalidPath {
                    path: entry.path().to_path_buf(),
                    reason: "Walked outside the public folder".to_string(),
                })?;
            let target = to.join(relative);

            if entry.file_type().is_dir() {
                fs::create_dir_all(&target)?;
            } else {
                if let Some(parent) = target.parent() {
                    fs::create_dir_all(parent)?;
                }
                fs::copy(entry.path(), &target)?;
                copied += 1;
            }
        }
        log::debug!("copied {copied} file(s) from {}", from.display());
        Ok(copied)
    }
}

fn write_file(path: &Path, contents: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    Ok(())
}
