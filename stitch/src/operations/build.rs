//! Build planning.

use crate::config::SiteSettings;
use crate::discovery::discover_site_entries;
use crate::error::{Error, Result};

use super::plan::{OperationPlan, PlanAction};

/// Name used for the public folder in the output when the configured
/// folder has no final component.
const PUBLIC_FALLBACK_NAME: &str = "public";

/// A build plan generator.
///
/// Discovers the site's entries and lays out the steps to produce it. The
/// filesystem is only read.
pub struct BuildPlan<'a> {
    settings: &'a SiteSettings,
}

impl<'a> BuildPlan<'a> {
    /// Creates a planner for `settings`.
    #[must_use]
    pub const fn new(settings: &'a SiteSettings) -> Self {
        Self { settings }
    }

    /// Builds the plan.
    ///
    /// Actions come in this order: clean the output (if enabled), render
    /// each entry, copy the public folder (if it exists).
    ///
    /// # Errors
    ///
    /// Returns [`Error::NotFound`] if the source root is not a directory, or
    /// the error entry discovery hits.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use stitch::config::ConfigBuilder;
    /// use stitch::operations::BuildPlan;
    ///
    /// let settings = ConfigBuilder::new().build_settings().unwrap();
    /// let plan = BuildPlan::new(&settings).build_plan().unwrap();
    /// for action in &plan.actions {
    ///     println!("{}", action.description());
    /// }
    /// ```
    pub fn build_plan(&self) -> Result<OperationPlan> {
        let settings = self.settings;
        if !settings.source_root.is_dir() {
            return Err(Error::NotFound {
                resource: format!("source root {}", settings.source_root.display()),
            });
        }

        let mut plan = OperationPlan::new(format!(
            "Build {} into {}",
            settings.source_root.display(),
            settings.output_dir.display()
        ));

        if settings.clean {
            plan = plan.add_action(PlanAction::CleanOutput(settings.output_dir.clone()));
        }

        let entries = discover_site_entries(settings)?;
        if entries.is_empty() {
            plan = plan.add_warning(format!(
                "No .{} entries found under {}",
                settings.template_extension,
                settings.source_root.display()
            ));
        }
        for entry in entries {
            plan = plan.add_action(PlanAction::RenderPage(entry));
        }

        if settings.public_dir.is_dir() {
            let name = settings
                .public_dir
                .file_name()
                .map_or_else(|| PUBLIC_FALLBACK_NAME.into(), ToOwned::to_owned);
            plan = plan.add_action(PlanAction::CopyPublic {
                from: settings.public_dir.clone(),
                to: settings.output_dir.join(name),
            });
        } else {
            plan = plan.add_warning(format!(
                "Public folder {} does not exist; nothing to copy",
                settings.public_dir.display()
            ));
        }

        log::debug!("{}: {} actions", plan.description, plan.len());
        Ok(plan)
    }
}
