//! Plan types for site builds.
//!
//! A plan lists what a build will do without doing any of it, so it can be
//! shown to the user, checked in tests, or handed to
//! [`PlanExecutor`](super::PlanExecutor).

use std::path::PathBuf;

use crate::discovery::Entry;

/// A single step of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlanAction {
    /// Remove everything under the output directory.
    CleanOutput(PathBuf),

    /// Render one entry template to its output page.
    RenderPage(Entry),

    /// Copy the public folder into the output directory, recursively.
    CopyPublic {
        /// The public folder.
        from: PathBuf,
        /// Its destination inside the output directory.
        to: PathBuf,
    },
}

impl PlanAction {
    /// Returns a human-readable description of this action.
    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::CleanOutput(dir) => format!("Clean output directory {}", dir.display()),
            Self::RenderPage(entry) => format!(
                "Render {} to {}.html",
                entry.template.display(),
                entry.output
            ),
            Self::CopyPublic { from, to } => {
                format!("Copy {} to {}", from.display(), to.display())
            }
        }
    }
}

/// A complete build plan.
///
/// Plans carry a description, the ordered actions, and any warnings found
/// while planning.
#[derive(Debug, Clone)]
pub struct OperationPlan {
    /// A human-readable description of the operation.
    pub description: String,

    /// The sequence of actions to perform.
    pub actions: Vec<PlanAction>,

    /// Warnings to communicate to the user.
    pub warnings: Vec<String>,
}

impl OperationPlan {
    /// Creates a new operation plan with the given description.
    ///
    /// # Examples
    ///
    /// ```
    /// use stitch::operations::OperationPlan;
    ///
    /// let plan = OperationPlan::new("Build site");
    /// assert_eq!(plan.description, "Build site");
    /// assert!(plan.is_empty());
    /// ```
    #[must_use]
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            actions: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an action to the plan.
    ///
    /// # Examples
    ///
    /// ```
    /// use stitch::operations::{OperationPlan, PlanAction};
    /// use std::path::PathBuf;
    ///
    /// let plan = OperationPlan::new("Build site")
    ///     .add_action(PlanAction::CleanOutput(PathBuf::from("/site/dist")));
    ///
    /// assert_eq!(plan.actions.len(), 1);
    /// ```
    #[must_use]
    pub fn add_action(mut self, action: PlanAction) -> Self {
        self.actions.push(action);
        self
    }

    /// Adds a warning to the plan.
    #[must_use]
    pub fn add_warning(mut self, warning: impl Into<String>) -> Self {
        self.warnings.push(warning.into());
        self
    }

    /// Checks if the plan has no actions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Returns the number of actions in the plan.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Entries the plan will render, in order.
    pub fn pages(&self) -> impl Iterator<Item = &Entry> {
        self.actions.iter().filter_map(|action| match action {
            PlanAction::RenderPage(entry) => Some(entry),
            _ => None,
        })
    }
}
