//! Command to show the output path derived from a source path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use stitch::path::DEFAULT_ROOT_SEGMENT;

/// Print the output path derived from a source path.
#[derive(Args)]
pub struct ArrangeCommand {
    /// Source path, e.g. ./src/blog/post.ejs
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Directory segment to remove
    #[arg(long, value_name = "SEGMENT", default_value = DEFAULT_ROOT_SEGMENT)]
    pub root_segment: String,
}

impl ArrangeCommand {
    /// Execute the arrange command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        if self.root_segment.is_empty() || self.root_segment.contains('/') {
            return Err(CliError::InvalidArguments(format!(
                "root segment must be a single directory name, got '{}'",
                self.root_segment
            )));
        }

        let arranged = stitch::arrange_with_root(&self.path, &self.root_segment)?;
        println!("{arranged}");
        Ok(())
    }
}
