//! Command to show where an include directive points.

use crate::error::CliError;
use crate::utils::{load_settings, normalize_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use stitch::template::IncludeExpander;
use stitch::{resolve_include, Config, IncludePathKind};

/// Print the file an include directive resolves to.
#[derive(Args)]
pub struct ResolveCommand {
    /// The include path exactly as written in the template
    #[arg(value_name = "ORIGINAL", allow_hyphen_values = true)]
    pub original: String,

    /// The template containing the directive (default: a template at the source root)
    #[arg(long, value_name = "INCLUDING_FILE")]
    pub from: Option<PathBuf>,
}

impl ResolveCommand {
    /// Execute the resolve command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let settings = load_settings(global, Config::default())?;

        let dir = match self.from {
            Some(ref file) => {
                let file = normalize_path(file)?;
                file.parent().map_or_else(|| file.clone(), PathBuf::from)
            }
            None => settings.source_root.clone(),
        };

        let kind = IncludePathKind::classify(&self.original);
        let candidate = match kind {
            IncludePathKind::Relative => {
                IncludeExpander::new(&settings.source_root, &settings.template_extension)
                    .parsed_candidate(&self.original, &dir)?
            }
            _ => PathBuf::from(&self.original),
        };
        let resolved = resolve_include(&self.original, &candidate, &settings.source_root)?;

        if global.is_verbose() {
            eprintln!("{kind:?} include, candidate {}", candidate.display());
        }
        println!("{}", resolved.filename.display());
        Ok(())
    }
}
