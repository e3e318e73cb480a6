//! Command to validate a stitch configuration file.

use crate::error::CliError;
use crate::utils::{normalize_path, GlobalOptions};
use clap::Args;
use std::path::PathBuf;
use stitch::config::{ConfigLoader, ConfigValidator, SiteSettings};

/// Validate a stitch configuration file.
#[derive(Args)]
pub struct ValidateCommand {
    /// Configuration file to validate
    #[arg(value_name = "CONFIG_PATH")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    /// Execute the validate command.
    pub fn execute(self, _global: &GlobalOptions) -> Result<(), CliError> {
        // 1. Check file exists
        if !self.config_path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "File not found: {}",
                self.config_path.display()
            )));
        }

        // 2. Parse the file
        let config = match ConfigLoader::load_file(&self.config_path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Parse error: {e}");
                return Err(CliError::SemanticFailure(
                    "Configuration file is invalid".to_string(),
                ));
            }
        };

        // 3. Validate the fields, then the directories they resolve to
        let path = normalize_path(&self.config_path)?;
        let project_root = path.parent().map(PathBuf::from).unwrap_or_default();
        let checked = ConfigValidator::validate(&config)
            .and_then(|()| SiteSettings::resolve(&config, &project_root).map(|_| ()));

        match checked {
            Ok(()) => {
                println!("Configuration is valid");
                Ok(())
            }
            Err(e) => {
                eprintln!("Validation error: {e}");
                Err(CliError::SemanticFailure(
                    "Configuration validation failed".to_string(),
                ))
            }
        }
    }
}
