//! Utility functions for CLI operations.
//!
//! This module provides common utility functions used across CLI commands,
//! including path resolution, settings loading, and output formatting.

use crate::error::CliError;
use std::path::{Path, PathBuf};
use stitch::logging::resolve_level;
use stitch::path::normalize::normalize;
use stitch::{Config, ConfigBuilder, LogLevel, SiteSettings};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone, Default)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Configuration file to use instead of discovering one.
    pub config: Option<PathBuf>,

    /// Override the source root.
    pub source_root: Option<PathBuf>,

    /// Override the output directory.
    pub output_dir: Option<PathBuf>,
}

impl GlobalOptions {
    /// Effective verbosity: the flags, then `STITCH_LOG_MODE`.
    #[must_use]
    pub fn log_level(&self) -> LogLevel {
        resolve_level(self.verbose, self.quiet)
    }

    /// Whether informational output should be printed.
    #[must_use]
    pub fn is_quiet(&self) -> bool {
        self.log_level() == LogLevel::Quiet
    }

    /// Whether per-file detail should be printed.
    #[must_use]
    pub fn is_verbose(&self) -> bool {
        self.log_level() == LogLevel::Verbose
    }
}

/// Normalize a path (make absolute, expand ~, etc.) without following symlinks.
pub fn normalize_path(path: &Path) -> Result<PathBuf, CliError> {
    normalize(path).map_err(CliError::from)
}

/// Load the site settings.
///
/// Settings are merged from multiple sources with precedence:
/// 1. `extra` (command-specific flags, highest priority)
/// 2. Global options
/// 3. Environment variables
/// 4. Configuration files
/// 5. Built-in defaults (lowest priority)
///
/// Paths given on the command line are taken relative to the current
/// directory, not the project root.
pub fn load_settings(global: &GlobalOptions, extra: Config) -> Result<SiteSettings, CliError> {
    let mut builder = ConfigBuilder::new();

    if let Some(ref file) = global.config {
        if !file.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "Configuration file not found: {}",
                file.display()
            )));
        }
        builder = builder.with_config_file(&normalize_path(file)?);
    }

    let flags = Config {
        source_root: global.source_root.as_deref().map(normalize_path).transpose()?,
        output_dir: global.output_dir.as_deref().map(normalize_path).transpose()?,
        ..Default::default()
    };

    builder
        .with_config(flags)
        .with_config(extra)
        .build_settings()
        .map_err(|e| CliError::Config(e.to_string()))
}

/// Format a timestamp for display.
pub fn format_timestamp(ts: std::time::SystemTime) -> String {
    use chrono::{DateTime, Local};
    let dt: DateTime<Local> = ts.into();
    dt.format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Shorten a path for display.
///
/// Paths under `base` are shown relative to it, paths within the home
/// directory as `~/...`, and anything else in full.
pub fn shorten_path(path: &Path, base: &Path) -> String {
    if let Ok(relative) = path.strip_prefix(base) {
        return relative.display().to_string();
    }
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_decide_log_level() {
        let verbose = GlobalOptions {
            verbose: true,
            ..Default::default()
        };
        assert!(verbose.is_verbose());
        assert!(!verbose.is_quiet());

        let quiet = GlobalOptions {
            quiet: true,
            ..Default::default()
        };
        assert!(quiet.is_quiet());
        assert_eq!(quiet.log_level(), LogLevel::Quiet);
    }

    #[test]
    fn test_shorten_path_prefers_base() {
        let base = Path::new("/site");
        assert_eq!(shorten_path(Path::new("/site/src/a.ejs"), base), "src/a.ejs");
    }

    #[test]
    fn test_shorten_path_home() {
        if let Some(home) = home::home_dir() {
            let path = home.join("site/src");
            assert_eq!(shorten_path(&path, Path::new("/nowhere")), "~/site/src");
        }
    }

    #[test]
    fn test_format_timestamp_shape() {
        let formatted = format_timestamp(std::time::SystemTime::UNIX_EPOCH);
        assert_eq!(formatted.len(), "1970-01-01 00:00:00".len());
    }
}
