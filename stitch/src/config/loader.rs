//! Configuration file discovery and loading.
//!
//! A site is configured by `stitch.yaml` (shared) and optionally
//! `stitch.local.yaml` (private, higher precedence) in the project root.
//! The project root is found by walking up from the working directory to
//! the first directory containing either file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Shared project configuration file name.
pub const PROJECT_CONFIG_FILE: &str = "stitch.yaml";
/// Private project configuration file name.
pub const LOCAL_CONFIG_FILE: &str = "stitch.local.yaml";

/// Configuration source with its precedence level.
///
/// Lower precedence values are overridden by higher ones.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Precedence level (higher values take priority).
    pub precedence: u8,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration from files.
///
/// # Examples
///
/// ```no_run
/// use stitch::config::ConfigLoader;
/// use std::path::Path;
///
/// if let Some((root, sources)) = ConfigLoader::discover(Path::new(".")).unwrap() {
///     println!("project root {} with {} config files", root.display(), sources.len());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Walk up from `start_dir` to the first directory holding a project
    /// config file.
    ///
    /// Returns that directory and its sources sorted by precedence, or
    /// `None` if no directory up to the filesystem root has one.
    ///
    /// # Errors
    ///
    /// Returns an error if a discovered file cannot be read or parsed.
    pub fn discover(start_dir: &Path) -> Result<Option<(PathBuf, Vec<ConfigSource>)>> {
        let mut current = start_dir.to_path_buf();

        loop {
            let sources = Self::load_dir(&current)?;
            if !sources.is_empty() {
                return Ok(Some((current, sources)));
            }
            if !current.pop() {
                return Ok(None);
            }
        }
    }

    /// Load `stitch.yaml` and `stitch.local.yaml` from a single directory.
    ///
    /// # Errors
    ///
    /// Returns an error if either file exists but cannot be read or parsed.
    pub fn load_dir(dir: &Path) -> Result<Vec<ConfigSource>> {
        let mut sources = Vec::new();

        for (name, precedence) in [(PROJECT_CONFIG_FILE, 1), (LOCAL_CONFIG_FILE, 2)] {
            let path = dir.join(name);
            if path.is_file() {
                let config = Self::load_file(&path)?;
                sources.push(ConfigSource {
                    path,
                    precedence,
                    config,
                });
            }
        }

        Ok(sources)
    }

    /// Load and parse a YAML configuration file.
    ///
    /// An empty file is an empty configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        if contents.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: format!("{}", path.display()),
            message: format!("Invalid YAML: {e}"),
        })
    }
}
