//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::{ConfigLoader, ConfigSource};
use crate::config::merger::ConfigMerger;
use crate::config::schema::{Config, SiteSettings};
use crate::config::validator::ConfigValidator;
use crate::error::{Error, Result};

/// Builds a [`Config`] (and from it, [`SiteSettings`]) from every layer.
///
/// # Examples
///
/// ```
/// use stitch::config::{Config, ConfigBuilder};
/// use std::path::{Path, PathBuf};
///
/// let settings = ConfigBuilder::new()
///     .skip_files()
///     .skip_env()
///     .with_working_dir(Path::new("/site"))
///     .with_config(Config {
///         output_dir: Some(PathBuf::from("public_html")),
///         ..Default::default()
///     })
///     .build_settings()
///     .unwrap();
///
/// assert_eq!(settings.output_dir, Path::new("/site/public_html"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigBuilder {
    working_dir: Option<PathBuf>,
    config_file: Option<PathBuf>,
    overrides: Vec<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// Create a builder using the current directory and all layers.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Directory to start config discovery from (default: current dir).
    #[must_use]
    pub fn with_working_dir(mut self, dir: &Path) -> Self {
        self.working_dir = Some(dir.to_path_buf());
        self
    }

    /// Use this file instead of discovering `stitch.yaml`; its directory
    /// becomes the project root.
    #[must_use]
    pub fn with_config_file(mut self, path: &Path) -> Self {
        self.config_file = Some(path.to_path_buf());
        self
    }

    /// Add a programmatic layer above files and environment. Later calls
    /// take precedence over earlier ones.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides.push(config);
        self
    }

    /// Do not read configuration files.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not read `STITCH_*` environment variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merge all layers into a validated [`Config`].
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is invalid, or the merged configuration fails validation.
    pub fn build(&self) -> Result<Config> {
        self.assemble().map(|(config, _)| config)
    }

    /// Merge all layers and resolve them into [`SiteSettings`].
    ///
    /// Relative paths resolve against the directory of the explicit config
    /// file, else the discovered project root, else the working directory.
    ///
    /// # Errors
    ///
    /// Returns an error under the same conditions as [`build`](Self::build),
    /// or if the settings cannot be resolved.
    pub fn build_settings(&self) -> Result<SiteSettings> {
        let (config, project_root) = self.assemble()?;
        SiteSettings::resolve(&config, &project_root)
    }

    fn assemble(&self) -> Result<(Config, PathBuf)> {
        let working_dir = match self.working_dir {
            Some(ref dir) => dir.clone(),
            None => std::env::current_dir()?,
        };

        let (project_root, sources) = self.load_sources(&working_dir)?;
        for source in &sources {
            ConfigValidator::validate(&source.config).map_err(|e| match e {
                Error::Validation { field, message } => Error::Validation {
                    field: format!("{} ({})", field, source.path.display()),
                    message,
                },
                other => other,
            })?;
            log::debug!("loaded configuration from {}", source.path.display());
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        for layer in &self.overrides {
            ConfigMerger::merge_into(&mut config, layer);
        }

        ConfigValidator::validate(&config)?;
        Ok((config, project_root))
    }

    fn load_sources(&self, working_dir: &Path) -> Result<(PathBuf, Vec<ConfigSource>)> {
        if let Some(ref file) = self.config_file {
            let config = ConfigLoader::load_file(file)?;
            let root = file
                .parent()
                .filter(|p| !p.as_os_str().is_empty())
                .map_or_else(|| working_dir.to_path_buf(), |p| working_dir.join(p));
            let source = ConfigSource {
                path: file.clone(),
                precedence: 1,
                config,
            };
            return Ok((root, vec![source]));
        }

        if self.skip_files {
            return Ok((working_dir.to_path_buf(), Vec::new()));
        }

        Ok(ConfigLoader::discover(working_dir)?
            .unwrap_or_else(|| (working_dir.to_path_buf(), Vec::new())))
    }
}
