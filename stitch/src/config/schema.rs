//! Configuration schema definitions.
//!
//! [`Config`] is what a `stitch.yaml` file deserializes into: every field is
//! optional so that files, environment variables and programmatic overrides
//! can be layered. [`SiteSettings`] is the fully resolved form a build runs
//! against, with defaults applied and every directory made absolute.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::path::normalize::normalize_against;
use crate::path::PathRelationship;

/// Default source directory, relative to the project root.
pub const DEFAULT_SOURCE_ROOT: &str = "src";
/// Default output directory, relative to the project root.
pub const DEFAULT_OUTPUT_DIR: &str = "dist";
/// Default public asset directory, relative to the source root.
pub const DEFAULT_PUBLIC_DIR: &str = "public";
/// Default template file extension.
pub const DEFAULT_TEMPLATE_EXTENSION: &str = "ejs";
/// Default limit on nested includes.
pub const DEFAULT_MAX_INCLUDE_DEPTH: usize = 32;
/// Default number of hex characters in fingerprinted asset names.
pub const DEFAULT_HASH_LENGTH: usize = 20;

/// Layered site configuration.
///
/// # Examples
///
/// ```
/// use stitch::config::Config;
/// use std::path::PathBuf;
///
/// let config: Config = serde_yaml::from_str("source_root: pages\nminify: false\n").unwrap();
/// assert_eq!(config.source_root, Some(PathBuf::from("pages")));
/// assert_eq!(config.minify, Some(false));
/// assert!(config.output_dir.is_none());
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Directory containing templates and fragments.
    pub source_root: Option<PathBuf>,

    /// Directory the site is written to.
    pub output_dir: Option<PathBuf>,

    /// Asset directory copied verbatim, relative to the source root.
    pub public_dir: Option<PathBuf>,

    /// Extension of template files, without the dot.
    pub template_extension: Option<String>,

    /// Minify rendered HTML.
    pub minify: Option<bool>,

    /// Empty the output directory before building.
    pub clean: Option<bool>,

    /// Move `<style>` blocks into the document head.
    pub collect_styles: Option<bool>,

    /// Maximum nesting of include directives.
    pub max_include_depth: Option<usize>,

    /// Hex characters of the content hash used for asset names.
    pub hash_length: Option<usize>,
}

/// Resolved settings for one site build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteSettings {
    /// Directory relative paths were resolved against.
    pub project_root: PathBuf,
    /// Absolute source root.
    pub source_root: PathBuf,
    /// Absolute output directory.
    pub output_dir: PathBuf,
    /// Absolute public asset directory.
    pub public_dir: PathBuf,
    /// Template file extension, without the dot.
    pub template_extension: String,
    /// Minify rendered HTML.
    pub minify: bool,
    /// Empty the output directory before building.
    pub clean: bool,
    /// Move `<style>` blocks into the document head.
    pub collect_styles: bool,
    /// Maximum nesting of include directives.
    pub max_include_depth: usize,
    /// Hex characters of the content hash used for asset names.
    pub hash_length: usize,
}

impl SiteSettings {
    /// Apply defaults to `config` and resolve its directories against
    /// `project_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory cannot be normalized, or if the output
    /// directory is, contains, or sits inside the source root or the public
    /// folder.
    ///
    /// # Examples
    ///
    /// ```
    /// use stitch::config::{Config, SiteSettings};
    /// use std::path::Path;
    ///
    /// let settings = SiteSettings::resolve(&Config::default(), Path::new("/site")).unwrap();
    /// assert_eq!(settings.source_root, Path::new("/site/src"));
    /// assert_eq!(settings.output_dir, Path::new("/site/dist"));
    /// assert_eq!(settings.public_dir, Path::new("/site/src/public"));
    /// ```
    pub fn resolve(config: &Config, project_root: &Path) -> Result<Self> {
        let source_root = normalize_against(
            config
                .source_root
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_SOURCE_ROOT)),
            project_root,
        )?;
        let output_dir = normalize_against(
            config
                .output_dir
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_OUTPUT_DIR)),
            project_root,
        )?;
        let public_dir = normalize_against(
            config
                .public_dir
                .as_deref()
                .unwrap_or_else(|| Path::new(DEFAULT_PUBLIC_DIR)),
            &source_root,
        )?;

        // Cleaning the output directory must never reach sources or public
        // files, and copying the public folder must not land inside itself.
        for (name, guarded) in [("source root", &source_root), ("public folder", &public_dir)] {
            let relationship = PathRelationship::between(&output_dir, guarded);
            if relationship != PathRelationship::Unrelated {
                return Err(Error::Validation {
                    field: "output_dir".into(),
                    message: format!(
                        "output directory must be outside the {name} ({})",
                        relationship.description(&output_dir, guarded)
                    ),
                });
            }
        }

        Ok(Self {
            project_root: project_root.to_path_buf(),
            source_root,
            output_dir,
            public_dir,
            template_extension: config
                .template_extension
                .clone()
                .unwrap_or_else(|| DEFAULT_TEMPLATE_EXTENSION.to_string()),
            minify: config.minify.unwrap_or(true),
            clean: config.clean.unwrap_or(true),
            collect_styles: config.collect_styles.unwrap_or(true),
            max_include_depth: config.max_include_depth.unwrap_or(DEFAULT_MAX_INCLUDE_DEPTH),
            hash_length: config.hash_length.unwrap_or(DEFAULT_HASH_LENGTH),
        })
    }
}
