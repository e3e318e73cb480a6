//! Environment variable handling for configuration overrides.
//!
//! This module provides support for `STITCH_*` environment variables that
//! override configuration file values.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use stitch::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to config.
    ///
    /// # Errors
    ///
    /// Returns an error if any environment variable value is invalid
    /// (e.g., non-numeric depth, invalid boolean).
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(path) = Self::var_path("STITCH_SOURCE_ROOT") {
            config.source_root = Some(path);
        }

        if let Some(path) = Self::var_path("STITCH_OUTPUT_DIR") {
            config.output_dir = Some(path);
        }

        if let Some(path) = Self::var_path("STITCH_PUBLIC_DIR") {
            config.public_dir = Some(path);
        }

        if let Ok(ext) = env::var("STITCH_TEMPLATE_EXTENSION") {
            config.template_extension = Some(ext);
        }

        if let Ok(val) = env::var("STITCH_MINIFY") {
            config.minify = Some(Self::parse_bool("STITCH_MINIFY", &val)?);
        }

        if let Ok(val) = env::var("STITCH_CLEAN") {
            config.clean = Some(Self::parse_bool("STITCH_CLEAN", &val)?);
        }

        if let Ok(val) = env::var("STITCH_COLLECT_STYLES") {
            config.collect_styles = Some(Self::parse_bool("STITCH_COLLECT_STYLES", &val)?);
        }

        if let Ok(val) = env::var("STITCH_MAX_INCLUDE_DEPTH") {
            config.max_include_depth = Some(Self::parse_number("STITCH_MAX_INCLUDE_DEPTH", &val)?);
        }

        if let Ok(val) = env::var("STITCH_HASH_LENGTH") {
            config.hash_length = Some(Self::parse_number("STITCH_HASH_LENGTH", &val)?);
        }

        Ok(())
    }

    fn var_path(name: &str) -> Option<PathBuf> {
        env::var_os(name)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from)
    }

    /// Parse a boolean value from a string.
    ///
    /// Accepts: true/1/yes/on for true, false/0/no/off for false (case-insensitive).
    fn parse_bool(field: &str, s: &str) -> Result<bool> {
        match s.trim().to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(Error::Validation {
                field: field.into(),
                message: format!(
                    "Invalid boolean value: '{s}' (expected true/false/1/0/yes/no/on/off)"
                ),
            }),
        }
    }

    fn parse_number<T: FromStr>(field: &str, s: &str) -> Result<T> {
        s.trim().parse().map_err(|_| Error::Validation {
            field: field.into(),
            message: format!("Must be a non-negative integer, got '{s}'"),
        })
    }
}
