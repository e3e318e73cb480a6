//! Configuration validation.

use std::path::Path;

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Smallest accepted `hash_length`.
pub const MIN_HASH_LENGTH: usize = 8;
/// Largest accepted `hash_length` (a full SHA-256 in hex).
pub const MAX_HASH_LENGTH: usize = 64;

/// Validates configuration values.
///
/// # Examples
///
/// ```
/// use stitch::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let bad = Config { hash_length: Some(2), ..Default::default() };
/// assert!(ConfigValidator::validate(&bad).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate a configuration layer or merged configuration.
    ///
    /// # Errors
    ///
    /// Returns a [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(ref path) = config.source_root {
            Self::validate_path("source_root", path)?;
        }
        if let Some(ref path) = config.output_dir {
            Self::validate_path("output_dir", path)?;
        }
        if let Some(ref path) = config.public_dir {
            Self::validate_path("public_dir", path)?;
        }

        if let Some(ref ext) = config.template_extension {
            Self::validate_extension(ext)?;
        }

        if config.max_include_depth == Some(0) {
            return Err(Error::Validation {
                field: "max_include_depth".into(),
                message: "Must be greater than 0".into(),
            });
        }

        if let Some(len) = config.hash_length {
            if !(MIN_HASH_LENGTH..=MAX_HASH_LENGTH).contains(&len) {
                return Err(Error::Validation {
                    field: "hash_length".into(),
                    message: format!(
                        "Must be between {MIN_HASH_LENGTH} and {MAX_HASH_LENGTH}, got {len}"
                    ),
                });
            }
        }

        Ok(())
    }

    fn validate_path(field: &str, path: &Path) -> Result<()> {
        if path.as_os_str().is_empty() {
            return Err(Error::Validation {
                field: field.into(),
                message: "Cannot be empty".into(),
            });
        }
        Ok(())
    }

    /// Extensions are a bare run of lowercase ASCII letters, e.g. `ejs`.
    fn validate_extension(ext: &str) -> Result<()> {
        if ext.is_empty() {
            return Err(Error::Validation {
                field: "template_extension".into(),
                message: "Cannot be empty".into(),
            });
        }
        if ext.starts_with('.') {
            return Err(Error::Validation {
                field: "template_extension".into(),
                message: format!("Write the extension without a leading dot: '{}'", &ext[1..]),
            });
        }
        // Output names can only be derived for lowercase extensions.
        if !ext.chars().all(|c| c.is_ascii_lowercase()) {
            return Err(Error::Validation {
                field: "template_extension".into(),
                message: format!("Only lowercase ASCII letters are allowed, got '{ext}'"),
            });
        }
        Ok(())
    }
}
