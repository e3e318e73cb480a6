//! Error types for the stitch library.
//!
//! This module provides the error hierarchy for all operations in the
//! stitch library, using `thiserror` for ergonomic error handling.

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a stitch error.
///
/// # Examples
///
/// ```
/// use stitch::{Error, Result};
///
/// fn example_operation() -> Result<String> {
///     Ok("./index".to_string())
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the stitch library.
#[derive(Debug, Error)]
pub enum Error {
    /// A path did not have the `dir/name.ext` shape required for arranging.
    #[error("path does not match the expected shape (no extension found): {path}")]
    PathMismatch {
        /// The offending path text.
        path: String,
    },

    /// An include directive could not be resolved to an existing file.
    #[error("Not Found: could not resolve {original}")]
    IncludeNotFound {
        /// The include path exactly as written in the including template.
        original: String,
    },

    /// A fragment includes itself, directly or through other fragments.
    #[error("include cycle detected: {}", format_chain(.chain))]
    IncludeCycle {
        /// The files involved, outermost first, ending with the repeated file.
        chain: Vec<PathBuf>,
    },

    /// Includes are nested deeper than the configured limit.
    #[error("include depth {depth} exceeded while expanding {}", path.display())]
    IncludeDepthExceeded {
        /// The configured maximum depth.
        depth: usize,
        /// The file being expanded when the limit was hit.
        path: PathBuf,
    },

    /// A template tag was opened but never closed.
    #[error("unterminated template tag in {} at line {line}", path.display())]
    MalformedDirective {
        /// The template containing the tag.
        path: PathBuf,
        /// 1-based line number of the opening tag.
        line: usize,
    },

    /// A stylesheet or script referenced by a template does not exist.
    #[error("asset '{reference}' referenced from {} not found", template.display())]
    AssetNotFound {
        /// The attribute value as written.
        reference: String,
        /// The template containing the reference.
        template: PathBuf,
    },

    /// A Sass stylesheet failed to compile.
    #[error("failed to compile stylesheet {}: {message}", path.display())]
    StylesheetCompile {
        /// The Sass source.
        path: PathBuf,
        /// The compiler's message.
        message: String,
    },

    /// An invalid glob pattern was built during entry discovery.
    #[error("invalid glob pattern: {0}")]
    GlobPattern(#[from] glob::PatternError),

    /// A directory traversal failed.
    #[error("directory walk failed: {0}")]
    Walk(#[from] walkdir::Error),

    /// A configuration error occurred.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The requested resource was not found.
    #[error("not found: {resource}")]
    NotFound {
        /// The resource that was not found.
        resource: String,
    },
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

impl From<glob::GlobError> for Error {
    fn from(err: glob::GlobError) -> Self {
        Self::Io(err.into())
    }
}

impl Error {
    /// Check if error indicates an unresolvable include.
    ///
    /// # Examples
    ///
    /// ```
    /// use stitch::Error;
    ///
    /// let err = Error::IncludeNotFound { original: "missing.ejs".to_string() };
    /// assert!(err.is_include_not_found());
    /// ```
    #[must_use]
    pub fn is_include_not_found(&self) -> bool {
        matches!(self, Self::IncludeNotFound { .. })
    }

    /// Check if error is a path shape mismatch from the arranger.
    ///
    /// # Examples
    ///
    /// ```
    /// use stitch::Error;
    ///
    /// let err = Error::PathMismatch { path: "noextension".to_string() };
    /// assert!(err.is_path_mismatch());
    /// ```
    #[must_use]
    pub fn is_path_mismatch(&self) -> bool {
        matches!(self, Self::PathMismatch { .. })
    }
}
