//! Include directive resolution.
//!
//! A template asks for a fragment with `include('<path>')`. How `<path>` is
//! interpreted depends on how it starts:
//!
//! | written as         | kind                           | reads                          |
//! |--------------------|--------------------------------|--------------------------------|
//! | `./x`, `../x`      | [`IncludePathKind::Relative`]  | the caller's parsed candidate  |
//! | `/shared/x.ejs`    | [`IncludePathKind::RootRelative`] | `<root>/./shared/x.ejs`     |
//! | `shared/x.ejs`     | [`IncludePathKind::Bare`]      | `<root>/shared/x.ejs`          |
//!
//! Anything that is neither relative nor root-relative is treated as bare,
//! including text that is not a sensible path at all; it then simply fails
//! the existence check.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{Error, Result};

/// Syntax of the path text inside an include directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IncludePathKind {
    /// Starts with `.`: relative to the including file.
    Relative,
    /// Starts with `/`: rooted at the source directory.
    RootRelative,
    /// Anything else: relative to the source directory.
    Bare,
}

impl IncludePathKind {
    /// Classify the literal path text of an include directive.
    ///
    /// # Examples
    ///
    /// ```
    /// use stitch::IncludePathKind;
    ///
    /// assert_eq!(IncludePathKind::classify("./nav.ejs"), IncludePathKind::Relative);
    /// assert_eq!(IncludePathKind::classify("/shared/nav.ejs"), IncludePathKind::RootRelative);
    /// assert_eq!(IncludePathKind::classify("shared/nav.ejs"), IncludePathKind::Bare);
    /// ```
    #[must_use]
    pub fn classify(original: &str) -> Self {
        match original.chars().next() {
            Some('.') => Self::Relative,
            Some('/') => Self::RootRelative,
            _ => Self::Bare,
        }
    }
}

/// The file an include directive resolved to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedInclude {
    /// Path of the fragment to read.
    pub filename: PathBuf,
}

/// Resolve an include directive to an existing file.
///
/// `parsed_candidate` is the caller's own resolution of `original` against
/// the including file's directory; it is only used for relative directives.
///
/// # Errors
///
/// Returns [`Error::IncludeNotFound`] carrying `original` if the resolved
/// path does not exist.
///
/// # Examples
///
/// ```no_run
/// use stitch::resolve_include;
/// use std::path::Path;
///
/// let resolved = resolve_include(
///     "/shared/partial.ejs",
///     Path::new("/abs/src/pages/shared/partial.ejs"),
///     Path::new("/abs/src"),
/// ).unwrap();
/// assert_eq!(resolved.filename.as_os_str(), "/abs/src/./shared/partial.ejs");
/// ```
pub fn resolve_include(
    original: &str,
    parsed_candidate: &Path,
    source_root: &Path,
) -> Result<ResolvedInclude> {
    let kind = IncludePathKind::classify(original);
    let filename = match kind {
        IncludePathKind::Relative => parsed_candidate.to_path_buf(),
        IncludePathKind::RootRelative => join_text(source_root, "/.", original),
        IncludePathKind::Bare => join_text(source_root, "/", original),
    };

    if filename.exists() {
        log::debug!(
            "resolved {kind:?} include '{original}' to {}",
            filename.display()
        );
        Ok(ResolvedInclude { filename })
    } else {
        Err(Error::IncludeNotFound {
            original: original.to_string(),
        })
    }
}

/// `root + separator + original` as plain text, keeping any `.` segment.
fn join_text(root: &Path, separator: &str, original: &str) -> PathBuf {
    let mut joined = OsString::from(root.as_os_str());
    joined.push(separator);
    joined.push(original);
    PathBuf::from(joined)
}
