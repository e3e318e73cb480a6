//! Path relationship checking.
//!
//! Used to keep the output directory away from the sources: cleaning an
//! output directory that contains the source root would delete the site.

use std::path::Path;

/// Relationship between two paths.
///
/// # Examples
///
/// ```
/// use stitch::path::PathRelationship;
/// use std::path::Path;
///
/// assert_eq!(
///     PathRelationship::between(Path::new("/site"), Path::new("/site/src")),
///     PathRelationship::Ancestor
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PathRelationship {
    /// The first path is an ancestor of the second.
    Ancestor,
    /// The first path is a descendant of the second.
    Descendant,
    /// The paths are the same.
    Same,
    /// Neither path contains the other.
    Unrelated,
}

impl PathRelationship {
    /// Determine the relationship between two paths by component prefix.
    ///
    /// Both paths are expected to be normalized already.
    ///
    /// # Examples
    ///
    /// ```
    /// use stitch::path::PathRelationship;
    /// use std::path::Path;
    ///
    /// let rel = PathRelationship::between(Path::new("/site/dist"), Path::new("/site/src"));
    /// assert_eq!(rel, PathRelationship::Unrelated);
    /// ```
    #[must_use]
    pub fn between(path1: &Path, path2: &Path) -> Self {
        if path1 == path2 {
            Self::Same
        } else if path2.starts_with(path1) {
            Self::Ancestor
        } else if path1.starts_with(path2) {
            Self::Descendant
        } else {
            Self::Unrelated
        }
    }

    /// Check if `path` contains `other` (ancestor or same).
    #[must_use]
    pub fn contains(path: &Path, other: &Path) -> bool {
        matches!(Self::between(path, other), Self::Ancestor | Self::Same)
    }

    /// Get a human-readable description of the relationship.
    #[must_use]
    pub fn description(&self, path1: &Path, path2: &Path) -> String {
        let (a, b) = (path1.display(), path2.display());
        match self {
            Self::Ancestor => format!("{a} is an ancestor of {b}"),
            Self::Descendant => format!("{a} is a descendant of {b}"),
            Self::Same => format!("{a} and {b} are the same path"),
            Self::Unrelated => format!("{a} and {b} are unrelated paths"),
        }
    }
}
