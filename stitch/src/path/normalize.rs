//! Lexical path normalization.
//!
//! Configured directories may be written with `~`, relative to the project
//! root, or with `.`/`..` segments. Include candidates are built by joining
//! a directive onto the including file's directory. Both are cleaned up here
//! without touching the filesystem, so paths that do not exist yet (the
//! output directory, a missing fragment) normalize just as well.

use std::path::{Component, Path, PathBuf};

use crate::error::{Error, Result};

/// Expand tilde (~) to the home directory.
///
/// Handles `~` and `~/path`; `~user` syntax is rejected.
///
/// # Errors
///
/// Returns an error if the path is not valid UTF-8, the home directory
/// cannot be determined, or `~user` syntax is used.
///
/// # Examples
///
/// ```
/// use stitch::path::normalize::expand_tilde;
/// use std::path::Path;
///
/// let expanded = expand_tilde(Path::new("~/site")).unwrap();
/// assert!(expanded.is_absolute());
/// assert!(expanded.ends_with("site"));
///
/// assert_eq!(expand_tilde(Path::new("/srv/site")).unwrap(), Path::new("/srv/site"));
/// ```
pub fn expand_tilde(path: &Path) -> Result<PathBuf> {
    let path_str = path.to_str().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Path contains invalid UTF-8".to_string(),
    })?;

    if !path_str.starts_with('~') {
        return Ok(path.to_path_buf());
    }

    let home = home::home_dir().ok_or_else(|| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: "Cannot determine home directory".to_string(),
    })?;

    if path_str == "~" {
        Ok(home)
    } else if let Some(rest) = path_str
        .strip_prefix("~/")
        .or_else(|| path_str.strip_prefix("~\\"))
    {
        Ok(home.join(rest))
    } else {
        Err(Error::InvalidPath {
            path: path.to_path_buf(),
            reason: "~user syntax is not supported; use ~ or ~/path".to_string(),
        })
    }
}

/// Resolve `.` and `..` components lexically.
///
/// Relative inputs stay relative; a leading `..` that cannot be popped is
/// kept for relative paths and rejected for rooted ones.
///
/// # Errors
///
/// Returns an error if a rooted path has more `..` components than
/// directories to climb.
///
/// # Examples
///
/// ```
/// use stitch::path::normalize::resolve_components;
/// use std::path::{Path, PathBuf};
///
/// let resolved = resolve_components(Path::new("/site/src/pages/./../_header.ejs")).unwrap();
/// assert_eq!(resolved, PathBuf::from("/site/src/_header.ejs"));
/// ```
pub fn resolve_components(path: &Path) -> Result<PathBuf> {
    let mut result = PathBuf::new();
    let mut has_root = false;
    // Number of Normal components currently in `result`.
    let mut depth = 0usize;

    for component in path.components() {
        match component {
            Component::Prefix(prefix) => {
                result.push(prefix.as_os_str());
                has_root = true;
            }
            Component::RootDir => {
                result.push(component);
                has_root = true;
            }
            Component::CurDir => {}
            Component::Normal(c) => {
                result.push(c);
                depth += 1;
            }
            Component::ParentDir => {
                if depth > 0 {
                    result.pop();
                    depth -= 1;
                } else if has_root {
                    return Err(Error::InvalidPath {
                        path: path.to_path_buf(),
                        reason: "Path contains too many '..' components (escapes root)"
                            .to_string(),
                    });
                } else {
                    result.push(component);
                }
            }
        }
    }

    Ok(result)
}

/// Normalize `path` to an absolute path, resolving relative input against
/// `base`.
///
/// # Errors
///
/// Returns an error if tilde expansion fails or the path escapes the root.
///
/// # Examples
///
/// ```
/// use stitch::path::normalize::normalize_against;
/// use std::path::Path;
///
/// let out = normalize_against(Path::new("../dist"), Path::new("/site/web")).unwrap();
/// assert_eq!(out, Path::new("/site/dist"));
///
/// let abs = normalize_against(Path::new("/srv/www"), Path::new("/site")).unwrap();
/// assert_eq!(abs, Path::new("/srv/www"));
/// ```
pub fn normalize_against(path: &Path, base: &Path) -> Result<PathBuf> {
    let expanded = expand_tilde(path)?;

    let absolute = if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    };

    resolve_components(&absolute)
}

/// Normalize a path to absolute form using the current directory as base.
///
/// # Errors
///
/// Returns an error if the current directory cannot be determined, tilde
/// expansion fails, or the path escapes the root.
pub fn normalize(path: &Path) -> Result<PathBuf> {
    let cwd = std::env::current_dir().map_err(|e| Error::InvalidPath {
        path: path.to_path_buf(),
        reason: format!("Cannot get current directory: {e}"),
    })?;
    normalize_against(path, &cwd)
}
