//! Entry discovery.
//!
//! Every template under the source root is a page, except fragments whose
//! file name starts with an underscore: those exist only to be included.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::config::SiteSettings;
use crate::error::{Error, Result};
use crate::path::arrange_with_root;

/// A top-level template slated to become one output page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// The template file.
    pub template: PathBuf,
    /// Output name relative to the output directory, without `.html`.
    pub output: String,
}

impl Entry {
    /// Where the rendered page is written.
    ///
    /// # Examples
    ///
    /// ```
    /// use stitch::Entry;
    /// use std::path::{Path, PathBuf};
    ///
    /// let entry = Entry {
    ///     template: PathBuf::from("/site/src/blog/post.ejs"),
    ///     output: "blog/post".to_string(),
    /// };
    /// assert_eq!(entry.output_file(Path::new("/site/dist")), Path::new("/site/dist/blog/post.html"));
    /// ```
    #[must_use]
    pub fn output_file(&self, output_dir: &Path) -> PathBuf {
        output_dir.join(format!("{}.html", self.output))
    }
}

/// Enumerate every entry template under `source_root`.
///
/// Matches `<source_root>/**/[!_]*.<extension>`, keeping regular files only.
/// Paths are returned joined onto `source_root` as given, in glob traversal
/// order (sorted per directory).
///
/// # Errors
///
/// Returns an error if `source_root` is not valid UTF-8, the pattern is
/// invalid, or a directory cannot be read.
///
/// # Examples
///
/// ```no_run
/// use stitch::discover_entries;
/// use std::path::Path;
///
/// for template in discover_entries(Path::new("src"), "ejs").unwrap() {
///     println!("{}", template.display());
/// }
/// ```
pub fn discover_entries(source_root: &Path, extension: &str) -> Result<Vec<PathBuf>> {
    let root = source_root.to_str().ok_or_else(|| Error::InvalidPath {
        path: source_root.to_path_buf(),
        reason: "Source root contains invalid UTF-8".to_string(),
    })?;

    let pattern = format!(
        "{}/**/[!_]*.{}",
        glob::Pattern::escape(root.trim_end_matches('/')),
        glob::Pattern::escape(extension)
    );
    log::debug!("discovering entries with pattern {pattern}");

    let mut entries = Vec::new();
    for path in glob::glob(&pattern)? {
        let path = path?;
        if path.is_file() {
            entries.push(path);
        }
    }

    Ok(entries)
}

/// Discover entries for a site and compute each output name.
///
/// Output names follow [`arrange_with_root`] applied to
/// `./<root-name>/<path-under-root>`, so a template at
/// `<source_root>/blog/post.ejs` becomes `blog/post`.
///
/// # Errors
///
/// Returns an error if discovery fails or a template path cannot be arranged.
pub fn discover_site_entries(settings: &SiteSettings) -> Result<Vec<Entry>> {
    let root_name = settings
        .source_root
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| Error::InvalidPath {
            path: settings.source_root.clone(),
            reason: "Source root must end in a UTF-8 directory name".to_string(),
        })?;

    discover_entries(&settings.source_root, &settings.template_extension)?
        .into_iter()
        .map(|template| {
            let output = output_name(&template, &settings.source_root, root_name)?;
            Ok(Entry { template, output })
        })
        .collect()
}

fn output_name(template: &Path, source_root: &Path, root_name: &str) -> Result<String> {
    let relative = template
        .strip_prefix(source_root)
        .map_err(|_| Error::InvalidPath {
            path: template.to_path_buf(),
            reason: "Template is outside the source root".to_string(),
        })?;

    let relative = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/");

    let arranged = arrange_with_root(&format!("./{root_name}/{relative}"), root_name)?;
    Ok(arranged.trim_start_matches("./").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn touch(root: &Path, relative: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, "<p></p>").unwrap();
    }

    #[test]
    fn test_discover_skips_underscore_fragments() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        touch(&src, "a.ejs");
        touch(&src, "_partial.ejs");
        touch(&src, "b/c.ejs");

        let found = discover_entries(&src, "ejs").unwrap();
        assert_eq!(found, vec![src.join("a.ejs"), src.join("b/c.ejs")]);
    }

    #[test]
    fn test_discover_filters_by_extension() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        touch(&src, "index.ejs");
        touch(&src, "style.css");
        touch(&src, "notes.ejs.bak");

        let found = discover_entries(&src, "ejs").unwrap();
        assert_eq!(found, vec![src.join("index.ejs")]);
    }

    #[test]
    fn test_discover_ignores_directories_named_like_templates() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        fs::create_dir_all(src.join("weird.ejs")).unwrap();
        touch(&src, "weird.ejs/inner.ejs");

        let found = discover_entries(&src, "ejs").unwrap();
        assert_eq!(found, vec![src.join("weird.ejs/inner.ejs")]);
    }

    #[test]
    fn test_discover_missing_root_is_empty() {
        let temp = TempDir::new().unwrap();
        let found = discover_entries(&temp.path().join("nope"), "ejs").unwrap();
        assert!(found.is_empty());
    }

    #[test]
    #[cfg(unix)]
    fn test_discover_unreadable_directory_is_io_error() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        touch(&src, "index.ejs");
        touch(&src, "locked/page.ejs");
        let locked = src.join("locked");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

        // Privileged users read through the mode bits; nothing to observe.
        let readable = fs::read_dir(&locked).is_ok();
        let result = discover_entries(&src, "ejs");
        fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();
        if readable {
            return;
        }

        match result.unwrap_err() {
            Error::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::PermissionDenied),
            other => panic!("expected I/O error, got {other}"),
        }
    }

    #[test]
    fn test_discover_is_restartable() {
        let temp = TempDir::new().unwrap();
        let src = temp.path().join("src");
        touch(&src, "x.ejs");
        touch(&src, "y/z.ejs");

        let first = discover_entries(&src, "ejs").unwrap();
        let second = discover_entries(&src, "ejs").unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_output_name_strips_root_and_extension() {
        let root = Path::new("/site/src");
        assert_eq!(
            output_name(Path::new("/site/src/index.ejs"), root, "src").unwrap(),
            "index"
        );
        assert_eq!(
            output_name(Path::new("/site/src/blog/post.ejs"), root, "src").unwrap(),
            "blog/post"
        );
    }

    #[test]
    fn test_output_name_only_strips_leading_root_segment() {
        let root = Path::new("/src/app/src");
        assert_eq!(
            output_name(Path::new("/src/app/src/src/page.ejs"), root, "src").unwrap(),
            "src/page"
        );
    }

    #[test]
    fn test_output_name_outside_root_fails() {
        assert!(output_name(Path::new("/elsewhere/a.ejs"), Path::new("/site/src"), "src").is_err());
    }

    #[test]
    fn test_entry_output_file() {
        let entry = Entry {
            template: PathBuf::from("/s/src/index.ejs"),
            output: "index".to_string(),
        };
        assert_eq!(entry.output_file(Path::new("/s/dist")), PathBuf::from("/s/dist/index.html"));
    }

    #[test]
    fn test_entry_serializes() {
        let entry = Entry {
            template: PathBuf::from("/s/src/index.ejs"),
            output: "index".to_string(),
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["output"], "index");
        assert_eq!(json["template"], "/s/src/index.ejs");
    }
}
