//! Output path derivation for discovered entries.
//!
//! Every entry template lives under the source root and becomes one page in
//! the output directory. The page name is the template path with its
//! extension (and any `?query`, `#fragment` or `;param` suffix) dropped and
//! the source-root segment removed:
//!
//! ```text
//! ./src/index.ejs        -> ./index
//! ./src/blog/post.ejs    -> ./blog/post
//! ./src/index.html?v=1   -> ./index
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};

/// Root segment removed by [`arrange`].
pub const DEFAULT_ROOT_SEGMENT: &str = "src";

/// `dir/name.ext` with an optional `?`, `#` or `;` suffix. Group 1 is
/// everything before the extension.
static ARRANGEABLE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(.+/.+?)\.[a-z]+([?#;].*)?$").expect("arrangeable path regex is valid")
});

/// Derive the output-relative path for `full_path`, removing the `src/`
/// segment.
///
/// # Errors
///
/// Returns [`Error::PathMismatch`] if the path has no directory separator or
/// no lowercase extension.
///
/// # Examples
///
/// ```
/// use stitch::arrange;
///
/// assert_eq!(arrange("./src/index.html").unwrap(), "./index");
/// assert_eq!(arrange("./src/index.html?v=1").unwrap(), "./index");
/// assert!(arrange("noextension").is_err());
/// ```
pub fn arrange(full_path: &str) -> Result<String> {
    arrange_with_root(full_path, DEFAULT_ROOT_SEGMENT)
}

/// Derive the output-relative path for `full_path`, removing the first
/// occurrence of `<root_segment>/`.
///
/// # Errors
///
/// Returns [`Error::PathMismatch`] if the path does not have the
/// `dir/name.ext` shape.
///
/// # Examples
///
/// ```
/// use stitch::arrange_with_root;
///
/// assert_eq!(arrange_with_root("./pages/a/b.ejs", "pages").unwrap(), "./a/b");
/// ```
pub fn arrange_with_root(full_path: &str, root_segment: &str) -> Result<String> {
    let captures = ARRANGEABLE
        .captures(full_path)
        .ok_or_else(|| Error::PathMismatch {
            path: full_path.to_string(),
        })?;

    // Group 1 is not optional, so a match always has it.
    let without_extension = captures.get(1).map_or("", |m| m.as_str());

    let segment = format!("{root_segment}/");
    Ok(without_extension.replacen(&segment, "", 1))
}
