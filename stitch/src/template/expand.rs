//! Include directive expansion.
//!
//! Templates pull in fragments with
//!
//! ```text
//! <%- include('./nav.ejs') %>
//! <%- include("/shared/footer", { year: 2024 }) %>
//! ```
//!
//! The opening tag may be `<%-`, `<%=` or `<%_`, the closing one `%>`, `-%>`
//! or `_%>`. A data argument is accepted and ignored. Every other template
//! tag is copied through untouched and counted, and `<%%` stays a literal.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use regex::Regex;

use crate::error::{Error, Result};
use crate::include::{resolve_include, IncludePathKind};
use crate::path::normalize::resolve_components;

/// Body of an include tag, between `<%` and `%>`.
static INCLUDE_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"(?s)^[-=_]\s*include\s*\(\s*(?:'([^']*)'|"([^"]*)")\s*(?:,.*)?\)\s*;?\s*[-_]?$"#,
    )
    .expect("include tag regex is valid")
});

const OPEN: &str = "<%";
const CLOSE: &str = "%>";

/// A template with all of its includes inlined.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Expanded {
    /// The expanded text.
    pub text: String,
    /// Every fragment read, in the order first encountered.
    pub fragments: Vec<PathBuf>,
    /// Template tags that were not include directives and were left as-is.
    pub passthrough_tags: usize,
}

/// Inlines include directives recursively.
///
/// # Examples
///
/// ```no_run
/// use stitch::template::IncludeExpander;
/// use std::path::Path;
///
/// let expander = IncludeExpander::new(Path::new("/site/src"), "ejs");
/// let page = expander.expand_file(Path::new("/site/src/index.ejs")).unwrap();
/// println!("{} fragments inlined", page.fragments.len());
/// ```
#[derive(Debug, Clone)]
pub struct IncludeExpander<'a> {
    source_root: &'a Path,
    extension: &'a str,
    max_depth: usize,
}

impl<'a> IncludeExpander<'a> {
    /// Create an expander for templates under `source_root`.
    ///
    /// `extension` is appended to relative include candidates written
    /// without one.
    #[must_use]
    pub fn new(source_root: &'a Path, extension: &'a str) -> Self {
        Self {
            source_root,
            extension,
            max_depth: crate::config::schema::DEFAULT_MAX_INCLUDE_DEPTH,
        }
    }

    /// Limit how deeply includes may nest.
    #[must_use]
    pub fn with_max_depth(mut self, depth: usize) -> Self {
        self.max_depth = depth;
        self
    }

    /// Read `template` and inline its includes.
    ///
    /// # Errors
    ///
    /// Fails on the first unresolvable include, cycle, depth overrun,
    /// unterminated tag or read error.
    pub fn expand_file(&self, template: &Path) -> Result<Expanded> {
        let text = fs::read_to_string(template)?;
        self.expand_str(&text, template)
    }

    /// Inline the includes of `text`, treating it as the contents of
    /// `template` for relative resolution.
    ///
    /// # Errors
    ///
    /// See [`expand_file`](Self::expand_file).
    pub fn expand_str(&self, text: &str, template: &Path) -> Result<Expanded> {
        let mut expanded = Expanded::default();
        let mut stack = vec![resolve_components(template)?];
        expanded.text = self.expand_into(text, template, &mut stack, &mut expanded)?;
        Ok(expanded)
    }

    fn expand_into(
        &self,
        text: &str,
        file: &Path,
        stack: &mut Vec<PathBuf>,
        expanded: &mut Expanded,
    ) -> Result<String> {
        let mut out = String::with_capacity(text.len());
        let mut rest = text;
        let mut consumed = 0usize;

        while let Some(start) = rest.find(OPEN) {
            out.push_str(&rest[..start]);
            let after_open = &rest[start + OPEN.len()..];

            if let Some(literal) = after_open.strip_prefix('%') {
                out.push_str("<%%");
                consumed += start + OPEN.len() + 1;
                rest = literal;
                continue;
            }

            let Some(end) = after_open.find(CLOSE) else {
                let line = text[..consumed + start].matches('\n').count() + 1;
                return Err(Error::MalformedDirective {
                    path: file.to_path_buf(),
                    line,
                });
            };

            let body = &after_open[..end];
            let tag_len = OPEN.len() + end + CLOSE.len();

            match include_target(body) {
                Some(original) => {
                    let fragment = self.inline(original, file, stack, expanded)?;
                    out.push_str(&fragment);
                }
                None => {
                    out.push_str(&rest[start..start + tag_len]);
                    expanded.passthrough_tags += 1;
                }
            }

            consumed += start + tag_len;
            rest = &rest[start + tag_len..];
        }

        out.push_str(rest);
        Ok(out)
    }

    fn inline(
        &self,
        original: &str,
        including: &Path,
        stack: &mut Vec<PathBuf>,
        expanded: &mut Expanded,
    ) -> Result<String> {
        let candidate = match IncludePathKind::classify(original) {
            IncludePathKind::Relative => {
                let dir = including.parent().unwrap_or_else(|| Path::new(""));
                self.parsed_candidate(original, dir)?
            }
            _ => PathBuf::from(original),
        };
        let resolved = resolve_include(original, &candidate, self.source_root)?;
        let identity = resolve_components(&resolved.filename)?;

        if stack.contains(&identity) {
            let mut chain = stack.clone();
            chain.push(identity);
            return Err(Error::IncludeCycle { chain });
        }
        if stack.len() > self.max_depth {
            return Err(Error::IncludeDepthExceeded {
                depth: self.max_depth,
                path: including.to_path_buf(),
            });
        }

        if !expanded.fragments.contains(&identity) {
            expanded.fragments.push(identity.clone());
        }

        let text = fs::read_to_string(&resolved.filename)?;
        stack.push(identity);
        let result = self.expand_into(&text, &resolved.filename, stack, expanded);
        stack.pop();
        result
    }

    /// `dir` joined with `original`, cleaned up, with the template extension
    /// added when `original` has none.
    ///
    /// This is the candidate a relative include written in a file inside
    /// `dir` is resolved to.
    ///
    /// # Errors
    ///
    /// Fails if `original` climbs above the filesystem root.
    ///
    /// # Examples
    ///
    /// ```
    /// use stitch::template::IncludeExpander;
    /// use std::path::Path;
    ///
    /// let expander = IncludeExpander::new(Path::new("/site/src"), "ejs");
    /// let candidate = expander
    ///     .parsed_candidate("../shared/_nav", Path::new("/site/src/blog"))
    ///     .unwrap();
    /// assert_eq!(candidate, Path::new("/site/src/shared/_nav.ejs"));
    /// ```
    pub fn parsed_candidate(&self, original: &str, dir: &Path) -> Result<PathBuf> {
        let mut candidate = resolve_components(&dir.join(original))?;
        if Path::new(original).extension().is_none() {
            let mut name = candidate.clone().into_os_string();
            name.push(".");
            name.push(self.extension);
            candidate = PathBuf::from(name);
        }
        Ok(candidate)
    }
}

/// The include path of a tag body, if the tag is an include directive.
fn include_target(body: &str) -> Option<&str> {
    let captures = INCLUDE_TAG.captures(body)?;
    captures
        .get(1)
        .or_else(|| captures.get(2))
        .map(|m| m.as_str())
}
