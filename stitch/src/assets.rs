//! Stylesheet and script fingerprinting.
//!
//! Pages reference their stylesheets and scripts by source path. During a
//! build each such local file is copied to the output root under a name
//! derived from its content, and the referencing attribute is rewritten to
//! point at the copy. Sass sources are compiled to CSS first. Only
//! `<script src>` and `<link href>` are touched; everything else (images,
//! anchors, `data-*` attributes, absolute URLs) is left alone and is
//! expected to come from the public folder.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use grass::InputSyntax;
use regex::{Captures, Regex};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};
use crate::path::normalize::resolve_components;

/// Extensions whose references are handled by the pipeline.
const FILTERED_EXTENSIONS: [&str; 4] = [".scss", ".sass", ".css", ".js"];

/// `<script ...>` and `<link ...>` start tags.
static ASSET_TAG: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<(script|link)(?:\s[^>]*)?>").expect("asset tag regex is valid")
});

/// A `src` or `href` attribute. The leading whitespace keeps `data-src` and
/// friends out.
static URL_ATTRIBUTE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)(\s)(src|href)(\s*=\s*)(?:"([^"]*)"|'([^']*)')"#)
        .expect("attribute regex is valid")
});

static SCHEME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z][A-Za-z0-9+.-]*:").expect("scheme regex is valid"));

/// Whether an attribute value refers to a stylesheet or script.
///
/// # Examples
///
/// ```
/// use stitch::assets::url_filter;
///
/// assert!(url_filter("./styles/main.scss"));
/// assert!(url_filter("/app.js"));
/// assert!(!url_filter("/images/logo.png"));
/// assert!(!url_filter("/app.js?v=2"));
/// ```
#[must_use]
pub fn url_filter(value: &str) -> bool {
    FILTERED_EXTENSIONS.iter().any(|ext| value.ends_with(ext))
}

fn is_local(value: &str) -> bool {
    !value.starts_with("//") && !SCHEME.is_match(value)
}

fn sass_syntax(source: &Path) -> Option<InputSyntax> {
    match source.extension().and_then(|e| e.to_str()) {
        Some("scss") => Some(InputSyntax::Scss),
        Some("sass") => Some(InputSyntax::Sass),
        _ => None,
    }
}

/// Compile a Sass source to CSS. Imports resolve against its directory.
fn compile_sass(source: &Path, syntax: InputSyntax) -> Result<String> {
    let options = grass::Options::default().input_syntax(syntax);
    grass::from_path(source, &options).map_err(|e| Error::StylesheetCompile {
        path: source.to_path_buf(),
        message: e.to_string(),
    })
}

/// A fingerprinted file to be written at the output root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAsset {
    /// The source file it was read from.
    pub source: PathBuf,
    /// `<hash>.<ext>`, relative to the output root.
    pub file_name: String,
    /// File contents, compiled when the source is Sass.
    pub contents: Vec<u8>,
}

/// Rewrites asset references across the pages of one build.
///
/// Assets are deduplicated by content, so two pages sharing a stylesheet
/// produce a single file. Each source is read (or compiled) once.
#[derive(Debug)]
pub struct AssetPipeline<'a> {
    source_root: &'a Path,
    hash_length: usize,
    assets: BTreeMap<String, EmittedAsset>,
    names: BTreeMap<PathBuf, String>,
}

impl<'a> AssetPipeline<'a> {
    /// Create a pipeline for sources under `source_root`, naming files with
    /// the first `hash_length` hex characters of their SHA-256.
    #[must_use]
    pub fn new(source_root: &'a Path, hash_length: usize) -> Self {
        Self {
            source_root,
            hash_length,
            assets: BTreeMap::new(),
            names: BTreeMap::new(),
        }
    }

    /// Rewrite the `<script src>` and `<link href>` references of a page.
    ///
    /// `template` is the page's source file and `page_output` its output
    /// name (as in [`Entry::output`](crate::Entry::output)), which decides
    /// how many `../` the rewritten reference needs.
    ///
    /// # Errors
    ///
    /// Returns [`Error::AssetNotFound`] for a local reference with no file
    /// behind it, [`Error::StylesheetCompile`] for Sass that does not
    /// compile, or an I/O error if the file cannot be read.
    pub fn rewrite(&mut self, html: &str, template: &Path, page_output: &str) -> Result<String> {
        let prefix = "../".repeat(page_output.matches('/').count());
        let mut failure = None;

        let rewritten = ASSET_TAG.replace_all(html, |tag: &Captures<'_>| {
            let whole = &tag[0];
            if failure.is_some() {
                return whole.to_string();
            }

            let attribute = if tag[1].eq_ignore_ascii_case("script") {
                "src"
            } else {
                "href"
            };
            match self.rewrite_tag(whole, attribute, template, &prefix) {
                Ok(rewritten) => rewritten,
                Err(e) => {
                    failure = Some(e);
                    whole.to_string()
                }
            }
        });

        match failure {
            Some(e) => Err(e),
            None => Ok(rewritten.into_owned()),
        }
    }

    fn rewrite_tag(
        &mut self,
        tag: &str,
        attribute: &str,
        template: &Path,
        prefix: &str,
    ) -> Result<String> {
        let Some(caps) = URL_ATTRIBUTE
            .captures_iter(tag)
            .find(|caps| caps[2].eq_ignore_ascii_case(attribute))
        else {
            return Ok(tag.to_string());
        };

        let (value, quote) = match (caps.get(4), caps.get(5)) {
            (Some(v), _) => (v.as_str(), '"'),
            (None, Some(v)) => (v.as_str(), '\''),
            (None, None) => return Ok(tag.to_string()),
        };
        if !url_filter(value) || !is_local(value) {
            return Ok(tag.to_string());
        }

        let file_name = self.emit(value, template)?;
        let span = caps.get(0).map_or(0..0, |m| m.range());
        Ok(format!(
            "{}{}{}{}{quote}{prefix}{file_name}{quote}{}",
            &tag[..span.start],
            &caps[1],
            &caps[2],
            &caps[3],
            &tag[span.end..]
        ))
    }

    fn emit(&mut self, value: &str, template: &Path) -> Result<String> {
        let source = self.locate(value, template)?;
        if let Some(name) = self.names.get(&source) {
            return Ok(name.clone());
        }
        if !source.is_file() {
            return Err(Error::AssetNotFound {
                reference: value.to_string(),
                template: template.to_path_buf(),
            });
        }

        let (contents, extension) = match sass_syntax(&source) {
            Some(syntax) => {
                log::debug!("compiling {}", source.display());
                (compile_sass(&source, syntax)?.into_bytes(), "css")
            }
            None => (
                fs::read(&source)?,
                source
                    .extension()
                    .and_then(|e| e.to_str())
                    .unwrap_or_default(),
            ),
        };
        let digest = hex::encode(Sha256::digest(&contents));
        let file_name = format!("{}.{extension}", &digest[..self.hash_length.min(digest.len())]);

        log::debug!("fingerprinted {} as {file_name}", source.display());
        self.names.insert(source.clone(), file_name.clone());
        self.assets
            .entry(file_name.clone())
            .or_insert_with(|| EmittedAsset {
                source,
                file_name: file_name.clone(),
                contents,
            });
        Ok(file_name)
    }

    fn locate(&self, value: &str, template: &Path) -> Result<PathBuf> {
        let joined = match value.strip_prefix('/') {
            Some(rooted) => self.source_root.join(rooted),
            None => template
                .parent()
                .unwrap_or_else(|| Path::new(""))
                .join(value),
        };
        resolve_components(&joined).map_err(|_| Error::AssetNotFound {
            reference: value.to_string(),
            template: template.to_path_buf(),
        })
    }

    /// Number of distinct assets collected so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.assets.len()
    }

    /// Whether no asset has been collected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.assets.is_empty()
    }

    /// Consume the pipeline, yielding the assets sorted by file name.
    #[must_use]
    pub fn finish(self) -> Vec<EmittedAsset> {
        self.assets.into_values().collect()
    }
}
