//! Conservative HTML minification.

use std::sync::LazyLock;

use regex::Regex;

static COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").expect("comment regex is valid"));

static BETWEEN_TAGS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r">\s+<").expect("whitespace regex is valid"));

static PRESERVING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<(?:pre|textarea)[\s>]").expect("pre regex is valid"));

/// Strip comments and layout whitespace from `html`.
///
/// Conditional comments (`<!--[if ...]>`) survive. A document containing
/// `<pre>` or `<textarea>` only loses its comments, since its whitespace
/// may be significant.
///
/// # Examples
///
/// ```
/// use stitch::template::minify_html;
///
/// let html = "<ul>\n  <!-- items -->\n  <li>a</li>\n\n  <li>b</li>\n</ul>\n";
/// assert_eq!(minify_html(html), "<ul><li>a</li><li>b</li></ul>");
/// ```
#[must_use]
pub fn minify_html(html: &str) -> String {
    let without_comments = COMMENT.replace_all(html, |caps: &regex::Captures<'_>| {
        let comment = &caps[0];
        if comment.starts_with("<!--[if") {
            comment.to_string()
        } else {
            String::new()
        }
    });

    if PRESERVING.is_match(&without_comments) {
        return without_comments.into_owned();
    }

    let lines: Vec<&str> = without_comments
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect();

    BETWEEN_TAGS.replace_all(&lines.join("\n"), "><").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comments_removed() {
        assert_eq!(minify_html("<p>a<!-- x\n y -->b</p>"), "<p>ab</p>");
    }

    #[test]
    fn test_conditional_comment_kept() {
        let html = "<!--[if IE]><p>old</p><![endif]-->\n<p>new</p>";
        assert_eq!(minify_html(html), "<!--[if IE]><p>old</p><![endif]--><p>new</p>");
    }

    #[test]
    fn test_text_lines_keep_a_newline() {
        assert_eq!(minify_html("<p>\n  one\n  two\n</p>"), "<p>\none\ntwo\n</p>");
    }

    #[test]
    fn test_pre_only_loses_comments() {
        let html = "<div>\n  <pre>\n  keep   this\n  </pre><!-- gone -->\n</div>";
        assert_eq!(
            minify_html(html),
            "<div>\n  <pre>\n  keep   this\n  </pre>\n</div>"
        );
    }

    #[test]
    fn test_textarea_only_loses_comments() {
        let html = "<textarea>\n x </textarea>\n\n<p>a</p>";
        assert_eq!(minify_html(html), html);
    }

    #[test]
    fn test_prefix_is_not_pre() {
        assert_eq!(minify_html("<preview>\n  x\n</preview>"), "<preview>\nx\n</preview>");
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(minify_html(""), "");
        assert_eq!(minify_html("\n\n  \n"), "");
    }
}
