//! Moves inline `<style>` blocks into the document head.

use std::sync::LazyLock;

use regex::Regex;

static STYLE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<style(?:\s[^>]*)?>(.*?)</style\s*>").expect("style regex is valid")
});

static HEAD_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)<head(?:\s[^>]*)?>").expect("head regex is valid"));

static HEAD_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head\s*>").expect("head regex is valid"));

/// Gather every `<style>` block of `html` into a single element in `<head>`.
///
/// The element goes just before `</head>`, or right after `<head>` when the
/// head is never closed, or at the very start when there is no head.
///
/// # Examples
///
/// ```
/// use stitch::template::collect_styles;
///
/// let html = "<head><title>t</title></head><body><style>p{}</style><p>x</p></body>";
/// assert_eq!(
///     collect_styles(html),
///     "<head><title>t</title><style>p{}</style></head><body><p>x</p></body>"
/// );
/// ```
#[must_use]
pub fn collect_styles(html: &str) -> String {
    let bodies: Vec<&str> = STYLE_BLOCK
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str().trim())
        .collect();

    if bodies.is_empty() {
        return html.to_string();
    }

    let element = format!("<style>{}</style>", bodies.join("\n"));
    let stripped = STYLE_BLOCK.replace_all(html, "");

    if let Some(close) = HEAD_CLOSE.find(&stripped) {
        return splice(&stripped, close.start(), &element);
    }
    if let Some(open) = HEAD_OPEN.find(&stripped) {
        return splice(&stripped, open.end(), &element);
    }
    format!("{element}{stripped}")
}

fn splice(html: &str, at: usize, insert: &str) -> String {
    let mut out = String::with_capacity(html.len() + insert.len());
    out.push_str(&html[..at]);
    out.push_str(insert);
    out.push_str(&html[at..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_styles_unchanged() {
        let html = "<html><head></head><body>x</body></html>";
        assert_eq!(collect_styles(html), html);
    }

    #[test]
    fn test_multiple_blocks_joined_in_order() {
        let html = "<head></head><style>a{}</style><div></div><STYLE media=\"print\">\n b{} \n</STYLE>";
        assert_eq!(
            collect_styles(html),
            "<head><style>a{}\nb{}</style></head><div></div>"
        );
    }

    #[test]
    fn test_existing_head_style_is_kept_first() {
        let html = "<head><style>h{}</style></head><body><style>b{}</style></body>";
        assert_eq!(
            collect_styles(html),
            "<head><style>h{}\nb{}</style></head><body></body>"
        );
    }

    #[test]
    fn test_unclosed_head() {
        let html = "<head lang=\"en\"><title>t</title><style>x{}</style>";
        assert_eq!(
            collect_styles(html),
            "<head lang=\"en\"><style>x{}</style><title>t</title>"
        );
    }

    #[test]
    fn test_no_head_prepends() {
        assert_eq!(
            collect_styles("<p>x</p><style>p{}</style>"),
            "<style>p{}</style><p>x</p>"
        );
    }

    #[test]
    fn test_header_element_is_not_head() {
        let html = "<header>h</header><style>p{}</style>";
        assert_eq!(collect_styles(html), "<style>p{}</style><header>h</header>");
    }
}
