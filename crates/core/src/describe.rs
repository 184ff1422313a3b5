//! Description text helpers.
//!
//! Descriptions are free text from the spreadsheet and must be treated as
//! untrusted. Everything outside a detected URL is HTML-escaped before any
//! link markup is added.

use html_escape::{encode_double_quoted_attribute, encode_text};
use once_cell::sync::Lazy;
use regex::Regex;

static URL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"(http|ftp|https)://([\w_-]+(?:(?:\.[\w_-]+)+))([\w.,@?^=%&:/~+#-]*[\w@?^=%&/~+#-])",
    )
    .unwrap()
});

/// Splits a description into non-empty lines. Runs of newlines collapse.
///
/// Leading and trailing newlines produce no paragraph, so a description
/// never renders an empty `<p>` at either end.
pub fn paragraphs(description: &str) -> Vec<&str> {
    description
        .split('\n')
        .filter(|line| !line.is_empty())
        .collect()
}

/// URLs found in a line, in order.
pub fn links(line: &str) -> Vec<&str> {
    URL_RE.find_iter(line).map(|m| m.as_str()).collect()
}

/// Escapes a line for HTML and turns URLs into links.
pub fn linkify_html(line: &str) -> String {
    let mut out = String::with_capacity(line.len());
    let mut last = 0;
    for m in URL_RE.find_iter(line) {
        out.push_str(&encode_text(&line[last..m.start()]));
        let url = m.as_str();
        out.push_str(&format!(
            r#"<a href="{}" target="_blank" rel="noreferrer">{}</a>"#,
            encode_double_quoted_attribute(url),
            encode_text(url)
        ));
        last = m.end();
    }
    out.push_str(&encode_text(&line[last..]));
    out
}

/// Renders a whole description as HTML paragraphs.
pub fn description_html(description: &str) -> String {
    paragraphs(description)
        .into_iter()
        .map(|line| format!("<p>{}</p>", linkify_html(line)))
        .collect::<Vec<_>>()
        .join("\n")
}
