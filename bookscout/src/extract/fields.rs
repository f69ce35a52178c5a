//! Independent field extractors for book detail pages.
//!
//! Each extractor looks for one field and returns `None` when the page does
//! not carry it. None of them can fail.

use regex::Regex;
use std::fmt::Debug;
use std::sync::LazyLock;

use super::text::plain_text;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)<title>(?P<title>[\w\W][^()|]+).*</title>").expect("title pattern is valid")
});

static AUTHOR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?i)/script><a href="/a/[0-9]+">(?P<author>[\w\W][^<>()|]+)</a>"#)
        .expect("author pattern is valid")
});

static FORMAT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"/b/(?P<id>[0-9]+)/(?P<format>[A-Za-z0-9_]+)""#).expect("format pattern is valid")
});

/// Line break marker used inside annotations.
const LINE_BREAK: &str = "<br />";

/// Extracts a single text field from a page.
pub trait FieldExtractor: Send + Sync + Debug {
    /// Name of the field, for logging.
    fn name(&self) -> &'static str;

    /// Returns the field value if the page has one.
    fn extract(&self, html: &str) -> Option<String>;
}

/// Page title as plain text, cut before the first `(` or `|` (format and site suffixes).
#[derive(Debug, Clone, Copy, Default)]
pub struct TitleField;

impl FieldExtractor for TitleField {
    fn name(&self) -> &'static str {
        "title"
    }

    fn extract(&self, html: &str) -> Option<String> {
        TITLE_RE
            .captures(html)
            .and_then(|caps| caps.name("title"))
            .map(|m| plain_text(m.as_str()))
    }
}

/// First author link directly after the header script block.
#[derive(Debug, Clone, Copy, Default)]
pub struct AuthorField;

impl FieldExtractor for AuthorField {
    fn name(&self) -> &'static str {
        "author"
    }

    fn extract(&self, html: &str) -> Option<String> {
        AUTHOR_RE
            .captures(html)
            .and_then(|caps| caps.name("author"))
            .map(|m| plain_text(m.as_str()))
    }
}

/// Paragraph following the annotation heading, as plain text with line breaks kept.
#[derive(Debug, Clone)]
pub struct SynopsisField {
    marker: String,
}

impl SynopsisField {
    /// Creates an extractor for the paragraph after `<h2>{heading}</h2>`.
    #[must_use]
    pub fn new(heading: &str) -> Self {
        Self {
            marker: format!("<h2>{heading}</h2>\n<p>"),
        }
    }
}

impl FieldExtractor for SynopsisField {
    fn name(&self) -> &'static str {
        "synopsis"
    }

    fn extract(&self, html: &str) -> Option<String> {
        let start = html.find(&self.marker)? + self.marker.len();
        let rest = &html[start..];
        let end = rest.find("</p>")?;
        Some(plain_text(&rest[..end].replace(LINE_BREAK, "\n")))
    }
}

/// Download links under the book's own `/b/{id}/` path.
#[derive(Debug, Clone)]
pub struct FormatLinks {
    read_sentinel: String,
}

impl FormatLinks {
    /// Creates an extractor that skips the `read_sentinel` pseudo-format.
    #[must_use]
    pub fn new(read_sentinel: impl Into<String>) -> Self {
        Self {
            read_sentinel: read_sentinel.into(),
        }
    }

    /// Distinct formats for book `id`, in page order.
    #[must_use]
    pub fn extract(&self, html: &str, id: u64) -> Vec<String> {
        let id = id.to_string();
        let mut formats: Vec<String> = Vec::new();

        for caps in FORMAT_RE.captures_iter(html) {
            if caps.name("id").map(|m| m.as_str()) != Some(id.as_str()) {
                continue;
            }
            let Some(format) = caps.name("format").map(|m| m.as_str()) else {
                continue;
            };
            if format == self.read_sentinel || formats.iter().any(|f| f == format) {
                continue;
            }
            formats.push(format.to_string());
        }

        formats
    }
}
