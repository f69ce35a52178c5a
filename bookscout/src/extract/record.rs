//! Extracted book metadata.

use serde::{Deserialize, Serialize};

/// Metadata extracted from one book detail page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRecord {
    /// Book identifier.
    pub id: u64,
    /// Book title.
    #[serde(default)]
    pub title: String,
    /// First listed author.
    #[serde(default)]
    pub author: String,
    /// Annotation text, line breaks as `\n`.
    #[serde(default)]
    pub synopsis: String,
    /// Downloadable formats in page order.
    #[serde(default)]
    pub formats: Vec<String>,
    /// False when the catalog has no such book.
    #[serde(default)]
    pub found: bool,
}

impl DocumentRecord {
    /// The record for a book the catalog does not have.
    #[must_use]
    pub fn not_found(id: u64) -> Self {
        Self {
            id,
            ..Default::default()
        }
    }

    /// Creates a found record with just a title.
    #[must_use]
    pub fn titled(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            found: true,
            ..Default::default()
        }
    }

    /// Sets the author.
    #[must_use]
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = author.into();
        self
    }

    /// Sets the synopsis.
    #[must_use]
    pub fn with_synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = synopsis.into();
        self
    }

    /// Sets the formats.
    #[must_use]
    pub fn with_formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Whether `format` can be downloaded for this book.
    #[must_use]
    pub fn supports_format(&self, format: &str) -> bool {
        self.formats.iter().any(|f| f == format)
    }
}
