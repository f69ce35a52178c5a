//! Data models exchanged with the catalog.

use serde::{Deserialize, Serialize};

/// A book as listed in search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRef {
    /// Book identifier.
    pub id: u64,
    /// Listed title.
    pub title: String,
}

/// An author as listed in search results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorRef {
    /// Author identifier.
    pub id: u64,
    /// Display name.
    pub name: String,
}

/// One search result: a book and its authors, in catalog order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHit {
    /// The book.
    pub book: BookRef,
    /// Its authors.
    #[serde(default)]
    pub authors: Vec<AuthorRef>,
}

impl SearchHit {
    /// Creates a hit without authors.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            book: BookRef {
                id,
                title: title.into(),
            },
            authors: Vec::new(),
        }
    }

    /// Adds an author.
    #[must_use]
    pub fn with_author(mut self, id: u64, name: impl Into<String>) -> Self {
        self.authors.push(AuthorRef {
            id,
            name: name.into(),
        });
        self
    }

    /// Author names joined with `", "`.
    #[must_use]
    pub fn author_names(&self) -> String {
        self.authors
            .iter()
            .map(|a| a.name.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A downloaded book file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookFile {
    /// Book identifier.
    pub id: u64,
    /// File name announced by the catalog.
    pub file_name: String,
    /// File contents.
    pub bytes: Vec<u8>,
}

impl BookFile {
    /// Size of the file in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}
