//! Protocol trait for the catalog collaborator.

use async_trait::async_trait;

use super::models::{BookFile, SearchHit};
use crate::errors::BookscoutError;

/// The upstream book catalog.
///
/// Implementations perform the network calls; everything in this crate that
/// consumes a catalog only sees text, search hits and files.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Searches books by title, in catalog relevance order.
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>, BookscoutError>;

    /// Fetches the raw detail page of a book.
    async fn fetch_book_page(&self, id: u64) -> Result<String, BookscoutError>;

    /// Downloads a book in one of its formats.
    async fn download(&self, id: u64, format: &str) -> Result<BookFile, BookscoutError>;
}

/// Path of a book's detail page.
#[must_use]
pub fn book_path(id: u64) -> String {
    format!("b/{id}")
}

/// Path of a book file in a format.
#[must_use]
pub fn download_path(id: u64, format: &str) -> String {
    format!("b/{id}/{format}")
}

/// Recovers the file name from a `Content-Disposition` header value.
///
/// Quotes are stripped; an absent or empty name yields `None`.
#[must_use]
pub fn file_name_from_disposition(header: &str) -> Option<String> {
    let lower = header.to_ascii_lowercase();
    let start = lower.find("filename=")? + "filename=".len();
    let rest = &header[start..];
    let end = rest.find(';').unwrap_or(rest.len());
    let name: String = rest[..end]
        .chars()
        .filter(|c| *c != '"' && *c != '\'')
        .collect();
    let name = name.trim();
    (!name.is_empty()).then(|| name.to_string())
}
