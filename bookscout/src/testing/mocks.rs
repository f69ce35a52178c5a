//! In-memory catalog for testing.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::HashMap;

use crate::catalog::{BookFile, Catalog, SearchHit};
use crate::errors::{BookscoutError, Result};

/// A catalog serving canned responses and recording every request.
///
/// Unknown searches return no hits, unknown pages a 404 and unknown files
/// [`BookscoutError::BookUnavailable`].
#[derive(Debug, Default)]
pub struct StaticCatalog {
    searches: HashMap<String, Vec<SearchHit>>,
    pages: HashMap<u64, String>,
    files: HashMap<(u64, String), BookFile>,
    failing_search: bool,
    search_calls: Mutex<Vec<String>>,
    page_calls: Mutex<Vec<u64>>,
    download_calls: Mutex<Vec<(u64, String)>>,
}

impl StaticCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers search results for a query.
    #[must_use]
    pub fn with_search(mut self, query: impl Into<String>, hits: Vec<SearchHit>) -> Self {
        self.searches.insert(query.into(), hits);
        self
    }

    /// Registers a detail page.
    #[must_use]
    pub fn with_page(mut self, id: u64, html: impl Into<String>) -> Self {
        self.pages.insert(id, html.into());
        self
    }

    /// Registers a downloadable file.
    #[must_use]
    pub fn with_file(
        mut self,
        id: u64,
        format: impl Into<String>,
        file_name: impl Into<String>,
        bytes: impl Into<Vec<u8>>,
    ) -> Self {
        self.files.insert(
            (id, format.into()),
            BookFile {
                id,
                file_name: file_name.into(),
                bytes: bytes.into(),
            },
        );
        self
    }

    /// Makes every search fail with a 503.
    #[must_use]
    pub fn with_failing_search(mut self) -> Self {
        self.failing_search = true;
        self
    }

    /// Queries searched so far.
    #[must_use]
    pub fn search_calls(&self) -> Vec<String> {
        self.search_calls.lock().clone()
    }

    /// Book pages fetched so far.
    #[must_use]
    pub fn page_calls(&self) -> Vec<u64> {
        self.page_calls.lock().clone()
    }

    /// Downloads requested so far.
    #[must_use]
    pub fn download_calls(&self) -> Vec<(u64, String)> {
        self.download_calls.lock().clone()
    }
}

#[async_trait]
impl Catalog for StaticCatalog {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        self.search_calls.lock().push(query.to_string());
        if self.failing_search {
            return Err(BookscoutError::HttpStatus {
                status: 503,
                url: format!("static://booksearch?ask={query}"),
            });
        }
        Ok(self.searches.get(query).cloned().unwrap_or_default())
    }

    async fn fetch_book_page(&self, id: u64) -> Result<String> {
        self.page_calls.lock().push(id);
        self.pages
            .get(&id)
            .cloned()
            .ok_or_else(|| BookscoutError::HttpStatus {
                status: 404,
                url: format!("static://b/{id}"),
            })
    }

    async fn download(&self, id: u64, format: &str) -> Result<BookFile> {
        self.download_calls.lock().push((id, format.to_string()));
        self.files
            .get(&(id, format.to_string()))
            .cloned()
            .ok_or(BookscoutError::BookUnavailable { id })
    }
}
