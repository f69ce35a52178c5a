//! Request-level orchestration for the chat transport.
//!
//! [`BookBrowser`] wires the catalog collaborator to the pure components:
//! search results go through the [`ResultSetPresenter`], detail pages through
//! the [`DocumentExtractor`], and random picks through the
//! [`CandidateSampler`]. Catalog failures on the browsing paths degrade to
//! "no results" or "not found" instead of surfacing as errors.

use serde::Serialize;
use uuid::Uuid;

use crate::callback::{CallbackAction, CallbackCodec};
use crate::catalog::{BookFile, Catalog};
use crate::config::BrowseConfig;
use crate::errors::{BookscoutError, Result};
use crate::extract::{DocumentExtractor, DocumentRecord};
use crate::observability::RequestTimer;
use crate::pagination::total_pages;
use crate::presenter::{render_caption, render_card, BookCard, Presentation, ResultSetPresenter};
use crate::sampler::{CandidateSampler, SamplingOutcome};

/// Reply to a pressed button.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum BrowseReply {
    /// A page of search results, replacing the previous one.
    Listing(Presentation),
    /// A book file with its caption.
    File {
        /// Caption text (HTML).
        caption: String,
        /// File name.
        file_name: String,
        /// File size in bytes.
        size: usize,
        /// File contents.
        #[serde(skip)]
        bytes: Vec<u8>,
    },
}

impl BrowseReply {
    fn file(caption: String, file: BookFile) -> Self {
        Self::File {
            caption,
            file_name: file.file_name,
            size: file.bytes.len(),
            bytes: file.bytes,
        }
    }
}

/// Browsing service over a catalog.
#[derive(Debug)]
pub struct BookBrowser<C> {
    catalog: C,
    config: BrowseConfig,
    presenter: ResultSetPresenter,
    extractor: DocumentExtractor,
    sampler: CandidateSampler,
    codec: CallbackCodec,
}

impl<C: Catalog> BookBrowser<C> {
    /// Creates a browser.
    #[must_use]
    pub fn new(catalog: C, config: BrowseConfig) -> Self {
        Self {
            presenter: ResultSetPresenter::new(config.page_size),
            extractor: DocumentExtractor::new(config.extraction.clone()),
            sampler: CandidateSampler::new(config.sampler.clone()),
            codec: CallbackCodec::new(config.callback.clone()),
            catalog,
            config,
        }
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &BrowseConfig {
        &self.config
    }

    /// Gets the callback codec used for every button this browser renders.
    #[must_use]
    pub fn codec(&self) -> &CallbackCodec {
        &self.codec
    }

    /// Gets the catalog.
    #[must_use]
    pub fn catalog(&self) -> &C {
        &self.catalog
    }

    /// Searches and renders `page` of the results.
    ///
    /// The page is clamped into the available range. A failed search renders
    /// like an empty one.
    pub async fn search(&self, query: &str, page: u32) -> Presentation {
        let request_id = Uuid::new_v4();
        let timer = RequestTimer::start("search");
        let hits = match self.catalog.search(query).await {
            Ok(hits) => hits,
            Err(e) => {
                tracing::warn!(%request_id, query, error = %e, "Catalog search failed");
                Vec::new()
            }
        };

        let last_page = total_pages(hits.len(), self.presenter.page_size()).max(1);
        let page = page.clamp(1, last_page);
        tracing::info!(%request_id, query, hits = hits.len(), page, "Rendering search page");

        let presentation = self.presenter.present(query, page, &hits);
        timer.finish();
        presentation
    }

    /// Fetches and extracts a book. Fetch failures read as "not found".
    pub async fn book(&self, id: u64) -> DocumentRecord {
        match self.catalog.fetch_book_page(id).await {
            Ok(html) => self.extractor.extract(&html, id),
            Err(e) => {
                tracing::warn!(book_id = id, error = %e, "Book page fetch failed");
                DocumentRecord::not_found(id)
            }
        }
    }

    /// The detail card of a book, or `None` if the catalog has no such book.
    pub async fn book_card(&self, id: u64) -> Option<BookCard> {
        let record = self.book(id).await;
        record.found.then(|| render_card(&record))
    }

    /// Picks a random existing book.
    pub async fn random_book(&self) -> SamplingOutcome {
        let timer = RequestTimer::start("random_book");
        let outcome = self.sampler.sample_valid(|id| self.book(id)).await;
        tracing::info!(
            book_id = outcome.record.id,
            attempts = outcome.attempts,
            used_fallback = outcome.used_fallback,
            "Random book chosen"
        );
        timer.finish();
        outcome
    }

    /// Downloads a book in a format the book page offers.
    pub async fn download(&self, id: u64, format: &str) -> Result<(String, BookFile)> {
        let record = self.book(id).await;
        if !record.found {
            return Err(BookscoutError::BookUnavailable { id });
        }
        if !record.supports_format(format) {
            return Err(BookscoutError::UnsupportedFormat {
                id,
                format: format.to_string(),
            });
        }

        let file = self.catalog.download(id, format).await?;
        Ok((render_caption(&record), file))
    }

    /// Decodes a button payload and performs the requested action.
    pub async fn handle_callback(&self, payload: &str) -> Result<BrowseReply> {
        match self.codec.decode(payload)? {
            CallbackAction::Page { query, page } => {
                Ok(BrowseReply::Listing(self.search(&query, page).await))
            }
            CallbackAction::Download { id, format } => {
                let (caption, file) = self.download(id, &format).await?;
                Ok(BrowseReply::file(caption, file))
            }
        }
    }
}
