//! # Bookscout
//!
//! The core of a chat bot for browsing an online book catalog.
//!
//! Bookscout provides:
//!
//! - **Pagination**: a bounded five-button navigation window over search results
//! - **Metadata extraction**: title, author, synopsis and formats from a book page
//! - **Random sampling**: bounded search for an existing book in a sparse id space
//! - **Presentation**: listings, book cards and compact callback payloads
//! - **Catalog access**: an HTTP client for the catalog (feature `catalog`)
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use bookscout::prelude::*;
//!
//! let config = BrowseConfig::default().with_env_overrides()?;
//! let browser = BookBrowser::new(HttpCatalog::new(config.catalog.clone())?, config);
//!
//! let page = browser.search("стругацкие", 1).await;
//! for button in page.buttons(browser.codec())? {
//!     println!("{} -> {}", button.label, button.payload);
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    rust_2018_idioms
)]
#![allow(
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc
)]

pub mod browser;
pub mod callback;
pub mod catalog;
pub mod config;
pub mod errors;
pub mod extract;
pub mod observability;
pub mod pagination;
pub mod presenter;
pub mod sampler;
pub mod testing;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::browser::{BookBrowser, BrowseReply};
    pub use crate::callback::{CallbackAction, CallbackCodec};
    pub use crate::catalog::{BookFile, Catalog, SearchHit};
    pub use crate::config::{
        BrowseConfig, CallbackConfig, CatalogConfig, ExtractionConfig, SamplerConfig,
    };
    pub use crate::errors::{BookscoutError, Result};
    pub use crate::extract::{DocumentExtractor, DocumentRecord};
    pub use crate::pagination::{compute_layout, PageLayout, PageToken, TokenKind};
    pub use crate::presenter::{BookCard, InlineButton, Presentation, ResultSetPresenter};
    pub use crate::sampler::{CandidateSampler, SamplingOutcome};

    #[cfg(feature = "catalog")]
    pub use crate::catalog::HttpCatalog;
}
