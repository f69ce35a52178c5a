//! The upstream book catalog.
//!
//! This module provides:
//! - Data models for search hits and downloaded files
//! - The [`Catalog`] collaborator trait
//! - An HTTP implementation and a search page parser (feature `catalog`)

mod models;
mod protocols;

#[cfg(feature = "catalog")]
mod http;
#[cfg(feature = "catalog")]
mod search_page;

pub use models::{AuthorRef, BookFile, BookRef, SearchHit};
pub use protocols::{book_path, download_path, file_name_from_disposition, Catalog};

#[cfg(test)]
pub use protocols::MockCatalog;

#[cfg(feature = "catalog")]
pub use http::HttpCatalog;
#[cfg(feature = "catalog")]
pub use search_page::parse_search_results;
