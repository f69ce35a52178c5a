//! Error types for bookscout.
//!
//! The core (pagination, extraction, sampling, presentation) never fails:
//! absent data degrades to defaults. These errors belong to the adapters
//! around it: the catalog collaborator, the callback codec and configuration.

use thiserror::Error;

/// Convenience result alias.
pub type Result<T, E = BookscoutError> = std::result::Result<T, E>;

/// The main error type for bookscout operations.
#[derive(Debug, Error)]
pub enum BookscoutError {
    /// The HTTP request itself failed (connect, timeout, body read).
    #[error("HTTP error: {0}")]
    Http(String),

    /// The catalog answered with a non-success status.
    #[error("Catalog returned status {status} for {url}")]
    HttpStatus {
        /// HTTP status code.
        status: u16,
        /// Requested URL.
        url: String,
    },

    /// The catalog served no file for the requested book.
    #[error("Book {id} unavailable")]
    BookUnavailable {
        /// Book identifier.
        id: u64,
    },

    /// The requested format is not offered for the book.
    #[error("Book {id} is not available as '{format}'")]
    UnsupportedFormat {
        /// Book identifier.
        id: u64,
        /// Requested format tag.
        format: String,
    },

    /// A callback payload could not be decoded.
    #[error("Invalid callback payload: {0}")]
    InvalidCallback(String),

    /// A callback payload refers to a query digest that is no longer cached.
    #[error("Callback query '{0}' has expired")]
    ExpiredCallback(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(feature = "catalog")]
impl From<reqwest::Error> for BookscoutError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => Self::HttpStatus {
                status: status.as_u16(),
                url: err.url().map(ToString::to_string).unwrap_or_default(),
            },
            None => Self::Http(err.to_string()),
        }
    }
}

impl BookscoutError {
    /// Whether the error came from talking to the catalog.
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            Self::Http(_) | Self::HttpStatus { .. } | Self::BookUnavailable { .. }
        )
    }
}
