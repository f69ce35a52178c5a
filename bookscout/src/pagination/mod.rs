//! Pagination of search results.
//!
//! This module provides:
//! - Page tokens with first/previous/current/next/last semantics
//! - The bounded sliding window layout
//! - Page count and page slicing helpers

mod token;
mod window;

pub use token::{PageToken, TokenKind};
pub use window::{compute_layout, page_slice, total_pages, PageLayout, MAX_TOKENS};
