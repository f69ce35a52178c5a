//! Testing utilities for code built on bookscout.
//!
//! This module provides:
//! - An in-memory, recording catalog
//! - HTML fixtures shaped like the catalog's pages

mod fixtures;
mod mocks;

pub use fixtures::{search_hits, BookPageFixture};
pub use mocks::StaticCatalog;
