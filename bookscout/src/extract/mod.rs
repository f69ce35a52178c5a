//! Metadata extraction from book detail pages.
//!
//! This module provides:
//! - The [`DocumentRecord`] model
//! - Independent, swappable field extractors
//! - The [`DocumentExtractor`] that composes them
//! - Plain-text conversion of extracted fragments

mod document;
mod fields;
mod record;
mod text;

pub use document::DocumentExtractor;
pub use fields::{AuthorField, FieldExtractor, FormatLinks, SynopsisField, TitleField};
pub use record::DocumentRecord;
pub use text::{decode_entities, plain_text};
