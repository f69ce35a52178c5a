//! Paged listing of search results.

use serde::{Deserialize, Serialize};

use super::html::escape_html;
use crate::callback::{CallbackAction, CallbackCodec};
use crate::catalog::SearchHit;
use crate::errors::Result;
use crate::pagination::{compute_layout, page_slice, total_pages, PageLayout};

/// Body shown when the requested page has no results.
pub const EMPTY_BODY: &str = "no response";

/// An inline button: a label and the payload sent back when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InlineButton {
    /// Visible label.
    pub label: String,
    /// Callback payload.
    pub payload: String,
}

/// One rendered page of search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Presentation {
    /// Query the page belongs to.
    pub query: String,
    /// Message body (HTML).
    pub body: String,
    /// Navigation tokens.
    pub layout: PageLayout,
}

impl Presentation {
    /// Navigation buttons, each carrying a page request for this query.
    pub fn buttons(&self, codec: &CallbackCodec) -> Result<Vec<InlineButton>> {
        self.layout
            .iter()
            .map(|token| {
                Ok(InlineButton {
                    label: token.label(),
                    payload: codec.encode(&CallbackAction::page(&self.query, token.target_page))?,
                })
            })
            .collect()
    }

    /// Whether the page had no results.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body == EMPTY_BODY
    }
}

/// Renders one page of search results with its navigation.
#[derive(Debug, Clone)]
pub struct ResultSetPresenter {
    page_size: usize,
}

impl Default for ResultSetPresenter {
    fn default() -> Self {
        Self::new(5)
    }
}

impl ResultSetPresenter {
    /// Creates a presenter showing `page_size` hits per page.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self { page_size }
    }

    /// Gets the page size.
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Renders `current_page` of `results`.
    #[must_use]
    pub fn present(&self, query: &str, current_page: u32, results: &[SearchHit]) -> Presentation {
        let total = total_pages(results.len(), self.page_size);
        let layout = compute_layout(current_page, total);
        let hits = page_slice(results, current_page, self.page_size);

        let body = if hits.is_empty() {
            EMPTY_BODY.to_string()
        } else {
            let mut body = format!("Found {} books\n\n", results.len());
            for hit in hits {
                render_hit(&mut body, hit);
                body.push('\n');
            }
            body
        };

        Presentation {
            query: query.to_string(),
            body,
            layout,
        }
    }
}

fn render_hit(out: &mut String, hit: &SearchHit) {
    let authors = hit
        .authors
        .iter()
        .map(|a| escape_html(&a.name))
        .collect::<Vec<_>>()
        .join(", ");
    out.push_str(&format!(
        "<b>{}</b>\n{}\nDownload /download{}\n",
        escape_html(&hit.book.title),
        authors,
        hit.book.id
    ));
}
