//! Parsing of the catalog's search result page.

use scraper::{Html, Selector};

use super::models::{AuthorRef, SearchHit};

/// Parses search hits from a search result page, in document order.
///
/// Every list item with a `/b/{id}` link is a book; `/a/{id}` links in the
/// same item are its authors. Items without a book link (author or series
/// sections) are skipped.
#[must_use]
pub fn parse_search_results(html: &str) -> Vec<SearchHit> {
    let document = Html::parse_document(html);
    let (Ok(item_selector), Ok(link_selector)) = (Selector::parse("li"), Selector::parse("a[href]"))
    else {
        return Vec::new();
    };

    let mut hits = Vec::new();
    for item in document.select(&item_selector) {
        let mut hit: Option<SearchHit> = None;
        let mut authors = Vec::new();

        for link in item.select(&link_selector) {
            let href = link.value().attr("href").unwrap_or_default();
            let text = link.text().collect::<String>().trim().to_string();

            if let Some(id) = path_id(href, "/b/") {
                if hit.is_none() {
                    hit = Some(SearchHit::new(id, text));
                }
            } else if let Some(id) = path_id(href, "/a/") {
                authors.push(AuthorRef { id, name: text });
            }
        }

        if let Some(mut hit) = hit {
            hit.authors = authors;
            hits.push(hit);
        }
    }

    tracing::debug!(hits = hits.len(), "Parsed search page");
    hits
}

fn path_id(href: &str, prefix: &str) -> Option<u64> {
    href.strip_prefix(prefix)?.parse().ok()
}
