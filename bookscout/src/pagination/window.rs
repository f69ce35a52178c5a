//! Sliding page window.

use super::token::{PageToken, TokenKind};

/// Largest number of tokens in a layout.
pub const MAX_TOKENS: u32 = 5;

/// Ordered navigation tokens for one page of results.
pub type PageLayout = Vec<PageToken>;

/// Computes the navigation layout for `current_page` out of `total_pages`.
///
/// Up to [`MAX_TOKENS`] pages are listed literally. Beyond that a five token
/// window is used: the head window (pages 1-3, then next and last), the
/// middle window (first, previous, current, next, last) or the tail window
/// (first, previous, then the last three pages).
///
/// `current_page` must lie in `[1, total_pages]`. Other values do not panic
/// but the layout is unspecified.
#[must_use]
pub fn compute_layout(current_page: u32, total_pages: u32) -> PageLayout {
    if total_pages <= MAX_TOKENS {
        return (1..=total_pages)
            .map(|page| PageToken::numbered(page, current_page))
            .collect();
    }

    // The three ranges are disjoint once total_pages > 5.
    match current_page {
        c if c <= 3 => vec![
            PageToken::numbered(1, c),
            PageToken::numbered(2, c),
            PageToken::numbered(3, c),
            PageToken::new(TokenKind::Next, 4),
            PageToken::new(TokenKind::Last, total_pages),
        ],
        c if c <= total_pages - 3 => vec![
            PageToken::new(TokenKind::First, 1),
            PageToken::new(TokenKind::Previous, c - 1),
            PageToken::new(TokenKind::Current, c),
            PageToken::new(TokenKind::Next, c + 1),
            PageToken::new(TokenKind::Last, total_pages),
        ],
        c => vec![
            PageToken::new(TokenKind::First, 1),
            PageToken::new(TokenKind::Previous, total_pages - 3),
            PageToken::numbered(total_pages - 2, c),
            PageToken::numbered(total_pages - 1, c),
            PageToken::numbered(total_pages, c),
        ],
    }
}

/// Number of pages needed for `item_count` items.
#[must_use]
pub fn total_pages(item_count: usize, page_size: usize) -> u32 {
    if page_size == 0 {
        return 0;
    }
    u32::try_from(item_count.div_ceil(page_size)).unwrap_or(u32::MAX)
}

/// The items shown on `page` (1-based). Pages out of range are empty.
#[must_use]
pub fn page_slice<T>(items: &[T], page: u32, page_size: usize) -> &[T] {
    let Some(index) = (page as usize).checked_sub(1) else {
        return &[];
    };
    let start = index.saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}
