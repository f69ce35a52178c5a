//! Navigation tokens.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How a page token is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenKind {
    /// A plain page number.
    Page,
    /// The page being shown.
    Current,
    /// Jump to the first page.
    First,
    /// Step back.
    Previous,
    /// Step forward.
    Next,
    /// Jump to the last page.
    Last,
}

/// One navigation control: a label and the page it leads to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PageToken {
    /// Presentation of the token.
    pub kind: TokenKind,
    /// Page the token navigates to (1-based).
    pub target_page: u32,
}

impl PageToken {
    /// Creates a token.
    #[must_use]
    pub const fn new(kind: TokenKind, target_page: u32) -> Self {
        Self { kind, target_page }
    }

    /// A literal page, marked as current when it is the page being shown.
    #[must_use]
    pub const fn numbered(page: u32, current_page: u32) -> Self {
        let kind = if page == current_page {
            TokenKind::Current
        } else {
            TokenKind::Page
        };
        Self::new(kind, page)
    }

    /// Whether the token is the page being shown.
    #[must_use]
    pub fn is_selected(&self) -> bool {
        self.kind == TokenKind::Current
    }

    /// Whether pressing the token changes the page.
    #[must_use]
    pub fn is_actionable(&self) -> bool {
        !self.is_selected()
    }

    /// Button label.
    #[must_use]
    pub fn label(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for PageToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let page = self.target_page;
        match self.kind {
            TokenKind::Page => write!(f, "{page}"),
            TokenKind::Current => write!(f, "·{page}·"),
            TokenKind::First => write!(f, "<<{page}"),
            TokenKind::Previous => write!(f, "<{page}"),
            TokenKind::Next => write!(f, "{page}>"),
            TokenKind::Last => write!(f, "{page}>>"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels() {
        assert_eq!(PageToken::new(TokenKind::Page, 2).label(), "2");
        assert_eq!(PageToken::new(TokenKind::Current, 2).label(), "·2·");
        assert_eq!(PageToken::new(TokenKind::First, 1).label(), "<<1");
        assert_eq!(PageToken::new(TokenKind::Previous, 4).label(), "<4");
        assert_eq!(PageToken::new(TokenKind::Next, 6).label(), "6>");
        assert_eq!(PageToken::new(TokenKind::Last, 10).label(), "10>>");
    }

    #[test]
    fn test_numbered() {
        assert!(PageToken::numbered(3, 3).is_selected());
        assert!(!PageToken::numbered(3, 2).is_selected());
        assert!(PageToken::numbered(3, 2).is_actionable());
    }
}
