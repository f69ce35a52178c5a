//! Detail card for a single book.

use serde::{Deserialize, Serialize};

use super::html::escape_html;
use super::listing::InlineButton;
use crate::callback::{CallbackAction, CallbackCodec};
use crate::errors::Result;
use crate::extract::DocumentRecord;

const FORMAT_PROMPT: &str = "Choose format for download:";

/// Book details plus one download action per format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookCard {
    /// Message text (HTML).
    pub text: String,
    /// Download actions, in format order.
    pub actions: Vec<CallbackAction>,
}

impl BookCard {
    /// Download buttons labelled with the format tag.
    pub fn buttons(&self, codec: &CallbackCodec) -> Result<Vec<InlineButton>> {
        self.actions
            .iter()
            .map(|action| {
                let label = match action {
                    CallbackAction::Download { format, .. } => format.clone(),
                    CallbackAction::Page { page, .. } => page.to_string(),
                };
                Ok(InlineButton {
                    label,
                    payload: codec.encode(action)?,
                })
            })
            .collect()
    }
}

/// Renders a book's details.
#[must_use]
pub fn render_card(record: &DocumentRecord) -> BookCard {
    BookCard {
        text: format!("{}\n {FORMAT_PROMPT}", render_caption(record)),
        actions: record
            .formats
            .iter()
            .map(|format| CallbackAction::download(record.id, format))
            .collect(),
    }
}

/// Text shown above a delivered book file.
#[must_use]
pub fn render_caption(record: &DocumentRecord) -> String {
    format!(
        "{}\n {}\n\n {}\n",
        escape_html(&record.title),
        escape_html(&record.author),
        escape_html(&record.synopsis)
    )
}
