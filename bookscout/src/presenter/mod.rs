//! Rendering of listings and book cards for the chat transport.
//!
//! The transport turns [`Presentation`] and [`BookCard`] into messages and
//! their [`InlineButton`]s into controls.

mod card;
mod html;
mod listing;

pub use card::{render_caption, render_card, BookCard};
pub use html::escape_html;
pub use listing::{InlineButton, Presentation, ResultSetPresenter, EMPTY_BODY};
