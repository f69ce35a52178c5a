//! Browsing service used by the chat transport.

mod service;
#[cfg(test)]
mod service_tests;

pub use service::{BookBrowser, BrowseReply};
