//! HTML fixtures shaped like the catalog's pages.

use crate::catalog::SearchHit;
use crate::config::ExtractionConfig;

/// Builder for a book detail page.
#[derive(Debug, Clone, Default)]
pub struct BookPageFixture {
    id: u64,
    title: String,
    author: Option<(u64, String)>,
    synopsis: Option<String>,
    formats: Vec<String>,
}

impl BookPageFixture {
    /// Starts a page for book `id`.
    #[must_use]
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            ..Default::default()
        }
    }

    /// Sets the author link.
    #[must_use]
    pub fn author(mut self, id: u64, name: impl Into<String>) -> Self {
        self.author = Some((id, name.into()));
        self
    }

    /// Sets the annotation paragraph (raw HTML).
    #[must_use]
    pub fn synopsis(mut self, synopsis: impl Into<String>) -> Self {
        self.synopsis = Some(synopsis.into());
        self
    }

    /// Sets the format links, `read` included if wanted.
    #[must_use]
    pub fn formats<I, S>(mut self, formats: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.formats = formats.into_iter().map(Into::into).collect();
        self
    }

    /// Renders the page.
    #[must_use]
    pub fn render(&self) -> String {
        let mut html = format!(
            "<!DOCTYPE html>\n<html><head><title>{} (fb2) | Флибуста</title></head>\n<body>\n<h1 class=\"title\">{} (fb2)</h1>\n",
            self.title, self.title
        );
        if let Some((id, name)) = &self.author {
            html.push_str(&format!(
                "<script type=\"text/javascript\">init();</script><a href=\"/a/{id}\">{name}</a><br>\n"
            ));
        }
        if let Some(synopsis) = &self.synopsis {
            html.push_str(&format!("<h2>Аннотация</h2>\n<p>{synopsis}</p>\n"));
        }
        for format in &self.formats {
            html.push_str(&format!(
                "(<a href=\"/b/{}/{format}\">{format}</a>) ",
                self.id
            ));
        }
        html.push_str("\n</body></html>\n");
        html
    }

    /// The page the catalog serves for a missing book.
    #[must_use]
    pub fn not_found_page(id: u64, config: &ExtractionConfig) -> String {
        format!(
            "<!DOCTYPE html>\n<html><head><title>{}</title></head><body></body></html>\n",
            config.not_found_title(id)
        )
    }
}

/// `count` search hits with ids starting at `first_id`.
#[must_use]
pub fn search_hits(first_id: u64, count: u64) -> Vec<SearchHit> {
    (0..count)
        .map(|i| {
            SearchHit::new(first_id + i, format!("Book {i}")).with_author(1_000 + i, format!("Author {i}"))
        })
        .collect()
}
