//! Book detail page extraction.

use super::fields::{AuthorField, FieldExtractor, FormatLinks, SynopsisField, TitleField};
use super::record::DocumentRecord;
use crate::config::ExtractionConfig;

/// Turns a book detail page into a [`DocumentRecord`].
///
/// Fields are extracted independently; a missing field stays empty. A page
/// without a title, or whose title is the catalog's "book not found"
/// placeholder, yields [`DocumentRecord::not_found`].
#[derive(Debug)]
pub struct DocumentExtractor {
    config: ExtractionConfig,
    title: Box<dyn FieldExtractor>,
    author: Box<dyn FieldExtractor>,
    synopsis: Box<dyn FieldExtractor>,
    formats: FormatLinks,
}

impl Default for DocumentExtractor {
    fn default() -> Self {
        Self::new(ExtractionConfig::default())
    }
}

impl DocumentExtractor {
    /// Creates an extractor with the standard field extractors.
    #[must_use]
    pub fn new(config: ExtractionConfig) -> Self {
        Self {
            synopsis: Box::new(SynopsisField::new(&config.synopsis_heading)),
            formats: FormatLinks::new(config.read_sentinel.clone()),
            title: Box::new(TitleField),
            author: Box::new(AuthorField),
            config,
        }
    }

    /// Replaces the title extractor.
    #[must_use]
    pub fn with_title_extractor(mut self, extractor: impl FieldExtractor + 'static) -> Self {
        self.title = Box::new(extractor);
        self
    }

    /// Replaces the author extractor.
    #[must_use]
    pub fn with_author_extractor(mut self, extractor: impl FieldExtractor + 'static) -> Self {
        self.author = Box::new(extractor);
        self
    }

    /// Replaces the synopsis extractor.
    #[must_use]
    pub fn with_synopsis_extractor(mut self, extractor: impl FieldExtractor + 'static) -> Self {
        self.synopsis = Box::new(extractor);
        self
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &ExtractionConfig {
        &self.config
    }

    /// Extracts the record for book `id` from `html`.
    #[must_use]
    pub fn extract(&self, html: &str, id: u64) -> DocumentRecord {
        let title = self.title.extract(html).unwrap_or_default();
        if title.is_empty() || title == self.config.not_found_title(id) {
            tracing::debug!(book_id = id, "Book page has no usable title");
            return DocumentRecord::not_found(id);
        }

        let record = DocumentRecord {
            id,
            title,
            author: self.author.extract(html).unwrap_or_default(),
            synopsis: self.synopsis.extract(html).unwrap_or_default(),
            formats: self.formats.extract(html, id),
            found: true,
        };

        tracing::debug!(
            book_id = id,
            has_author = !record.author.is_empty(),
            has_synopsis = !record.synopsis.is_empty(),
            formats = ?record.formats,
            "Extracted book page"
        );

        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::BookPageFixture;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_page() {
        let html = BookPageFixture::new(42, "Пикник на обочине")
            .author(1500, "Аркадий Стругацкий")
            .synopsis("line1<br />line2<br />line3")
            .formats(["read", "fb2"])
            .render();

        let record = DocumentExtractor::default().extract(&html, 42);

        assert_eq!(
            record,
            DocumentRecord {
                id: 42,
                title: "Пикник на обочине".to_string(),
                author: "Аркадий Стругацкий".to_string(),
                synopsis: "line1\nline2\nline3".to_string(),
                formats: vec!["fb2".to_string()],
                found: true,
            }
        );
        assert_eq!(record.synopsis.matches('\n').count(), 2);
    }

    #[test]
    fn test_entities_are_escaped_once_on_the_card() {
        let html = BookPageFixture::new(9, "Tom &amp; Jerry")
            .author(3, "Smith &amp; Co")
            .synopsis("&laquo;Hi&raquo; <i>it</i>")
            .formats(["fb2"])
            .render();

        let record = DocumentExtractor::default().extract(&html, 9);
        assert_eq!(record.title, "Tom & Jerry");
        assert_eq!(record.author, "Smith & Co");
        assert_eq!(record.synopsis, "«Hi» it");

        let card = crate::presenter::render_card(&record);
        assert_eq!(
            card.text,
            "Tom &amp; Jerry\n Smith &amp; Co\n\n «Hi» it\n\n Choose format for download:"
        );
        assert!(!card.text.contains("&amp;amp;"));
    }

    #[test]
    fn test_not_found_placeholder() {
        let html = "<html><head><title>Книга 99 не найдена</title></head><body></body></html>";
        let record = DocumentExtractor::default().extract(html, 99);
        assert_eq!(record, DocumentRecord::not_found(99));
    }

    #[test]
    fn test_placeholder_for_other_id_is_a_title() {
        let html = "<title>Книга 98 не найдена</title>";
        let record = DocumentExtractor::default().extract(html, 99);
        assert!(record.found);
    }

    #[test]
    fn test_not_found_discards_other_fields() {
        let html = r#"<title>Книга 5 не найдена</title><script></script><a href="/a/1">Someone</a><a href="/b/5/fb2">"#;
        let record = DocumentExtractor::default().extract(html, 5);
        assert_eq!(record, DocumentRecord::not_found(5));
    }

    #[test]
    fn test_missing_optional_fields() {
        let html = BookPageFixture::new(3, "Solaris").render();
        let record = DocumentExtractor::default().extract(&html, 3);
        assert!(record.found);
        assert_eq!(record.title, "Solaris");
        assert!(record.author.is_empty());
        assert!(record.synopsis.is_empty());
        assert!(record.formats.is_empty());
    }

    #[test]
    fn test_garbage_input() {
        let extractor = DocumentExtractor::default();
        assert_eq!(extractor.extract("", 1), DocumentRecord::not_found(1));
        assert_eq!(extractor.extract("<<<>>>\u{0}</p></title>", 1), DocumentRecord::not_found(1));
        assert_eq!(extractor.extract("<title>", 1), DocumentRecord::not_found(1));
    }

    #[test]
    fn test_custom_config() {
        let config = ExtractionConfig {
            synopsis_heading: "Annotation".to_string(),
            read_sentinel: "online".to_string(),
            not_found_title_template: "No book #{id}".to_string(),
        };
        let extractor = DocumentExtractor::new(config);

        let html = "<title>No book #8</title>";
        assert!(!extractor.extract(html, 8).found);

        let html = "<title>Ubik</title><h2>Annotation</h2>\n<p>text</p><a href=\"/b/8/online\"><a href=\"/b/8/read\">";
        let record = extractor.extract(html, 8);
        assert_eq!(record.synopsis, "text");
        assert_eq!(record.formats, vec!["read".to_string()]);
    }

    #[derive(Debug)]
    struct FixedTitle;

    impl FieldExtractor for FixedTitle {
        fn name(&self) -> &'static str {
            "title"
        }

        fn extract(&self, _html: &str) -> Option<String> {
            Some("Fixed".to_string())
        }
    }

    #[test]
    fn test_swapped_extractor() {
        let extractor = DocumentExtractor::default().with_title_extractor(FixedTitle);
        let record = extractor.extract("", 4);
        assert!(record.found);
        assert_eq!(record.title, "Fixed");
    }
}
