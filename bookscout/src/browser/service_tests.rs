//! Tests for the browsing service against in-memory catalogs.

#[cfg(test)]
mod tests {
    use crate::browser::{BookBrowser, BrowseReply};
    use crate::callback::CallbackAction;
    use crate::catalog::{MockCatalog, SearchHit};
    use crate::config::{BrowseConfig, SamplerConfig};
    use crate::errors::BookscoutError;
    use crate::presenter::EMPTY_BODY;
    use crate::testing::{search_hits, BookPageFixture, StaticCatalog};
    use pretty_assertions::assert_eq;

    fn picnic_page() -> String {
        BookPageFixture::new(42, "Пикник на обочине")
            .author(1500, "Аркадий Стругацкий")
            .synopsis("Зона.<br />Сталкеры.")
            .formats(["read", "fb2", "epub"])
            .render()
    }

    fn browser(catalog: StaticCatalog) -> BookBrowser<StaticCatalog> {
        BookBrowser::new(catalog, BrowseConfig::default())
    }

    #[tokio::test]
    async fn test_search_second_page() {
        let browser = browser(StaticCatalog::new().with_search("king", search_hits(100, 12)));

        let presentation = browser.search("king", 2).await;

        assert!(presentation.body.starts_with("Found 12 books"));
        assert!(presentation.body.contains("/download105"));
        assert!(presentation.body.contains("/download109"));
        assert!(!presentation.body.contains("/download110"));
        assert_eq!(presentation.layout.len(), 3);
        assert_eq!(browser.catalog().search_calls(), vec!["king"]);
    }

    #[tokio::test]
    async fn test_search_clamps_page() {
        let browser = browser(StaticCatalog::new().with_search("king", search_hits(100, 12)));

        let presentation = browser.search("king", 40).await;
        assert!(presentation.body.contains("/download110"));
        assert!(presentation.layout[2].is_selected());

        let presentation = browser.search("king", 0).await;
        assert!(presentation.body.contains("/download100"));
    }

    #[tokio::test]
    async fn test_failed_search_renders_sentinel() {
        let browser = browser(StaticCatalog::new().with_failing_search());
        let presentation = browser.search("king", 1).await;
        assert_eq!(presentation.body, EMPTY_BODY);
        assert!(presentation.layout.is_empty());
    }

    #[tokio::test]
    async fn test_search_errors_degrade_with_mock() {
        let mut catalog = MockCatalog::new();
        catalog
            .expect_search()
            .times(1)
            .returning(|_| Err(BookscoutError::Http("connection reset".to_string())));
        catalog.expect_fetch_book_page().never();

        let browser = BookBrowser::new(catalog, BrowseConfig::default());
        assert_eq!(browser.search("anything", 1).await.body, EMPTY_BODY);
    }

    #[tokio::test]
    async fn test_book_card() {
        let browser = browser(StaticCatalog::new().with_page(42, picnic_page()));

        let card = browser.book_card(42).await.unwrap();
        assert_eq!(
            card.text,
            "Пикник на обочине\n Аркадий Стругацкий\n\n Зона.\nСталкеры.\n\n Choose format for download:"
        );
        assert_eq!(
            card.actions,
            vec![CallbackAction::download(42, "fb2"), CallbackAction::download(42, "epub")]
        );
    }

    #[tokio::test]
    async fn test_book_card_missing() {
        let config = BrowseConfig::default();
        let catalog = StaticCatalog::new()
            .with_page(7, BookPageFixture::not_found_page(7, &config.extraction));
        let browser = BookBrowser::new(catalog, config);

        assert!(browser.book_card(7).await.is_none());
        assert!(browser.book_card(8).await.is_none());
        assert_eq!(browser.catalog().page_calls(), vec![7, 8]);
    }

    #[tokio::test]
    async fn test_download_requires_listed_format() {
        let browser = browser(
            StaticCatalog::new()
                .with_page(42, picnic_page())
                .with_file(42, "epub", "Piknik.epub", b"PK".to_vec()),
        );

        let (caption, file) = browser.download(42, "epub").await.unwrap();
        assert!(caption.starts_with("Пикник на обочине\n"));
        assert_eq!(file.file_name, "Piknik.epub");

        let err = browser.download(42, "read").await.unwrap_err();
        assert!(matches!(err, BookscoutError::UnsupportedFormat { id: 42, .. }));

        let err = browser.download(43, "epub").await.unwrap_err();
        assert!(matches!(err, BookscoutError::BookUnavailable { id: 43 }));

        assert_eq!(browser.catalog().download_calls(), vec![(42, "epub".to_string())]);
    }

    #[tokio::test]
    async fn test_handle_page_callback() {
        let browser = browser(StaticCatalog::new().with_search("king", search_hits(100, 30)));

        let first = browser.search("king", 1).await;
        let buttons = first.buttons(browser.codec()).unwrap();
        let last = buttons.last().unwrap();
        assert_eq!(last.label, "6>>");

        let reply = browser.handle_callback(&last.payload).await.unwrap();
        let BrowseReply::Listing(presentation) = reply else {
            panic!("expected a listing");
        };
        assert!(presentation.body.contains("/download129"));
        assert!(presentation.layout[4].is_selected());
    }

    #[tokio::test]
    async fn test_handle_download_callback() {
        let browser = browser(
            StaticCatalog::new()
                .with_page(42, picnic_page())
                .with_file(42, "fb2", "Piknik.fb2.zip", vec![1, 2, 3]),
        );

        let card = browser.book_card(42).await.unwrap();
        let buttons = card.buttons(browser.codec()).unwrap();

        let reply = browser.handle_callback(&buttons[0].payload).await.unwrap();
        match reply {
            BrowseReply::File {
                file_name, size, bytes, ..
            } => {
                assert_eq!(file_name, "Piknik.fb2.zip");
                assert_eq!(size, 3);
                assert_eq!(bytes, vec![1, 2, 3]);
            }
            BrowseReply::Listing(_) => panic!("expected a file"),
        }
    }

    #[tokio::test]
    async fn test_handle_bad_callback() {
        let browser = browser(StaticCatalog::new());
        let err = browser.handle_callback("not json").await.unwrap_err();
        assert!(matches!(err, BookscoutError::InvalidCallback(_)));
    }

    #[tokio::test]
    async fn test_long_query_round_trip() {
        let query = "Приключения Шерлока Холмса и доктора Ватсона";
        let browser = browser(StaticCatalog::new().with_search(query, vec![SearchHit::new(5, "Этюд в багровых тонах")]));

        let presentation = browser.search(query, 1).await;
        let buttons = presentation.buttons(browser.codec()).unwrap();
        assert!(buttons[0].payload.len() <= 64);

        let reply = browser.handle_callback(&buttons[0].payload).await.unwrap();
        assert_eq!(reply, BrowseReply::Listing(presentation));
    }

    #[tokio::test]
    async fn test_random_book_uses_fallback_when_catalog_is_empty() {
        let config = BrowseConfig::default().with_sampler(
            SamplerConfig::default()
                .with_retry_budget(3)
                .with_id_space_max(10)
                .with_fallback_id(42),
        );
        let catalog = StaticCatalog::new().with_page(42, picnic_page());
        let browser = BookBrowser::new(catalog, config);

        let outcome = browser.random_book().await;

        assert!(outcome.used_fallback);
        assert_eq!(outcome.record.title, "Пикник на обочине");
        let calls = browser.catalog().page_calls();
        assert_eq!(calls.len(), 4);
        assert_eq!(calls.last(), Some(&42));
    }

    #[tokio::test]
    async fn test_random_book_finds_existing_book() {
        let config = BrowseConfig::default().with_sampler(
            SamplerConfig::default()
                .with_retry_budget(50)
                .with_id_space_max(1)
                .with_fallback_id(99),
        );
        let catalog = StaticCatalog::new().with_page(0, BookPageFixture::new(0, "Zero").render());
        let browser = BookBrowser::new(catalog, config);

        let outcome = browser.random_book().await;

        assert!(!outcome.used_fallback);
        assert_eq!(outcome.record.id, 0);
        assert_eq!(browser.catalog().page_calls(), vec![0]);
    }
}
