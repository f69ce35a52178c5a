//! HTTP implementation of the catalog collaborator.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_DISPOSITION};
use std::time::Instant;

use super::models::{BookFile, SearchHit};
use super::protocols::{book_path, download_path, file_name_from_disposition, Catalog};
use super::search_page::parse_search_results;
use crate::config::CatalogConfig;
use crate::errors::{BookscoutError, Result};

/// Catalog reached over HTTP.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: reqwest::Client,
    config: CatalogConfig,
}

impl HttpCatalog {
    /// Creates a client for the configured origin.
    pub fn new(config: CatalogConfig) -> Result<Self> {
        if !(config.timeout_seconds.is_finite() && config.timeout_seconds > 0.0) {
            return Err(BookscoutError::Config(format!(
                "timeout_seconds must be positive, got {}",
                config.timeout_seconds
            )));
        }

        let mut headers = HeaderMap::new();
        for (key, value) in &config.headers {
            let name = HeaderName::from_bytes(key.as_bytes())
                .map_err(|e| BookscoutError::Config(format!("header name '{key}': {e}")))?;
            let value = HeaderValue::from_str(value)
                .map_err(|e| BookscoutError::Config(format!("header '{key}': {e}")))?;
            headers.insert(name, value);
        }

        let client = reqwest::Client::builder()
            .timeout(config.timeout())
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &CatalogConfig {
        &self.config
    }

    async fn get(&self, path: &str, query: &[(&str, &str)]) -> Result<reqwest::Response> {
        let url = self.config.url(path);
        let started = Instant::now();

        let response = self.client.get(&url).query(query).send().await?;
        let status = response.status();

        tracing::debug!(
            url = %url,
            status = status.as_u16(),
            duration_ms = started.elapsed().as_secs_f64() * 1000.0,
            "Catalog request finished"
        );

        if !status.is_success() {
            return Err(BookscoutError::HttpStatus {
                status: status.as_u16(),
                url,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    async fn search(&self, query: &str) -> Result<Vec<SearchHit>> {
        let response = self
            .get("booksearch", &[("ask", query), ("chb", "on")])
            .await?;
        let html = response.text().await?;
        Ok(parse_search_results(&html))
    }

    async fn fetch_book_page(&self, id: u64) -> Result<String> {
        let response = self.get(&book_path(id), &[]).await?;
        Ok(response.text().await?)
    }

    async fn download(&self, id: u64, format: &str) -> Result<BookFile> {
        let response = self.get(&download_path(id, format), &[]).await?;

        let file_name = response
            .headers()
            .get(CONTENT_DISPOSITION)
            .and_then(|value| value.to_str().ok())
            .and_then(file_name_from_disposition)
            .ok_or(BookscoutError::BookUnavailable { id })?;
        let bytes = response.bytes().await?.to_vec();

        tracing::info!(book_id = id, format, file_name = %file_name, size = bytes.len(), "Downloaded book");

        Ok(BookFile {
            id,
            file_name,
            bytes,
        })
    }
}
