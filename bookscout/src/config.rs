//! Configuration types for browsing, extraction and sampling.
//!
//! Every component receives its section of [`BrowseConfig`] at construction;
//! nothing reads process-wide globals.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use std::time::Duration;

use crate::errors::{BookscoutError, Result};

/// Environment variable overriding [`CatalogConfig::origin`].
pub const ENV_ORIGIN: &str = "BOOKSCOUT_ORIGIN";
/// Environment variable overriding [`BrowseConfig::page_size`].
pub const ENV_PAGE_SIZE: &str = "BOOKSCOUT_PAGE_SIZE";

/// Configuration for the upstream catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Base address of the catalog, without a trailing slash.
    #[serde(default = "default_origin")]
    pub origin: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: f64,
    /// User agent string.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Additional headers to include.
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

fn default_origin() -> String {
    "http://flibusta.is".to_string()
}

fn default_timeout() -> f64 {
    30.0
}

fn default_user_agent() -> String {
    "bookscout/0.1".to_string()
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            origin: default_origin(),
            timeout_seconds: default_timeout(),
            user_agent: default_user_agent(),
            headers: HashMap::new(),
        }
    }
}

impl CatalogConfig {
    /// Sets the origin. A trailing slash is dropped.
    #[must_use]
    pub fn with_origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = origin.into().trim_end_matches('/').to_string();
        self
    }

    /// Sets the timeout.
    #[must_use]
    pub fn with_timeout(mut self, seconds: f64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// Gets timeout as Duration.
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs_f64(self.timeout_seconds)
    }

    /// Joins a path onto the origin.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.origin.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

/// Configuration for book page extraction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExtractionConfig {
    /// Heading that introduces the synopsis paragraph.
    #[serde(default = "default_synopsis_heading")]
    pub synopsis_heading: String,
    /// Pseudo-format linking to the online reader, never downloadable.
    #[serde(default = "default_read_sentinel")]
    pub read_sentinel: String,
    /// Title served for missing books. `{id}` is replaced by the identifier.
    #[serde(default = "default_not_found_template")]
    pub not_found_title_template: String,
}

fn default_synopsis_heading() -> String {
    "Аннотация".to_string()
}

fn default_read_sentinel() -> String {
    "read".to_string()
}

fn default_not_found_template() -> String {
    "Книга {id} не найдена".to_string()
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            synopsis_heading: default_synopsis_heading(),
            read_sentinel: default_read_sentinel(),
            not_found_title_template: default_not_found_template(),
        }
    }
}

impl ExtractionConfig {
    /// Renders the not-found title for a given book.
    #[must_use]
    pub fn not_found_title(&self, id: u64) -> String {
        self.not_found_title_template.replace("{id}", &id.to_string())
    }
}

/// Configuration for random book sampling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct SamplerConfig {
    /// Identifiers are drawn from `[0, id_space_max)`.
    #[serde(default = "default_id_space_max")]
    pub id_space_max: u64,
    /// Number of random draws before falling back.
    #[serde(default = "default_retry_budget")]
    pub retry_budget: u32,
    /// Known-good identifier used once the budget is exhausted.
    #[serde(default = "default_fallback_id")]
    pub fallback_id: u64,
}

fn default_id_space_max() -> u64 {
    750_000
}

fn default_retry_budget() -> u32 {
    10
}

fn default_fallback_id() -> u64 {
    314_781
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            id_space_max: default_id_space_max(),
            retry_budget: default_retry_budget(),
            fallback_id: default_fallback_id(),
        }
    }
}

impl SamplerConfig {
    /// Sets the retry budget.
    #[must_use]
    pub fn with_retry_budget(mut self, budget: u32) -> Self {
        self.retry_budget = budget;
        self
    }

    /// Sets the identifier space.
    #[must_use]
    pub fn with_id_space_max(mut self, max: u64) -> Self {
        self.id_space_max = max;
        self
    }

    /// Sets the fallback identifier.
    #[must_use]
    pub fn with_fallback_id(mut self, id: u64) -> Self {
        self.fallback_id = id;
        self
    }
}

/// Configuration for callback payloads.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackConfig {
    /// Maximum encoded payload size in bytes.
    #[serde(default = "default_max_payload")]
    pub max_payload_bytes: usize,
    /// Maximum number of remembered query digests.
    #[serde(default = "default_digest_capacity")]
    pub digest_cache_capacity: usize,
}

fn default_max_payload() -> usize {
    64
}

fn default_digest_capacity() -> usize {
    10_000
}

impl Default for CallbackConfig {
    fn default() -> Self {
        Self {
            max_payload_bytes: default_max_payload(),
            digest_cache_capacity: default_digest_capacity(),
        }
    }
}

/// Combined configuration for the browser.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrowseConfig {
    /// Number of search hits per page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Extraction configuration.
    #[serde(default)]
    pub extraction: ExtractionConfig,
    /// Sampler configuration.
    #[serde(default)]
    pub sampler: SamplerConfig,
    /// Callback configuration.
    #[serde(default)]
    pub callback: CallbackConfig,
}

fn default_page_size() -> usize {
    5
}

impl Default for BrowseConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            catalog: CatalogConfig::default(),
            extraction: ExtractionConfig::default(),
            sampler: SamplerConfig::default(),
            callback: CallbackConfig::default(),
        }
    }
}

impl BrowseConfig {
    /// Creates a new configuration with defaults.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the page size.
    #[must_use]
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the sampler configuration.
    #[must_use]
    pub fn with_sampler(mut self, sampler: SamplerConfig) -> Self {
        self.sampler = sampler;
        self
    }

    /// Parses a JSON document. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }

    /// Applies overrides from the process environment.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    /// Applies overrides from an arbitrary variable lookup.
    pub fn with_overrides<F>(mut self, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(origin) = lookup(ENV_ORIGIN) {
            self.catalog = self.catalog.with_origin(origin);
        }
        if let Some(raw) = lookup(ENV_PAGE_SIZE) {
            self.page_size = raw
                .trim()
                .parse()
                .map_err(|_| BookscoutError::Config(format!("{ENV_PAGE_SIZE}={raw} is not a number")))?;
        }
        self.validate()?;
        Ok(self)
    }

    /// Checks the values that would make a component misbehave.
    pub fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(BookscoutError::Config("page_size must be positive".to_string()));
        }
        if self.catalog.origin.trim().is_empty() {
            return Err(BookscoutError::Config("catalog.origin must not be empty".to_string()));
        }
        if self.catalog.timeout_seconds <= 0.0 {
            return Err(BookscoutError::Config(
                "catalog.timeout_seconds must be positive".to_string(),
            ));
        }
        if self.callback.max_payload_bytes < 32 {
            return Err(BookscoutError::Config(
                "callback.max_payload_bytes must be at least 32".to_string(),
            ));
        }
        Ok(())
    }
}
