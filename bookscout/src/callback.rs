//! Callback payloads attached to inline buttons.
//!
//! A button press comes back as an opaque string. [`CallbackAction`] is the
//! decoded form; [`CallbackCodec`] turns actions into compact JSON and back.
//! Chat platforms cap payloads (64 bytes by default), so a page request whose
//! query does not fit carries a short digest of the query instead, resolved
//! through an in-memory cache on decode.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::CallbackConfig;
use crate::errors::{BookscoutError, Result};

/// Prefix marking a digested query.
pub const DIGEST_PREFIX: char = '#';

/// Hex digits kept from the query digest.
const DIGEST_HEX_LEN: usize = 12;

/// What a pressed button asks for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t")]
pub enum CallbackAction {
    /// Show another page of a search.
    #[serde(rename = "page")]
    Page {
        /// Search query.
        #[serde(rename = "q")]
        query: String,
        /// Page to show (1-based).
        #[serde(rename = "p")]
        page: u32,
    },
    /// Download a book in a format.
    #[serde(rename = "dl")]
    Download {
        /// Book identifier.
        id: u64,
        /// Format tag.
        #[serde(rename = "f")]
        format: String,
    },
}

impl CallbackAction {
    /// A page request.
    #[must_use]
    pub fn page(query: impl Into<String>, page: u32) -> Self {
        Self::Page {
            query: query.into(),
            page,
        }
    }

    /// A download request.
    #[must_use]
    pub fn download(id: u64, format: impl Into<String>) -> Self {
        Self::Download {
            id,
            format: format.into(),
        }
    }
}

/// Encodes and decodes callback payloads.
#[derive(Debug)]
pub struct CallbackCodec {
    config: CallbackConfig,
    digests: DashMap<String, String>,
}

impl Default for CallbackCodec {
    fn default() -> Self {
        Self::new(CallbackConfig::default())
    }
}

impl CallbackCodec {
    /// Creates a codec.
    #[must_use]
    pub fn new(config: CallbackConfig) -> Self {
        Self {
            config,
            digests: DashMap::new(),
        }
    }

    /// Number of remembered query digests.
    #[must_use]
    pub fn cached_queries(&self) -> usize {
        self.digests.len()
    }

    /// Encodes an action, digesting the query if the payload is too long.
    pub fn encode(&self, action: &CallbackAction) -> Result<String> {
        let payload = match action {
            CallbackAction::Page { query, page } if query.starts_with(DIGEST_PREFIX) => {
                self.encode_digested(query, *page)?
            }
            _ => serde_json::to_string(action)?,
        };
        if payload.len() <= self.config.max_payload_bytes {
            return Ok(payload);
        }

        let payload = match action {
            CallbackAction::Page { query, page } => self.encode_digested(query, *page)?,
            CallbackAction::Download { .. } => payload,
        };
        if payload.len() > self.config.max_payload_bytes {
            return Err(BookscoutError::InvalidCallback(format!(
                "payload of {} bytes exceeds the {} byte limit",
                payload.len(),
                self.config.max_payload_bytes
            )));
        }
        Ok(payload)
    }

    /// Decodes a payload produced by [`encode`](Self::encode).
    pub fn decode(&self, payload: &str) -> Result<CallbackAction> {
        let action: CallbackAction = serde_json::from_str(payload)
            .map_err(|e| BookscoutError::InvalidCallback(e.to_string()))?;

        match action {
            CallbackAction::Page { page: 0, .. } => Err(BookscoutError::InvalidCallback(
                "page numbers start at 1".to_string(),
            )),
            CallbackAction::Page { query, page } if query.starts_with(DIGEST_PREFIX) => {
                let full = self
                    .digests
                    .get(&query)
                    .map(|entry| entry.value().clone())
                    .ok_or(BookscoutError::ExpiredCallback(query))?;
                Ok(CallbackAction::Page { query: full, page })
            }
            other => Ok(other),
        }
    }

    fn encode_digested(&self, query: &str, page: u32) -> Result<String> {
        let digest = Self::digest(query);
        if !self.digests.contains_key(&digest) {
            if self.digests.len() >= self.config.digest_cache_capacity {
                tracing::warn!(
                    capacity = self.config.digest_cache_capacity,
                    "Callback digest cache full, dropping remembered queries"
                );
                self.digests.clear();
            }
            self.digests.insert(digest.clone(), query.to_string());
        }
        Ok(serde_json::to_string(&CallbackAction::Page {
            query: digest,
            page,
        })?)
    }

    fn digest(query: &str) -> String {
        let hash = hex::encode(Sha256::digest(query.as_bytes()));
        format!("{DIGEST_PREFIX}{}", &hash[..DIGEST_HEX_LEN])
    }
}
