//! Random book sampling over a sparse identifier space.
//!
//! Most identifiers in the catalog's range do not resolve to a book. The
//! sampler draws identifiers uniformly, asks a fetch collaborator for each
//! one in turn and stops at the first book that exists. After
//! `retry_budget` misses it fetches the configured fallback identifier and
//! returns that record as is.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use std::future::Future;

use crate::config::SamplerConfig;
use crate::extract::DocumentRecord;

/// Result of a sampling run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SamplingOutcome {
    /// The chosen book.
    pub record: DocumentRecord,
    /// Number of fetch calls made, fallback included.
    pub attempts: u32,
    /// Whether the record came from the fallback identifier.
    pub used_fallback: bool,
}

/// Bounded random search for an existing book.
#[derive(Debug, Clone, Default)]
pub struct CandidateSampler {
    config: SamplerConfig,
}

impl CandidateSampler {
    /// Creates a sampler.
    #[must_use]
    pub fn new(config: SamplerConfig) -> Self {
        Self { config }
    }

    /// Gets the configuration.
    #[must_use]
    pub fn config(&self) -> &SamplerConfig {
        &self.config
    }

    /// Samples with a freshly seeded generator.
    pub async fn sample_valid<F, Fut>(&self, fetch: F) -> SamplingOutcome
    where
        F: FnMut(u64) -> Fut,
        Fut: Future<Output = DocumentRecord>,
    {
        let mut rng = StdRng::from_entropy();
        self.sample_valid_with_rng(&mut rng, fetch).await
    }

    /// Samples using `rng`; a seeded generator gives a reproducible run.
    ///
    /// Fetches are awaited one at a time. A fetch that never finds a book is
    /// called exactly `retry_budget + 1` times.
    pub async fn sample_valid_with_rng<R, F, Fut>(&self, rng: &mut R, mut fetch: F) -> SamplingOutcome
    where
        R: Rng + ?Sized,
        F: FnMut(u64) -> Fut,
        Fut: Future<Output = DocumentRecord>,
    {
        let mut attempts = 0;

        if self.config.id_space_max > 0 {
            while attempts < self.config.retry_budget {
                let id = rng.gen_range(0..self.config.id_space_max);
                let record = fetch(id).await;
                attempts += 1;

                if record.found {
                    tracing::debug!(attempt = attempts, book_id = id, "Sampled existing book");
                    return SamplingOutcome {
                        record,
                        attempts,
                        used_fallback: false,
                    };
                }

                tracing::debug!(attempt = attempts, book_id = id, "Sampled id has no book, resampling");
            }
        }

        tracing::info!(
            attempts,
            fallback_id = self.config.fallback_id,
            "Sampling budget exhausted, using fallback book"
        );

        SamplingOutcome {
            record: fetch(self.config.fallback_id).await,
            attempts: attempts + 1,
            used_fallback: true,
        }
    }
}
