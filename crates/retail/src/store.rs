//! Cached front for a transaction source.

use std::sync::Arc;

use tracing::{debug, error, warn};

use retail_core::{Dataset, InvoiceBatch, TransactionCache, TransactionSource};

/// Cached access to the two transaction datasets.
///
/// The store consults the cache before touching the source, and soft-handles
/// source failures: a missing or unreadable backing file is logged and
/// yields an empty batch, leaving any cached data at its prior state so a
/// miss never poisons the cache.
///
/// Both the hit and the miss path hand the caller data that is independent
/// of the cache's backing storage; mutating a returned batch never affects
/// later loads.
///
/// # Example
///
/// ```rust,ignore
/// use std::sync::Arc;
/// use retail::{CsvTransactionSource, InMemoryCache, TransactionStore};
///
/// let store = TransactionStore::new(Arc::new(CsvTransactionSource::new()))
///     .with_cache(Arc::new(InMemoryCache::new()));
///
/// let cleaned = store.load_cleaned().await;
/// store.clear_cache().await; // next load re-reads from disk
/// ```
pub struct TransactionStore {
    source: Arc<dyn TransactionSource>,
    cache: Option<Arc<dyn TransactionCache>>,
}

impl std::fmt::Debug for TransactionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TransactionStore")
            .field("source", &self.source.name())
            .field("cache", &self.cache.as_ref().map(|_| "configured"))
            .finish()
    }
}

impl TransactionStore {
    /// Create a store over the given source, with no cache.
    #[must_use]
    pub fn new(source: Arc<dyn TransactionSource>) -> Self {
        Self {
            source,
            cache: None,
        }
    }

    /// Set the cache for this store.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn TransactionCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Load the cleaned dataset (excludes cancelled/returned transactions).
    pub async fn load_cleaned(&self) -> InvoiceBatch {
        self.load(Dataset::Cleaned).await
    }

    /// Load the full dataset (includes cancellations).
    pub async fn load_full(&self) -> InvoiceBatch {
        self.load(Dataset::Full).await
    }

    /// Load a dataset, consulting the cache first.
    ///
    /// A fresh cache hit performs no file I/O. On a miss the source is read
    /// and the result cached; a cache-write failure is logged and otherwise
    /// ignored. A source failure is logged and yields an empty batch.
    pub async fn load(&self, dataset: Dataset) -> InvoiceBatch {
        if let Some(cache) = &self.cache {
            // A cache read error is treated as a miss
            if let Ok(Some(batch)) = cache.get(dataset).await {
                debug!(dataset = %dataset, rows = batch.len(), "Serving dataset from cache");
                return batch;
            }
        }

        debug!(source = self.source.name(), dataset = %dataset, "Loading dataset");
        match self.source.load(dataset).await {
            Ok(batch) => {
                if let Some(cache) = &self.cache {
                    if let Err(e) = cache.put(dataset, &batch).await {
                        warn!(dataset = %dataset, error = %e, "Failed to cache dataset");
                    }
                }
                batch
            }
            Err(e) => {
                error!(
                    source = self.source.name(),
                    dataset = %dataset,
                    error = %e,
                    "Failed to load dataset"
                );
                InvoiceBatch::default()
            }
        }
    }

    /// Unconditionally discard all cached datasets.
    ///
    /// The next load re-reads from the source regardless of elapsed time.
    pub async fn clear_cache(&self) {
        if let Some(cache) = &self.cache {
            if let Err(e) = cache.clear().await {
                warn!(error = %e, "Failed to clear cache");
            } else {
                debug!("Cache cleared");
            }
        }
    }
}
