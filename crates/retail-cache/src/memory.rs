//! In-memory cache implementation.

use async_trait::async_trait;
use chrono::{DateTime, TimeDelta, Utc};
use retail_core::{Clock, Dataset, InvoiceBatch, Result, SystemClock, TransactionCache};
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Default time window a cached dataset stays fresh: one hour.
pub const DEFAULT_TTL: Duration = Duration::from_secs(60 * 60);

/// Cache entry with its own refresh timestamp for TTL-based invalidation.
///
/// Each dataset's slot is stamped independently; refreshing one dataset
/// never makes the other appear fresh.
#[derive(Debug, Clone)]
struct CacheEntry {
    batch: InvoiceBatch,
    cached_at: DateTime<Utc>,
}

impl CacheEntry {
    fn is_stale(&self, ttl: Duration, now: DateTime<Utc>) -> bool {
        let age = now.signed_duration_since(self.cached_at);
        age >= TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX)
    }
}

/// TTL-based in-process cache for loaded datasets.
///
/// Slots are stored in a `RwLock`-protected `HashMap` keyed by [`Dataset`]
/// and are lost when the cache is dropped. Batches are cloned on get and
/// put, so callers can never mutate the cached backing list in place.
/// Freshness is decided against the injected [`Clock`].
#[derive(Debug)]
pub struct InMemoryCache {
    entries: RwLock<HashMap<Dataset, CacheEntry>>,
    ttl: Duration,
    clock: Arc<dyn Clock>,
}

impl Default for InMemoryCache {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCache {
    /// Create a cache with the default one-hour TTL and the system clock.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl: DEFAULT_TTL,
            clock: Arc::new(SystemClock::new()),
        }
    }

    /// Set the time window a cached dataset stays fresh.
    #[must_use]
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Replace the time source used for freshness decisions.
    #[must_use]
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Returns the configured TTL.
    #[must_use]
    pub const fn ttl(&self) -> Duration {
        self.ttl
    }
}

#[async_trait]
impl TransactionCache for InMemoryCache {
    #[instrument(skip(self))]
    async fn get(&self, dataset: Dataset) -> Result<Option<InvoiceBatch>> {
        let now = self.clock.now();
        let entries = self.entries.read().await;
        match entries.get(&dataset) {
            Some(entry) if !entry.is_stale(self.ttl, now) => {
                debug!(dataset = %dataset, rows = entry.batch.len(), "Cache hit");
                Ok(Some(entry.batch.clone()))
            }
            Some(_) => {
                debug!(dataset = %dataset, "Cache entry expired");
                Ok(None)
            }
            None => {
                debug!(dataset = %dataset, "Cache miss");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, batch), fields(rows = batch.len()))]
    async fn put(&self, dataset: Dataset, batch: &InvoiceBatch) -> Result<()> {
        let entry = CacheEntry {
            batch: batch.clone(),
            cached_at: self.clock.now(),
        };
        self.entries.write().await.insert(dataset, entry);
        debug!(dataset = %dataset, "Cached dataset");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn invalidate_stale(&self, ttl: Duration) -> Result<usize> {
        let now = self.clock.now();
        let mut entries = self.entries.write().await;
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_stale(ttl, now));
        let removed = before - entries.len();
        if removed > 0 {
            debug!(removed, "Invalidated stale cache entries");
        }
        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        self.entries.write().await.clear();
        debug!("Cleared all cache entries");
        Ok(())
    }
}
